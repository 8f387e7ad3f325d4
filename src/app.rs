//! UMKM Admin App
//!
//! Root component: shared context, routes and the toaster.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Toaster, UmkmDetail, UmkmList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::toast::ToastContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[APP] API base URL: {}", config.base_url());

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(ToastContext::new());

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=UmkmList />
                    <Route path=path!("/umkms") view=UmkmList />
                    <Route path=path!("/umkms/:id") view=UmkmDetail />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
