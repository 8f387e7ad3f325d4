//! UMKM Detail Component
//!
//! Read-only page for a single record at `/umkms/:id`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::commands::UmkmApi;
use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::models::Umkm;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Umkm),
    Failed(String),
}

#[component]
pub fn UmkmDetail() -> impl IntoView {
    let api = StoredValue::new_local(use_app_context().api());
    let params = use_params_map();
    let (state, set_state) = signal(DetailState::Loading);

    // Reload when the :id segment changes
    Effect::new(move |_| {
        let raw_id = params.read().get("id");
        let id = raw_id.as_deref().and_then(|s| s.parse::<i64>().ok());
        let Some(id) = id else {
            set_state.set(DetailState::Failed(format!("Invalid UMKM id: {}", raw_id.unwrap_or_default())));
            return;
        };

        set_state.set(DetailState::Loading);
        let api = api.get_value();
        spawn_local(async move {
            match api.get_umkm(id).await {
                Ok(umkm) => set_state.set(DetailState::Loaded(umkm)),
                Err(err) => {
                    log::error!("Error fetching UMKM {}: {}", id, err);
                    set_state.set(DetailState::Failed("Failed to load UMKM.".to_string()));
                }
            }
        });
    });

    view! {
        <div class="container">
            <a class="back-link" href="/umkms">"← All UMKMs"</a>
            {move || match state.get() {
                DetailState::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
                DetailState::Failed(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                DetailState::Loaded(umkm) => view! {
                    <div class="card">
                        <div class="card-header">
                            <h1 class="card-title">{umkm.name.clone()}</h1>
                            <StatusBadge status=umkm.status.clone() />
                        </div>
                        <div class="card-content">
                            <dl class="detail-list">
                                <dt>"ID"</dt>
                                <dd>{umkm.id}</dd>
                                <dt>"Type"</dt>
                                <dd>{umkm.kind}</dd>
                                <dt>"Location"</dt>
                                <dd>{umkm.location}</dd>
                            </dl>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
