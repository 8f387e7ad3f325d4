//! Toaster Component
//!
//! Fixed-position stack of queued toasts. Click to dismiss.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.get()
                key=|queued| queued.id
                children=move |queued| {
                    let id = queued.id;
                    let class = match queued.toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.dismiss(id)>
                            <div class="toast-title">{queued.toast.title}</div>
                            <div class="toast-description">{queued.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
