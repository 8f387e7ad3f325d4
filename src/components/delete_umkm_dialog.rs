//! Delete UMKM Dialog Component
//!
//! Delete button that asks for confirmation in a modal before acting.

use leptos::prelude::*;

/// Delete confirmation dialog
///
/// Shows a Delete button initially. When clicked, opens a modal naming the
/// record with Delete/Cancel actions.
///
/// # Arguments
/// * `umkm_id` - Record passed to `on_delete`
/// * `umkm_name` - Shown in the confirmation text
/// * `on_delete` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteUmkmDialog(
    umkm_id: i64,
    #[prop(into)] umkm_name: String,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button
            class="btn btn-destructive"
            on:click=move |ev| {
                ev.stop_propagation();
                set_open.set(true);
            }
        >
            "Delete"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=move |_| set_open.set(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Delete UMKM"</h2>
                    <p class="dialog-description">
                        "Are you sure you want to delete "
                        <strong>{umkm_name.clone()}</strong>
                        "? This action cannot be undone."
                    </p>
                    <div class="dialog-footer">
                        <button class="btn btn-outline" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn-destructive"
                            on:click=move |_| {
                                set_open.set(false);
                                on_delete.run(umkm_id);
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
