//! Create UMKM Dialog Component
//!
//! Header-level "Add UMKM" button with a modal form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{MutationOutcome, UmkmListController};
use crate::models::{NewUmkm, STATUS_OPTIONS};

/// Modal form for creating a UMKM
///
/// The list is reconciled by the controller once the server accepts it.
#[component]
pub fn CreateUmkmDialog(controller: StoredValue<UmkmListController, LocalStorage>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (status, set_status) = signal(NewUmkm::default().status);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_kind.set(String::new());
        set_location.set(String::new());
        set_status.set(NewUmkm::default().status);
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() { return; }

        let draft = NewUmkm {
            name: name.get(),
            kind: kind.get(),
            location: location.get(),
            status: status.get(),
        };
        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        set_submitting.set(true);
        let ctrl = controller.get_value();
        spawn_local(async move {
            let outcome = ctrl.handle_create_umkm(&draft).await;
            set_submitting.set(false);
            if outcome == MutationOutcome::Completed {
                reset();
                set_open.set(false);
            }
        });
    };

    view! {
        <button class="btn btn-primary" on:click=move |_| set_open.set(true)>
            "Add UMKM"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <form class="dialog" on:submit=on_submit>
                    <h2 class="dialog-title">"Add UMKM"</h2>
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Type"</span>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || kind.get()
                            on:input=move |ev| set_kind.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Location"</span>
                        <input
                            type="text"
                            class="input"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Status"</span>
                        <select
                            class="input"
                            prop:value=move || status.get()
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                        >
                            {STATUS_OPTIONS.iter().map(|option| view! {
                                <option value=*option>{*option}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <div class="dialog-footer">
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| {
                                reset();
                                set_open.set(false);
                            }
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
