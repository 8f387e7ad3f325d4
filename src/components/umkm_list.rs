//! UMKM List Component
//!
//! "All UMKMs" page: searchable table with view and delete actions.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::auth::LocalStorageAuth;
use crate::components::{CreateUmkmDialog, DeleteUmkmDialog, StatusBadge};
use crate::context::use_app_context;
use crate::controller::UmkmListController;
use crate::navigation::RouterNavigator;
use crate::store::{ListStore, UmkmListState, UmkmListStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn UmkmList() -> impl IntoView {
    let ctx = use_app_context();
    let store: ListStore = Store::new(UmkmListState::default());
    let controller = StoredValue::new_local(UmkmListController::new(
        Rc::new(ctx.api()),
        Rc::new(LocalStorageAuth),
        Rc::new(store),
        Rc::new(use_toasts()),
        Rc::new(RouterNavigator::new()),
    ));

    // Load on mount
    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            // Failures are logged by fetch_umkms
            let _ = ctrl.fetch_umkms().await;
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            // Outcome already surfaced as a toast
            let _ = ctrl.handle_delete_umkm(id).await;
        });
    });

    let view_details = move |id: i64| controller.with_value(|ctrl| ctrl.handle_view_details(id));

    view! {
        <div class="container">
            <div class="card">
                <div class="card-header">
                    <h1 class="card-title">"All UMKMs"</h1>
                    <div class="card-actions">
                        // Search term is kept but does not filter yet
                        <input
                            type="text"
                            class="input search-input"
                            placeholder="Search UMKMs..."
                            prop:value=move || store.search_term().get()
                            on:input=move |ev| store.search_term().set(event_target_value(&ev))
                        />
                        <button class="btn btn-outline btn-icon" aria-label="Search">
                            <svg class="icon" viewBox="0 0 24 24" width="16" height="16" fill="none" stroke="currentColor" stroke-width="2">
                                <circle cx="11" cy="11" r="8"/>
                                <line x1="21" y1="21" x2="16.65" y2="16.65"/>
                            </svg>
                        </button>
                        <CreateUmkmDialog controller=controller />
                    </div>
                </div>
                <div class="card-content">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Status"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || store.records().get().into_iter().map(|umkm| {
                                let id = umkm.id;
                                view! {
                                    <tr>
                                        <td>{umkm.name.clone()}</td>
                                        <td>{umkm.kind.clone()}</td>
                                        <td><StatusBadge status=umkm.status.clone() /></td>
                                        <td class="text-right row-actions">
                                            <button class="btn btn-outline" on:click=move |_| view_details(id)>
                                                "View"
                                            </button>
                                            <DeleteUmkmDialog
                                                umkm_id=id
                                                umkm_name=umkm.name
                                                on_delete=on_delete
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
