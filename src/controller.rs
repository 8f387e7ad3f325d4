//! UMKM List Controller
//!
//! Fetch, create, delete and navigation flows of the list page, written
//! against service traits so they run without a browser.

use std::rc::Rc;

use crate::auth::AuthService;
use crate::commands::{ApiError, UmkmApi};
use crate::models::NewUmkm;
use crate::navigation::{detail_path, Navigator};
use crate::store::UmkmCache;
use crate::toast::{Notifier, Toast};

/// Result of a create or delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// No token; nothing was sent
    Unauthorized,
    /// Server accepted the change; toast shown, then the mirror reconciled
    Completed,
    Failed(ApiError),
}

#[derive(Clone)]
pub struct UmkmListController {
    api: Rc<dyn UmkmApi>,
    auth: Rc<dyn AuthService>,
    cache: Rc<dyn UmkmCache>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl UmkmListController {
    pub fn new(
        api: Rc<dyn UmkmApi>,
        auth: Rc<dyn AuthService>,
        cache: Rc<dyn UmkmCache>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { api, auth, cache, notifier, navigator }
    }

    /// Replace the mirror with the server's collection
    ///
    /// Failures are logged only; the mirror keeps whatever it held.
    pub async fn fetch_umkms(&self) -> Result<usize, ApiError> {
        match self.api.list_umkms().await {
            Ok(records) => {
                let count = records.len();
                log::info!("[UMKM] Loaded {} records", count);
                self.cache.replace(records);
                Ok(count)
            }
            Err(err) => {
                log::error!("Error fetching UMKMs: {}", err);
                Err(err)
            }
        }
    }

    pub async fn handle_delete_umkm(&self, id: i64) -> MutationOutcome {
        let Some(token) = self.auth.token() else {
            self.notifier.notify(Toast::unauthorized());
            return MutationOutcome::Unauthorized;
        };

        if let Err(err) = self.api.delete_umkm(id, &token).await {
            log::error!("Error deleting UMKM {}: Failed to delete UMKM. {}", id, err);
            self.notifier.notify(Toast::delete_failed());
            return MutationOutcome::Failed(err);
        }

        // Shown before the reconcile, which has no timeout
        self.notifier.notify(Toast::umkm_deleted());
        // Reconcile from the server; nothing is removed locally first.
        // fetch_umkms logs its own failures.
        let _ = self.fetch_umkms().await;
        MutationOutcome::Completed
    }

    /// Completion path of the create dialog. `draft` is already validated.
    pub async fn handle_create_umkm(&self, draft: &NewUmkm) -> MutationOutcome {
        let Some(token) = self.auth.token() else {
            self.notifier.notify(Toast::unauthorized());
            return MutationOutcome::Unauthorized;
        };

        if let Err(err) = self.api.create_umkm(draft, &token).await {
            log::error!("Error creating UMKM: {}", err);
            self.notifier.notify(Toast::create_failed());
            return MutationOutcome::Failed(err);
        }

        self.notifier.notify(Toast::umkm_created());
        // fetch_umkms logs its own failures
        let _ = self.fetch_umkms().await;
        MutationOutcome::Completed
    }

    pub fn handle_view_details(&self, id: i64) {
        self.navigator.navigate(&detail_path(id));
    }
}
