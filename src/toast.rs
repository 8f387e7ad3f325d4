//! Toast Notifications
//!
//! Toast queue shared via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: &str, description: &str, variant: ToastVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized", "You need to log in first!", ToastVariant::Destructive)
    }

    pub fn umkm_deleted() -> Self {
        Self::new("UMKM Deleted", "UMKM has been removed.", ToastVariant::Destructive)
    }

    pub fn delete_failed() -> Self {
        Self::new("Error", "Failed to delete UMKM. Please try again.", ToastVariant::Destructive)
    }

    pub fn umkm_created() -> Self {
        Self::new("UMKM Created", "UMKM has been added.", ToastVariant::Default)
    }

    pub fn create_failed() -> Self {
        Self::new("Error", "Failed to create UMKM. Please try again.", ToastVariant::Destructive)
    }
}

/// Anything that can surface a toast to the operator
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Toast with its queue id
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

/// App-wide toast queue
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Visible toasts, oldest first
    pub toasts: ReadSignal<Vec<QueuedToast>>,
    set_toasts: WriteSignal<Vec<QueuedToast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::<QueuedToast>::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.set_toasts.update(|toasts| toasts.push(QueuedToast { id, toast }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            ctx.dismiss(id);
        });
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
