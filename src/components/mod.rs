//! UI Components
//!
//! Leptos components for the UMKM admin pages.

mod status_badge;
mod delete_umkm_dialog;
mod create_umkm_dialog;
mod umkm_list;
mod umkm_detail;
mod toaster;

pub use status_badge::StatusBadge;
pub use delete_umkm_dialog::DeleteUmkmDialog;
pub use create_umkm_dialog::CreateUmkmDialog;
pub use umkm_list::UmkmList;
pub use umkm_detail::UmkmDetail;
pub use toaster::Toaster;
