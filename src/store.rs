//! UMKM List State Store
//!
//! Local mirror of the remote collection. Uses Leptos reactive_stores for
//! fine-grained reactivity in the view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Umkm;

/// Mirror of the remote UMKM collection
pub trait UmkmCache {
    /// Records in server response order
    fn list(&self) -> Vec<Umkm>;

    /// Replace the whole mirror, keeping order verbatim
    fn replace(&self, records: Vec<Umkm>);

    /// Drop everything
    fn invalidate(&self);

    /// Replace the record with the same id in place, or append it
    fn upsert(&self, record: Umkm);

    /// Remove every record with this id
    fn remove(&self, id: i64);
}

fn upsert_into(records: &mut Vec<Umkm>, record: Umkm) {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

/// State of the list page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UmkmListState {
    /// Mirror of `/api/umkms`
    pub records: Vec<Umkm>,
    /// Search box contents
    pub search_term: String,
}

/// Type alias for the store
pub type ListStore = Store<UmkmListState>;

/// Apply `op` to the mirror unless the owning page is gone
///
/// Requests outlive the list page; once its store is disposed the
/// write is dropped.
fn write_records(store: &ListStore, op: &str, f: impl FnOnce(&mut Vec<Umkm>)) {
    match store.records().try_write() {
        Some(mut records) => f(&mut *records),
        None => log::warn!("[STORE] {} after list page unmounted, ignored", op),
    }
}

impl UmkmCache for ListStore {
    fn list(&self) -> Vec<Umkm> {
        self.records().try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, records: Vec<Umkm>) {
        write_records(self, "replace", |current| *current = records);
    }

    fn invalidate(&self) {
        write_records(self, "invalidate", |current| current.clear());
    }

    fn upsert(&self, record: Umkm) {
        write_records(self, "upsert", |current| upsert_into(current, record));
    }

    fn remove(&self, id: i64) {
        write_records(self, "remove", |current| current.retain(|r| r.id != id));
    }
}

/// Non-reactive mirror
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: std::cell::RefCell<Vec<Umkm>>,
}

#[cfg(test)]
impl UmkmCache for MemoryCache {
    fn list(&self) -> Vec<Umkm> {
        self.records.borrow().clone()
    }

    fn replace(&self, records: Vec<Umkm>) {
        *self.records.borrow_mut() = records;
    }

    fn invalidate(&self) {
        self.records.borrow_mut().clear();
    }

    fn upsert(&self, record: Umkm) {
        upsert_into(&mut self.records.borrow_mut(), record);
    }

    fn remove(&self, id: i64) {
        self.records.borrow_mut().retain(|r| r.id != id);
    }
}
