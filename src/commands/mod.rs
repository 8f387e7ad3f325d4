//! UMKM API Commands
//!
//! Frontend bindings to the remote REST API.

mod error;
mod umkm;

use async_trait::async_trait;

use crate::models::{NewUmkm, Umkm};

pub use error::{ApiError, ApiResult};
pub use umkm::HttpUmkmApi;

/// Remote UMKM collection
///
/// Futures are `?Send`: everything runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait UmkmApi {
    /// `GET /api/umkms`
    async fn list_umkms(&self) -> ApiResult<Vec<Umkm>>;

    /// `GET /api/umkms/{id}`
    async fn get_umkm(&self, id: i64) -> ApiResult<Umkm>;

    /// `POST /api/umkms` with a bearer token
    async fn create_umkm(&self, draft: &NewUmkm, token: &str) -> ApiResult<()>;

    /// `DELETE /api/umkms/{id}` with a bearer token
    async fn delete_umkm(&self, id: i64, token: &str) -> ApiResult<()>;
}
