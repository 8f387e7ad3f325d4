//! UMKM Commands
//!
//! `reqwest`-backed implementation of [`UmkmApi`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};

use super::{ApiError, ApiResult, UmkmApi};
use crate::config::ApiConfig;
use crate::models::{NewUmkm, Umkm};

const JSON: &str = "application/json";

#[derive(Clone)]
pub struct HttpUmkmApi {
    client: Client,
    config: ApiConfig,
}

impl HttpUmkmApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }

    fn collection_url(&self) -> String {
        self.config.url("/api/umkms")
    }

    fn record_url(&self, id: i64) -> String {
        self.config.url(&format!("/api/umkms/{}", id))
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request.header(ACCEPT, JSON).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[async_trait(?Send)]
impl UmkmApi for HttpUmkmApi {
    async fn list_umkms(&self) -> ApiResult<Vec<Umkm>> {
        let response = Self::send(self.client.get(self.collection_url())).await?;
        Ok(response.json().await?)
    }

    async fn get_umkm(&self, id: i64) -> ApiResult<Umkm> {
        let response = Self::send(self.client.get(self.record_url(id))).await?;
        Ok(response.json().await?)
    }

    async fn create_umkm(&self, draft: &NewUmkm, token: &str) -> ApiResult<()> {
        let request = self
            .client
            .post(self.collection_url())
            .header(AUTHORIZATION, bearer(token))
            .json(draft);
        Self::send(request).await?;
        Ok(())
    }

    async fn delete_umkm(&self, id: i64, token: &str) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.record_url(id))
            .header(CONTENT_TYPE, JSON)
            .header(AUTHORIZATION, bearer(token));
        Self::send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = HttpUmkmApi::new(ApiConfig::new(Some("http://10.0.0.5:8000/")));
        assert_eq!(api.collection_url(), "http://10.0.0.5:8000/api/umkms");
        assert_eq!(api.record_url(42), "http://10.0.0.5:8000/api/umkms/42");
    }

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
