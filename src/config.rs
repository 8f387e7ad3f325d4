//! API Configuration
//!
//! Base URL of the remote UMKM API, baked in at build time.

/// Fallback when `UMKM_API_BASE_URL` is unset or blank
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from `UMKM_API_BASE_URL` captured at compile time
    pub fn from_env() -> Self {
        Self::new(option_env!("UMKM_API_BASE_URL"))
    }

    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
        assert_eq!(ApiConfig::new(Some("   ")).base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_custom_base_url_is_trimmed() {
        let config = ApiConfig::new(Some(" https://api.example.id/ "));
        assert_eq!(config.base_url(), "https://api.example.id");
        assert_eq!(config.url("/api/umkms"), "https://api.example.id/api/umkms");
        assert_eq!(config.url("api/umkms/7"), "https://api.example.id/api/umkms/7");
    }
}
