//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpUmkmApi;
use crate::config::ApiConfig;

/// App-wide settings provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    config: ApiConfig,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// HTTP client for the configured API
    pub fn api(&self) -> HttpUmkmApi {
        HttpUmkmApi::new(self.config.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
