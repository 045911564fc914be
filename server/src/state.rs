//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used for `/api` forwarding and the backend
//! base URL requests are forwarded to.

use std::sync::Arc;

use crate::config::{ConfigError, HostConfig};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the client and URL are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(http: reqwest::Client, backend_url: &str) -> Self {
        Self { http, backend_url: Arc::from(backend_url.trim_end_matches('/')) }
    }

    /// Build state from host configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the forwarding HTTP client cannot be built.
    pub fn from_config(config: &HostConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.http_client()?, &config.backend_url))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` forwarding to `backend_url`.
    #[must_use]
    pub fn test_app_state(backend_url: &str) -> AppState {
        AppState::new(reqwest::Client::new(), backend_url)
    }
}
