//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for backend calls and the backend root they
//! are made against. Clone is required by Axum; both fields are cheap to clone.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend root without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state with a client honoring the configured proxy timeouts.
    ///
    /// Redirects are not followed so the browser sees them as the backend
    /// sent them.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(http, &config.backend_url))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, backend_url: &str) -> Self {
        Self { http, backend_url: Arc::from(backend_url.trim_end_matches('/')) }
    }
}
