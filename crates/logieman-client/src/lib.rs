//! # logieman-client -- Typed client for the Logieman temp-loads API
//!
//! A "post a load" submission from the marketing site is stored as a
//! *temp load* keyed by the device fingerprint until the shipper signs in to
//! the dashboard. This crate is the only place that talks HTTP to that API.
//!
//! - [`temp_loads`] -- `POST /api/temp-loads/create`.
//!
//! ## Failure Policy
//!
//! One request per call. There is no retry: transport errors, timeouts and
//! non-2xx responses are returned to the caller as [`ClientError`] and the
//! attempt is over.

pub mod config;
pub mod error;
pub mod temp_loads;

pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;

use std::time::Duration;

use url::Url;

/// Top-level client. Holds one sub-client per API resource.
#[derive(Debug, Clone)]
pub struct LoadClient {
    temp_loads: temp_loads::TempLoadClient,
    dashboard_redirect_base: Option<Url>,
}

impl LoadClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            temp_loads: temp_loads::TempLoadClient::new(http, config.base_url),
            dashboard_redirect_base: config.dashboard_redirect_base,
        })
    }

    /// Access the temp-loads client.
    pub fn temp_loads(&self) -> &temp_loads::TempLoadClient {
        &self.temp_loads
    }

    /// Where to send the shipper after a successful submission, if anywhere.
    pub fn dashboard_redirect_base(&self) -> Option<&Url> {
        self.dashboard_redirect_base.as_ref()
    }
}
