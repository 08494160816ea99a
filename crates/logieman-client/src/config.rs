//! Temp-loads client configuration.
//!
//! Holds the API base URL, the request timeout and the optional dashboard
//! base used for the post-submission redirect. Load from the environment or
//! construct explicitly for tests.

use url::Url;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Configuration for the temp-loads API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API; requests go to `{base_url}/api/temp-loads/...`.
    pub base_url: Url,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Dashboard base for the sign-in redirect. `None` disables the redirect.
    pub dashboard_redirect_base: Option<Url>,
}

impl ClientConfig {
    /// A configuration with the default timeout and no redirect.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            dashboard_redirect_base: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LOGIEMAN_API_BASE_URL` (required)
    /// - `LOGIEMAN_DASHBOARD_URL` (optional; unset or empty disables the redirect)
    /// - `LOGIEMAN_TIMEOUT_MS` (default: 15000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("LOGIEMAN_API_BASE_URL").filter(|v| !v.is_empty()) {
            Some(raw) => parse_url("LOGIEMAN_API_BASE_URL", &raw)?,
            None => return Err(ConfigError::MissingBaseUrl),
        };

        let dashboard_redirect_base = lookup("LOGIEMAN_DASHBOARD_URL")
            .filter(|v| !v.is_empty())
            .map(|raw| parse_url("LOGIEMAN_DASHBOARD_URL", &raw))
            .transpose()?;

        let timeout_ms = match lookup("LOGIEMAN_TIMEOUT_MS") {
            Some(raw) => raw
                .parse()
                .ok()
                .filter(|ms: &u64| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            timeout_ms,
            dashboard_redirect_base,
        })
    }

    /// Point at a local mock server (for testing).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let base_url = parse_url("localhost", &format!("http://127.0.0.1:{port}"))?;
        Ok(Self {
            base_url,
            timeout_ms: 5_000,
            dashboard_redirect_base: None,
        })
    }

    /// Set the dashboard redirect base.
    pub fn with_dashboard(mut self, base: Url) -> Self {
        self.dashboard_redirect_base = Some(base);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

fn parse_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOGIEMAN_API_BASE_URL environment variable is required")]
    MissingBaseUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout {0:?}: expected a positive number of milliseconds")]
    InvalidTimeout(String),
}
