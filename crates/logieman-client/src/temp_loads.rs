//! Typed client for the temp-loads API.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/temp-loads/create` | Store a load posted before sign-in |

use logieman_core::SubmissionPayload;

use crate::error::ClientError;

/// Path of the create endpoint, relative to the API base.
const CREATE_PATH: &str = "api/temp-loads/create";

/// Client for the temp-loads API.
#[derive(Debug, Clone)]
pub struct TempLoadClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl TempLoadClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Store a temp load.
    ///
    /// Calls `POST {base_url}/api/temp-loads/create` and returns the decoded
    /// response body. An empty 2xx body decodes as `null`.
    pub async fn create(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, ClientError> {
        let endpoint = "POST /api/temp-loads/create";
        let url = format!(
            "{}/{CREATE_PATH}",
            self.base_url.as_str().trim_end_matches('/')
        );

        tracing::debug!(
            device_hash = %payload.device_hash,
            load_type = %payload.load_data.load_type,
            "submitting temp load"
        );

        let resp = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let body = resp.text().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}
