//! The network seam of the controller.

use std::future::Future;

use logieman_client::{ClientError, LoadClient};
use logieman_core::SubmissionPayload;

/// Sends a built payload to wherever temp loads are stored.
///
/// Implementations must be `Send + Sync` so a controller can be shared
/// across tasks.
pub trait LoadSubmitter: Send + Sync {
    /// Submit once. Any error is terminal for the attempt.
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<serde_json::Value, ClientError>> + Send;
}

impl LoadSubmitter for LoadClient {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, ClientError> {
        self.temp_loads().create(payload).await
    }
}
