use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{PassSubmitter, SubmissionResult, SubmitError};
use crate::interface_adapters::protocol::{ManualEntryResponse, PassCodeRequest};

pub const MANUAL_ENTRY_PATH: &str = "/worker/manual_entry";

// Thin wrapper around reqwest for pass server calls.
#[derive(Clone)]
pub struct PassClient {
    http: Client,
    pub base_url: String,
}

impl PassClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PassSubmitter for PassClient {
    async fn submit(&self, code: &str) -> Result<SubmissionResult, SubmitError> {
        // Compose the endpoint URL and POST the pass code.
        let url = format!("{}{MANUAL_ENTRY_PATH}", self.base_url);
        let res = self
            .http
            .post(url)
            .json(&PassCodeRequest { pass_code: code })
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        let status = res.status();

        // The body is rendered whatever the status code says.
        if !status.is_success() {
            tracing::warn!(%status, "pass server replied with non-success status");
        }

        res.json::<ManualEntryResponse>()
            .await
            .map(SubmissionResult::from)
            .map_err(|err| SubmitError::Decode(err.to_string()))
    }
}
