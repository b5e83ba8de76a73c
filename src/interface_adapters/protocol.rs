use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::SubmissionResult;

// Request body for the pass server's manual entry endpoint.
#[derive(Debug, Serialize)]
pub struct PassCodeRequest<'a> {
    pub pass_code: &'a str,
}

// Reply from the manual entry endpoint. Only `message` is mandatory.
#[derive(Debug, Deserialize)]
pub struct ManualEntryResponse {
    pub message: String,
    // Missing stays `None`; an explicit null is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub remaining_uses: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<ManualEntryResponse> for SubmissionResult {
    fn from(response: ManualEntryResponse) -> Self {
        SubmissionResult {
            message: response.message,
            remaining_uses: response.remaining_uses,
            status: response.status,
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
