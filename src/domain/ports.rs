use async_trait::async_trait;

use crate::domain::entities::SubmissionResult;
use crate::domain::errors::SubmitError;

// Port for retrieving the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> u64;
}

// The use case depends on this trait, not the concrete HTTP client.
#[async_trait]
pub trait PassSubmitter: Send + Sync {
    async fn submit(&self, code: &str) -> Result<SubmissionResult, SubmitError>;
}

// Surface whose text content is overwritten with each rendered result.
pub trait ResultDisplay: Send + Sync {
    fn show(&self, text: String);
}

// Manual entry text field; read on demand.
pub trait CodeField: Send + Sync {
    fn value(&self) -> String;
}
