use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::{Clock, CodeField, DebounceGate, DecodedResult, PassSubmitter, ResultDisplay};

// Scan intake with injected dependencies. Camera scans pass through the debounce gate,
// manual entries go straight to submission.
pub struct ScanSubmitter<C> {
    clock: C,
    gate: DebounceGate,
    submitter: Arc<dyn PassSubmitter>,
    display: Arc<dyn ResultDisplay>,
    // Manual entry text field, read each time manual entry is triggered.
    code_field: Arc<dyn CodeField>,
}

impl<C> ScanSubmitter<C>
where
    C: Clock,
{
    pub fn new(
        clock: C,
        gate: DebounceGate,
        submitter: Arc<dyn PassSubmitter>,
        display: Arc<dyn ResultDisplay>,
        code_field: Arc<dyn CodeField>,
    ) -> Self {
        Self {
            clock,
            gate,
            submitter,
            display,
            code_field,
        }
    }

    pub fn gate(&self) -> &DebounceGate {
        &self.gate
    }

    /// Decode callback for the scanner. Returns the spawned submission, or `None` when the
    /// scan fell inside the debounce window and was dropped.
    pub fn on_scan_success(
        &self,
        decoded_text: &str,
        decoded_result: &DecodedResult,
    ) -> Option<JoinHandle<()>> {
        let now = self.clock.now_epoch_millis();
        if !self.gate.should_accept(now) {
            tracing::debug!(code = %decoded_text, now, "scan suppressed by debounce window");
            return None;
        }

        tracing::debug!(
            code = %decoded_text,
            format = ?decoded_result.format,
            now,
            "scan accepted"
        );
        Some(self.spawn_submission(decoded_text.to_string(), "scanner"))
    }

    /// Submits whatever the manual entry field currently holds. The debounce gate is not
    /// consulted.
    pub fn manual_entry(&self) -> JoinHandle<()> {
        self.spawn_submission(self.code_field.value(), "manual")
    }

    /// Starts the submission and returns immediately; rendering happens on the spawned task.
    pub fn process_scan(&self, code: String) -> JoinHandle<()> {
        self.spawn_submission(code, "direct")
    }

    pub async fn submit_and_render(&self, code: &str) {
        submit_and_render(self.submitter.as_ref(), self.display.as_ref(), code).await;
    }

    fn spawn_submission(&self, code: String, source: &'static str) -> JoinHandle<()> {
        let submitter = Arc::clone(&self.submitter);
        let display = Arc::clone(&self.display);
        let span = tracing::info_span!("submission", scan_id = %Uuid::new_v4(), source);
        tokio::spawn(
            async move { submit_and_render(submitter.as_ref(), display.as_ref(), &code).await }
                .instrument(span),
        )
    }
}

async fn submit_and_render(
    submitter: &dyn PassSubmitter,
    display: &dyn ResultDisplay,
    code: &str,
) {
    match submitter.submit(code).await {
        Ok(result) => {
            tracing::info!(
                code = %code,
                status = ?result.status,
                remaining_uses = ?result.remaining_uses,
                "pass submitted"
            );
            display.show(result.render());
        }
        Err(error) => {
            // The display keeps whatever it showed before.
            tracing::warn!(code = %code, %error, "pass submission failed");
        }
    }
}
