use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    Clock, CodeField, PassSubmitter, ResultDisplay, SubmissionResult, SubmitError,
};

// Shared time source that tests move forward by hand.
#[derive(Clone)]
pub(crate) struct SteppingClock(Arc<AtomicU64>);

impl SteppingClock {
    pub(crate) fn new(start_ms: u64) -> Self {
        Self(Arc::new(AtomicU64::new(start_ms)))
    }

    pub(crate) fn advance(&self, millis: u64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for SteppingClock {
    fn now_epoch_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

// Submitter that records every code and replies with a canned result.
#[derive(Clone)]
pub(crate) struct RecordingSubmitter {
    codes: Arc<Mutex<Vec<String>>>,
    reply: SubmissionResult,
    fail_next: Arc<AtomicBool>,
}

impl RecordingSubmitter {
    pub(crate) fn replying(message: &str, remaining_uses: Option<u64>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(Vec::new())),
            reply: SubmissionResult {
                message: message.to_string(),
                remaining_uses: remaining_uses.map(Value::from),
                status: None,
            },
            fail_next: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub(crate) fn codes(&self) -> Vec<String> {
        self.codes.lock().expect("codes mutex poisoned").clone()
    }
}

#[async_trait]
impl PassSubmitter for RecordingSubmitter {
    async fn submit(&self, code: &str) -> Result<SubmissionResult, SubmitError> {
        self.codes
            .lock()
            .expect("codes mutex poisoned")
            .push(code.to_string());

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(SubmitError::Transport("connection refused".to_string()));
        }
        Ok(self.reply.clone())
    }
}

// Display that keeps every text it was asked to show.
#[derive(Clone, Default)]
pub(crate) struct RecordingDisplay(Arc<Mutex<Vec<String>>>);

impl RecordingDisplay {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn shown(&self) -> Vec<String> {
        self.0.lock().expect("display mutex poisoned").clone()
    }
}

impl ResultDisplay for RecordingDisplay {
    fn show(&self, text: String) {
        self.0.lock().expect("display mutex poisoned").push(text);
    }
}

// Text field whose content tests edit between manual entries.
#[derive(Clone, Default)]
pub(crate) struct EditableField(Arc<Mutex<String>>);

impl EditableField {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&self, value: &str) {
        *self.0.lock().expect("field mutex poisoned") = value.to_string();
    }
}

impl CodeField for EditableField {
    fn value(&self) -> String {
        self.0.lock().expect("field mutex poisoned").clone()
    }
}
