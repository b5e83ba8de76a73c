use serde_json::Value;

// Decoder metadata handed to the success callback alongside the decoded text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedResult {
    // Symbology reported by the decoder (e.g. "QR_CODE"), when it reports one.
    pub format: Option<String>,
}

// Outcome of a pass submission as reported by the pass server.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub message: String,
    // Raw JSON value so it renders exactly as the server sent it. `Some(Value::Null)` means
    // the server sent an explicit null, `None` means the field was missing.
    pub remaining_uses: Option<Value>,
    // "success" / "error" tag; logged, never rendered.
    pub status: Option<String>,
}

impl SubmissionResult {
    /// Text written to the result display: the message, plus the remaining uses when the
    /// server reported them.
    pub fn render(&self) -> String {
        let remaining = match &self.remaining_uses {
            Some(Value::String(text)) => text.clone(),
            Some(value) => value.to_string(),
            None => return self.message.clone(),
        };
        format!("{}, Remaining: {remaining}", self.message)
    }
}
