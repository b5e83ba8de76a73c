use std::fmt;

// Failures of a single pass submission. None of them reach the display surface.
#[derive(Debug)]
pub enum SubmitError {
    // The request never produced a response (connection refused, reset, DNS...).
    Transport(String),
    // A response arrived but its body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(err) => write!(f, "pass server transport error: {err}"),
            SubmitError::Decode(err) => write!(f, "pass server response decode error: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {}
