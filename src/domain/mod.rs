// Domain layer: scan debouncing rules, submission results and ports.

pub mod debounce;
pub mod entities;
pub mod errors;
pub mod ports;

pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, DebounceGate};
pub use entities::{DecodedResult, SubmissionResult};
pub use errors::SubmitError;
pub use ports::{Clock, CodeField, PassSubmitter, ResultDisplay};
