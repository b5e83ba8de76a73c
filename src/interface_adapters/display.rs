use std::io::Write;

use tokio::sync::watch;

use crate::domain::ResultDisplay;

// Terminal result surface: one line per rendered result.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutDisplay;

impl ResultDisplay for StdoutDisplay {
    fn show(&self, text: String) {
        let mut stdout = std::io::stdout().lock();
        if let Err(error) = writeln!(stdout, "{text}") {
            tracing::warn!(%error, "failed to write scan result");
        }
    }
}

/// Result surface that only keeps the latest text, like a label whose content gets
/// overwritten. Embedders subscribe to follow changes.
#[derive(Debug, Clone)]
pub struct LatestResult {
    tx: watch::Sender<String>,
}

impl LatestResult {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx }
    }

    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for LatestResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultDisplay for LatestResult {
    fn show(&self, text: String) {
        // send_replace works without live receivers.
        self.tx.send_replace(text);
    }
}
