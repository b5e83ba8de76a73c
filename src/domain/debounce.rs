use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

// Minimum spacing between two accepted camera scans.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(2000);

/// Fixed-window guard that suppresses rapid-fire duplicate scans.
///
/// The gate only remembers when it last let a scan through. It starts at zero, so the
/// first scan after start-up is always accepted for any realistic wall-clock time.
#[derive(Debug)]
pub struct DebounceGate {
    window_ms: u64,
    last_accepted: AtomicU64,
}

impl DebounceGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window_ms: window.as_millis() as u64,
            last_accepted: AtomicU64::new(0),
        }
    }

    /// Accepts the scan iff at least one window has elapsed since the last accepted scan,
    /// recording `now_ms` as the new reference point when it does.
    ///
    /// Check and update happen in a single compare-and-swap, so two concurrent callers
    /// holding the same `now_ms` can never both be accepted.
    pub fn should_accept(&self, now_ms: u64) -> bool {
        let window_ms = self.window_ms;
        self.last_accepted
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                // A clock that stepped backwards gives a negative gap, which is never enough.
                let elapsed = now_ms.checked_sub(last)?;
                (elapsed >= window_ms).then_some(now_ms)
            })
            .is_ok()
    }

    pub fn last_accepted(&self) -> u64 {
        self.last_accepted.load(Ordering::Acquire)
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}
