use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{self, MissedTickBehavior};

use crate::domain::{CodeField, DecodedResult};

const MIN_FRAME_PERIOD: Duration = Duration::from_nanos(1);

// Scanner start-up options: frames per second and scan box edge in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    pub fps: u32,
    pub qrbox: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { fps: 10, qrbox: 250 }
    }
}

/// Code source fed by an external decoder that writes one decoded code per line
/// (for example a camera decoder piped into stdin).
///
/// Frames are delivered no faster than `fps` per second; `fps == 0` disables pacing.
/// The scan box is left to the decoder producing the lines.
pub struct LineScanner<R> {
    reader: R,
}

impl<R> LineScanner<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Runs until the source hits EOF, invoking `on_success` for each decoded code.
    /// Returns the number of frames delivered.
    pub async fn render<F>(self, config: ScannerConfig, mut on_success: F) -> std::io::Result<u64>
    where
        F: FnMut(&str, &DecodedResult),
    {
        tracing::debug!(fps = config.fps, qrbox = config.qrbox, "scanner started");

        let mut pacing = (config.fps > 0).then(|| {
            let mut interval = time::interval(frame_period(config.fps));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        let mut lines = self.reader.lines();
        let mut delivered = 0;
        while let Some(line) = lines.next_line().await? {
            let decoded_text = line.trim_end_matches('\r');
            if decoded_text.is_empty() {
                continue;
            }
            if let Some(interval) = pacing.as_mut() {
                interval.tick().await;
            }
            on_success(decoded_text, &DecodedResult::default());
            delivered += 1;
        }

        tracing::debug!(delivered, "scanner source closed");
        Ok(delivered)
    }
}

// Time between two delivered frames. Never zero, whatever the frame rate.
fn frame_period(fps: u32) -> Duration {
    (Duration::from_secs(1) / fps).max(MIN_FRAME_PERIOD)
}

// Manual entry field whose content was captured up front (e.g. a command-line argument).
#[derive(Debug, Clone)]
pub struct FixedCodeField(String);

impl FixedCodeField {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl CodeField for FixedCodeField {
    fn value(&self) -> String {
        self.0.clone()
    }
}
