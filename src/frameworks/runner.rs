// Framework bootstrap for the scan submitter process.

use crate::domain::{Clock, DebounceGate};
use crate::frameworks::config;
use crate::interface_adapters::clients::PassClient;
use crate::interface_adapters::display::StdoutDisplay;
use crate::interface_adapters::scanner::{FixedCodeField, LineScanner, ScannerConfig};
use crate::use_cases::ScanSubmitter;

use std::io::Result;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncBufRead, BufReader};
use tokio::task::{JoinError, JoinHandle, JoinSet};

// Wall-clock time source used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout is the result display.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// What a tracked submission handle resolves to.
type SubmissionOutcome = std::result::Result<(), JoinError>;

// Submissions spawned from scanner input that have not been collected yet.
#[derive(Default)]
pub struct InFlight {
    tasks: JoinSet<SubmissionOutcome>,
    submitted: usize,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    // Collects finished submissions first so the set only holds running ones.
    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.reap();
        self.tasks.spawn(handle);
        self.submitted += 1;
    }

    pub fn reap(&mut self) {
        while let Some(outcome) = self.tasks.try_join_next() {
            log_outcome(outcome);
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every tracked submission and returns how many were made in total.
    pub async fn drain(mut self) -> usize {
        while let Some(outcome) = self.tasks.join_next().await {
            log_outcome(outcome);
        }
        self.submitted
    }
}

fn log_outcome(outcome: std::result::Result<SubmissionOutcome, JoinError>) {
    if let Err(e) = outcome.and_then(|inner| inner) {
        tracing::error!(error = %e, "submission task failed");
    }
}

/// Feeds every line of `source` through the decode callback and waits for the accepted
/// submissions to finish rendering. Returns the number of submissions made.
pub async fn run<C, R>(
    submitter: &ScanSubmitter<C>,
    source: R,
    scanner_config: ScannerConfig,
) -> Result<usize>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
{
    let mut in_flight = InFlight::new();
    LineScanner::new(source)
        .render(scanner_config, |decoded_text, decoded_result| {
            match submitter.on_scan_success(decoded_text, decoded_result) {
                Some(handle) => in_flight.track(handle),
                None => in_flight.reap(),
            }
        })
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "scanner source failed");
        })?;

    Ok(in_flight.drain().await)
}

/// Process entry point. With a code argument the code is submitted as a manual entry,
/// otherwise decoded codes are read from stdin.
pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let base_url = config::pass_server_url();
    let window = config::debounce_window();
    tracing::debug!(
        pass_server_url = %base_url,
        debounce_window_ms = window.as_millis(),
        "pass client configured"
    );

    // The command-line argument plays the manual entry field.
    let manual_code = std::env::args().nth(1);
    let submitter = ScanSubmitter::new(
        SystemClock,
        DebounceGate::new(window),
        Arc::new(PassClient::new(base_url)),
        Arc::new(StdoutDisplay),
        Arc::new(FixedCodeField::new(manual_code.clone().unwrap_or_default())),
    );

    if manual_code.is_some() {
        return submitter.manual_entry().await.map_err(|e| {
            tracing::error!(error = %e, "manual entry task failed");
            std::io::Error::other(e)
        });
    }

    let submitted = run(
        &submitter,
        BufReader::new(tokio::io::stdin()),
        config::scanner_config(),
    )
    .await?;
    tracing::info!(submitted, "scanner input finished");
    Ok(())
}
