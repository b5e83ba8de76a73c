use std::{env, time::Duration};

use crate::domain::DEFAULT_DEBOUNCE_WINDOW;
use crate::interface_adapters::scanner::ScannerConfig;

// Runtime configuration, read from the environment (and `.env` when present).

pub fn pass_server_url() -> String {
    env::var("PASS_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
}

pub fn debounce_window() -> Duration {
    env::var("SCAN_DEBOUNCE_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DEBOUNCE_WINDOW)
}

pub fn scanner_config() -> ScannerConfig {
    let defaults = ScannerConfig::default();
    ScannerConfig {
        fps: parse_var("SCANNER_FPS").unwrap_or(defaults.fps),
        qrbox: parse_var("SCANNER_QRBOX").unwrap_or(defaults.qrbox),
    }
}

fn parse_var(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
