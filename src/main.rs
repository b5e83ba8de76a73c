use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the runner framework entry point.
    match scan_submitter::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
