//! Call Session Controller - Entry Point
//!
//! Places and ends a voice call from the console. `call` fetches a credential
//! and connects, `hangup` disconnects.

use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;

use call_session_controller::console::run_console;
use call_session_controller::device::LoopbackFactory;
use call_session_controller::utils::logging::setup_logging;
use call_session_controller::{AppConfig, CallSessionController};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Using token endpoint {} (restart policy: {:?})",
        config.token_url, config.restart_policy
    );

    let factory = Arc::new(LoopbackFactory::rejecting_empty_credentials());
    let controller = match CallSessionController::from_config(&config, factory) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to build controller: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Ready. Commands: call, hangup, reset, status, quit");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let result = run_console(&controller, stdin, stdout).await;

    // Hang up whatever is still connected, whichever way the console ended
    controller.reset().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Console I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
