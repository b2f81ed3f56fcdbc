//! Roster Gate - Entry Point
//!
//! Single-operator login in front of the class roster editor.

use log::info;
use tokio::io::BufReader;

use roster_gate::error::handlers::{exit_code, handle_error};
use roster_gate::session::ConsoleSession;
use roster_gate::utils::logging::setup_logging;
use roster_gate::{CredentialStore, CredentialVerifier, GateConfig, GateError};

#[tokio::main]
async fn main() {
    let config = GateConfig::load();

    // Logging comes up before config errors are reported
    let level = config
        .as_ref()
        .map(|c| c.log_level.as_str())
        .unwrap_or("info");
    setup_logging(level);

    let config = match config {
        Ok(config) => config,
        Err(e) => fail(GateError::from(e)),
    };

    info!(
        "Launching roster gate with credentials file {}",
        config.credentials_path
    );

    let store = CredentialStore::from_config(&config);
    let verifier = CredentialVerifier::from_config(&config);
    let mut session = ConsoleSession::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        store,
        verifier,
    );

    match session.run().await {
        Ok(outcome) => info!("Session finished: {}", outcome.result),
        Err(e) => fail(e),
    }
}

fn fail(err: GateError) -> ! {
    handle_error(&err);
    std::process::exit(exit_code(&err));
}
