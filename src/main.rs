//! Laritmo client - Entry Point
//!
//! Interactive shell for the Laritmo course platform API.

use log::{error, info};
use std::process;
use tokio::io::{BufReader, stdin, stdout};

use laritmo_client::client::build_session;
use laritmo_client::config::ClientConfig;
use laritmo_client::error::ClientError;
use laritmo_client::error::handlers::{error_to_exit_code, handle_error};
use laritmo_client::preferences::load_theme;
use laritmo_client::shell::{self, Shell};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        error!("Laritmo client exiting");
        process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), ClientError> {
    let config = ClientConfig::load()?;
    info!("Launching Laritmo client against {}", config.api.base_url);

    let session = build_session(&config)?;
    let theme = load_theme(session.store());
    info!(
        "Theme: {} ({})",
        theme,
        theme.effective(config.appearance.prefer_dark)
    );

    let mut shell = Shell::new(
        session,
        config.storage.downloads_path(),
        config.appearance.prefer_dark,
    );
    shell::run(&mut shell, BufReader::new(stdin()), stdout()).await?;
    Ok(())
}
