//! # countryline Main Entry Point
//!
//! Keyboard-driven terminal client for the country service.

use anyhow::{Context, Result};
use countryline::cmd_args::CommandLineArgs;
use countryline::config;
use countryline::io::{TerminalEventStream, TerminalRenderStream};
use countryline::AppController;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if std::env::var_os(config::LOG_LEVEL_ENV_VAR).is_some() {
        init_tracing_subscriber()?;
    }

    let mut app = AppController::with_io_streams(
        cmd_args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    app.run().await?;

    println!("Goodbye from countryline!");
    Ok(())
}

/// Log to a file; stdout belongs to the terminal UI
fn init_tracing_subscriber() -> Result<()> {
    let log_path = config::get_log_file_path();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let filter = EnvFilter::from_env(config::LOG_LEVEL_ENV_VAR)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("tokio=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {}", log_path.display());
    Ok(())
}
