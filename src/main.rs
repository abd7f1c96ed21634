use std::io;
use std::path::Path;

use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod models;
mod words;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    config.apply_args(&args);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("Starting Passphrase Generator");

    if !config.verify_tls {
        // Matches the upstream provider's observed behavior; see
        // Config::verify_tls for the trade-off
        log::warn!("TLS certificate verification for the word API is disabled");
    }

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received. Shutting down...");
        std::process::exit(0);
    })
    .expect("Failed to set Ctrl+C handler");

    api::start_server(config).await
}
