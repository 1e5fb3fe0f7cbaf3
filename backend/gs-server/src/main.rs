use gs_core::ShutdownTrigger;
use gs_server::cli::Cli;
use gs_server::{Server, log_report, logger};

use std::error::Error;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config_dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => gs_config::Config::config_dir()?,
    };
    let mut config = gs_config::Config::load_from(&config_dir)?;
    cli.apply_overrides(&mut config)?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = config_dir.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let server = Server::bind(config, ShutdownTrigger::new()).await?;
    let report = server.run().await?;
    log_report(&report);

    Ok(())
}
