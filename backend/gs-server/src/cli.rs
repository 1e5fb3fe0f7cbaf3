use gs_config::{Config, ConfigError, ConfigErrorResult};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gs-server")]
#[command(about = "HTTP server with coordinated graceful shutdown")]
#[command(version)]
pub struct Cli {
    /// Config directory (defaults to $GS_CONFIG_DIR or ./.gs)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Override shutdown.drain_timeout_secs, e.g. "45s" or "2m"
    #[arg(long)]
    pub drain_timeout: Option<humantime::Duration>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration.
    ///
    /// The drain timeout is configured in whole seconds; fractional values
    /// are rejected rather than truncated.
    pub fn apply_overrides(&self, config: &mut Config) -> ConfigErrorResult<()> {
        if let Some(timeout) = self.drain_timeout.as_ref().map(|d| **d) {
            if timeout.subsec_nanos() != 0 {
                return Err(ConfigError::shutdown(format!(
                    "--drain-timeout must be a whole number of seconds, got {}",
                    humantime::format_duration(timeout)
                )));
            }
            config.shutdown.drain_timeout_secs = timeout.as_secs();
        }

        Ok(())
    }
}
