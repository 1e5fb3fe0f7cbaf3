mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod shutdown_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use shutdown_config::ShutdownConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "GS_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".gs";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_WORKER_TICK_MS: u64 = 1000;
const MIN_WORKER_TICK_MS: u64 = 10;

const DEFAULT_DRAIN_TIMEOUT_SECS: u64 = 30;
const MIN_DRAIN_TIMEOUT_SECS: u64 = 1;
const MAX_DRAIN_TIMEOUT_SECS: u64 = 3600;
const MAX_HARD_DEADLINE_GRACE_MS: u64 = 60_000;
const DEFAULT_SIGNALS: [&str; 2] = ["interrupt", "terminate"];
const KNOWN_SIGNAL_NAMES: [&str; 11] = [
    "interrupt",
    "int",
    "sigint",
    "terminate",
    "term",
    "sigterm",
    "quit",
    "sigquit",
    "hangup",
    "hup",
    "sighup",
];

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
