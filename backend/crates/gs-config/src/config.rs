use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    LoggingConfig, ServerConfig, ShutdownConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub shutdown: ShutdownConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for GS_CONFIG_DIR env var, else use ./.gs/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GS_CONFIG_DIR env var > ./.gs/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.shutdown.validate()?;
        self.server.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative file name without '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  shutdown: drain_timeout={}s, signals=[{}], hard_deadline_grace={}",
            self.shutdown.drain_timeout_secs,
            self.shutdown.signals.join(", "),
            if self.shutdown.hard_deadline_grace_ms > 0 {
                format!("{}ms", self.shutdown.hard_deadline_grace_ms)
            } else {
                String::from("disabled")
            }
        );
        info!(
            "  server: {}:{} (worker tick {}ms)",
            self.server.host, self.server.port, self.server.worker_tick_ms
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Shutdown
        Self::apply_env_parse(
            "GS_SHUTDOWN_DRAIN_TIMEOUT_SECS",
            &mut self.shutdown.drain_timeout_secs,
        );
        Self::apply_env_list("GS_SHUTDOWN_SIGNALS", &mut self.shutdown.signals);
        Self::apply_env_parse(
            "GS_SHUTDOWN_HARD_DEADLINE_GRACE_MS",
            &mut self.shutdown.hard_deadline_grace_ms,
        );

        // Server
        Self::apply_env_string("GS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("GS_SERVER_WORKER_TICK_MS", &mut self.server.worker_tick_ms);

        // Logging
        Self::apply_env_parse("GS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GS_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("GS_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
