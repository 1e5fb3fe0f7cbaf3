use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WORKER_TICK_MS, MIN_PORT,
    MIN_WORKER_TICK_MS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Interval of the background worker loop
    pub worker_tick_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            worker_tick_ms: DEFAULT_WORKER_TICK_MS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.worker_tick_ms < MIN_WORKER_TICK_MS {
            return Err(ConfigError::server(format!(
                "server.worker_tick_ms must be >= {}, got {}",
                MIN_WORKER_TICK_MS, self.worker_tick_ms
            )));
        }

        Ok(())
    }
}
