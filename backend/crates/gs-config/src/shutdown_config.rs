use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DRAIN_TIMEOUT_SECS, DEFAULT_SIGNALS,
    KNOWN_SIGNAL_NAMES, MAX_DRAIN_TIMEOUT_SECS, MAX_HARD_DEADLINE_GRACE_MS,
    MIN_DRAIN_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Budget every drainable gets once shutdown starts
    pub drain_timeout_secs: u64,
    /// OS signals that start a shutdown
    pub signals: Vec<String>,
    /// Abandon drains still running this long after the deadline (0 = wait forever)
    pub hard_deadline_grace_ms: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            drain_timeout_secs: DEFAULT_DRAIN_TIMEOUT_SECS,
            signals: DEFAULT_SIGNALS.iter().map(|s| s.to_string()).collect(),
            hard_deadline_grace_ms: 0,
        }
    }
}

impl ShutdownConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_DRAIN_TIMEOUT_SECS..=MAX_DRAIN_TIMEOUT_SECS).contains(&self.drain_timeout_secs) {
            return Err(ConfigError::shutdown(format!(
                "shutdown.drain_timeout_secs must be {}-{}, got {}",
                MIN_DRAIN_TIMEOUT_SECS, MAX_DRAIN_TIMEOUT_SECS, self.drain_timeout_secs
            )));
        }

        if self.signals.is_empty() {
            return Err(ConfigError::shutdown(
                "shutdown.signals must name at least one signal",
            ));
        }

        if let Some(unknown) = self
            .signals
            .iter()
            .find(|s| !KNOWN_SIGNAL_NAMES.contains(&s.trim().to_lowercase().as_str()))
        {
            return Err(ConfigError::shutdown(format!(
                "shutdown.signals contains unknown signal '{}'",
                unknown
            )));
        }

        if self.hard_deadline_grace_ms > MAX_HARD_DEADLINE_GRACE_MS {
            return Err(ConfigError::shutdown(format!(
                "shutdown.hard_deadline_grace_ms must be <= {}, got {}",
                MAX_HARD_DEADLINE_GRACE_MS, self.hard_deadline_grace_ms
            )));
        }

        Ok(())
    }
}
