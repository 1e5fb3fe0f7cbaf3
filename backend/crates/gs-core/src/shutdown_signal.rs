use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// OS signals the coordinator can treat as a shutdown request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutdownSignal {
    /// SIGINT (Ctrl+C)
    Interrupt,
    /// SIGTERM (sent by `kill` and most supervisors)
    Terminate,
    /// SIGQUIT
    Quit,
    /// SIGHUP
    Hangup,
}

impl ShutdownSignal {
    /// Signals watched when nothing else is configured
    pub const DEFAULT_SET: [ShutdownSignal; 2] = [Self::Interrupt, Self::Terminate];

    #[cfg(unix)]
    pub(crate) fn kind(self) -> tokio::signal::unix::SignalKind {
        use tokio::signal::unix::SignalKind;

        match self {
            Self::Interrupt => SignalKind::interrupt(),
            Self::Terminate => SignalKind::terminate(),
            Self::Quit => SignalKind::quit(),
            Self::Hangup => SignalKind::hangup(),
        }
    }
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
            Self::Quit => "SIGQUIT",
            Self::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown shutdown signal: {0}")]
pub struct ParseSignalError(pub String);

impl FromStr for ShutdownSignal {
    type Err = ParseSignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interrupt" | "int" | "sigint" => Ok(Self::Interrupt),
            "terminate" | "term" | "sigterm" => Ok(Self::Terminate),
            "quit" | "sigquit" => Ok(Self::Quit),
            "hangup" | "hup" | "sighup" => Ok(Self::Hangup),
            _ => Err(ParseSignalError(s.to_string())),
        }
    }
}
