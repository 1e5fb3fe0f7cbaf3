use crate::error::{CoordinatorError, Result};
use crate::ShutdownSignal;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Scoped interest in a set of OS termination signals.
///
/// Streams are registered in [`SignalSubscription::register`] and released
/// when the guard drops, on every exit path of the owner.
///
/// Dropping the guard stops delivery to this subscription only. tokio keeps
/// its process-wide handler installed for the life of the process, so a
/// signal arriving after the drop is swallowed instead of getting the default
/// action (terminating the process). A host that wants a second SIGINT or
/// SIGTERM to kill it must exit once [`crate::Coordinator::run`] returns, or
/// subscribe again.
pub struct SignalSubscription {
    #[cfg(unix)]
    streams: Vec<(ShutdownSignal, tokio::signal::unix::Signal)>,
    #[cfg(windows)]
    ctrl_c: Option<tokio::signal::windows::CtrlC>,
}

impl SignalSubscription {
    /// Register interest in every signal of `signals`. Must be called from
    /// within a tokio runtime.
    #[cfg(unix)]
    #[track_caller]
    pub fn register(signals: &[ShutdownSignal]) -> Result<Self> {
        let caller = Location::caller();
        let mut streams = Vec::with_capacity(signals.len());

        for &signal in signals {
            if streams.iter().any(|(s, _)| *s == signal) {
                continue;
            }

            let stream = tokio::signal::unix::signal(signal.kind()).map_err(|source| {
                CoordinatorError::SignalRegistration {
                    signal,
                    source,
                    location: ErrorLocation::from(caller),
                }
            })?;
            streams.push((signal, stream));
        }

        debug!("Subscribed to {} shutdown signal(s)", streams.len());
        Ok(Self { streams })
    }

    /// Windows only delivers Ctrl+C; other signals are skipped with a warning.
    #[cfg(windows)]
    #[track_caller]
    pub fn register(signals: &[ShutdownSignal]) -> Result<Self> {
        let caller = Location::caller();
        let mut ctrl_c = None;

        for &signal in signals {
            if signal != ShutdownSignal::Interrupt {
                warn!("{} is not available on this platform, ignoring", signal);
                continue;
            }
            if ctrl_c.is_none() {
                ctrl_c = Some(tokio::signal::windows::ctrl_c().map_err(|source| {
                    CoordinatorError::SignalRegistration {
                        signal,
                        source,
                        location: ErrorLocation::from(caller),
                    }
                })?);
            }
        }

        Ok(Self { ctrl_c })
    }

    /// Number of live signal streams held by this guard
    pub fn len(&self) -> usize {
        #[cfg(unix)]
        {
            self.streams.len()
        }
        #[cfg(windows)]
        {
            usize::from(self.ctrl_c.is_some())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait for the first subscribed signal. Never resolves when the
    /// subscription is empty.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> ShutdownSignal {
        if self.streams.is_empty() {
            return std::future::pending().await;
        }

        let waits = self.streams.iter_mut().map(|(signal, stream)| {
            let signal = *signal;
            Box::pin(async move {
                if stream.recv().await.is_none() {
                    warn!("{} stream closed", signal);
                    std::future::pending::<()>().await;
                }
                signal
            })
        });

        let (signal, _, _) = futures::future::select_all(waits).await;
        signal
    }

    #[cfg(windows)]
    pub async fn recv(&mut self) -> ShutdownSignal {
        match self.ctrl_c.as_mut() {
            Some(ctrl_c) => {
                if ctrl_c.recv().await.is_none() {
                    warn!("Ctrl+C stream closed");
                    std::future::pending::<()>().await;
                }
                ShutdownSignal::Interrupt
            }
            None => std::future::pending().await,
        }
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        debug!(
            "Dropped {} shutdown signal stream(s), process handlers stay installed",
            self.len()
        );
    }
}
