use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, info};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Background loop that ticks until `stop` fires
pub async fn run(
    tick: Duration,
    ticks: Arc<AtomicU64>,
    stop: CancellationToken,
) -> std::io::Result<()> {
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = stop.cancelled() => break,
            _ = interval.tick() => {
                let count = ticks.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("Worker tick {}", count);
            }
        }
    }

    info!(
        "Worker stopped after {} ticks",
        ticks.load(Ordering::Relaxed)
    );
    Ok(())
}
