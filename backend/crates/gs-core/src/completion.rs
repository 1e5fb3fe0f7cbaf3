use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

/// One-shot "fully drained" notification with no payload.
///
/// Resolves when the paired [`Completer`] fires or is dropped, the same way
/// a closed channel unblocks its readers. Once resolved it stays resolved:
/// checking and then awaiting, or awaiting again, returns immediately.
#[must_use = "a Completion does nothing unless awaited"]
pub struct Completion {
    rx: oneshot::Receiver<()>,
    done: bool,
}

/// Sending half of a [`Completion`]
pub struct Completer {
    tx: oneshot::Sender<()>,
}

/// Create a linked completer/completion pair
pub fn completion() -> (Completer, Completion) {
    let (tx, rx) = oneshot::channel();
    (Completer { tx }, Completion { rx, done: false })
}

impl Completer {
    pub fn complete(self) {
        let _ = self.tx.send(());
    }
}

impl Completion {
    /// Non-blocking check
    pub fn is_complete(&mut self) -> bool {
        if !self.done {
            self.done = !matches!(self.rx.try_recv(), Err(oneshot::error::TryRecvError::Empty));
        }
        self.done
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.done {
            return Poll::Ready(());
        }

        let ready = Pin::new(&mut self.rx).poll(cx).is_ready();
        if ready {
            self.done = true;
            return Poll::Ready(());
        }
        Poll::Pending
    }
}
