//! Debounced scheduling for filter recomputation.
//!
//! A burst of filter changes (keystrokes, slider drags) should trigger one
//! recomputation, not one per tick. [`Debouncer`] keeps a single pending
//! timer: each `schedule` aborts the outstanding one and starts a fresh
//! delay, so only the last change in a burst produces a wake.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Single-pending-timer debouncer. Wakes are delivered on the receiver
/// returned by [`Debouncer::new`]; at most one wake is outstanding per burst.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<()>,
}

impl Debouncer {
    /// Creates a debouncer and the channel its wakes arrive on.
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                pending: None,
                tx,
            },
            rx,
        )
    }

    /// Restarts the delay window. Any pending wake that has not fired yet is
    /// cancelled; one wake is sent `delay` after the last call.
    pub fn schedule(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only drops when the whole session is torn down.
            let _ = tx.send(());
        }));
    }

    /// Cancels any pending wake without sending one.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
