//! Cancellable delayed events
//!
//! Each scheduled event runs as a tokio task that sleeps and then posts the
//! event onto a channel owned by the scheduler. The event loop drains that
//! channel, so timer tasks never touch screen state themselves. Dropping the
//! scheduler aborts every task that has not fired yet.

use std::fmt::Debug;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep, Duration};
use tracing::debug;

pub struct Scheduler<E> {
    tx: mpsc::UnboundedSender<E>,
    rx: mpsc::UnboundedReceiver<E>,
    pending: Vec<AbortHandle>,
}

impl<E> Scheduler<E>
where
    E: Debug + Send + 'static,
{
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: Vec::new(),
        }
    }

    /// Deliver `event` after `delay`. Must be called inside a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        self.pending.retain(|handle| !handle.is_finished());

        debug!(?event, delay_ms = delay.as_millis() as u64, "timer scheduled");
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            // Receiver only goes away together with the scheduler
            let _ = tx.send(event);
        });

        self.pending.push(handle.abort_handle());
    }

    /// Next event that has already fired, without waiting
    pub fn try_next(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next event to fire
    #[cfg(test)]
    pub async fn next(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Handles of every tracked timer task
    #[cfg(test)]
    pub fn handles(&self) -> Vec<AbortHandle> {
        self.pending.clone()
    }

    /// Number of timers that have not fired yet
    pub fn pending_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort every pending timer and discard events not yet consumed
    pub fn cancel_all(&mut self) {
        let cancelled = self.pending_count();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {}

        if cancelled > 0 {
            debug!(cancelled, "timers cancelled");
        }
    }
}

impl<E> Default for Scheduler<E>
where
    E: Debug + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Scheduler<E> {
    fn drop(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}
