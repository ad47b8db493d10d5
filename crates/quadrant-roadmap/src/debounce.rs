//! Debounced write scheduling
//!
//! One cancellable fire-once slot: arming replaces whatever was pending,
//! so rapid successive edits collapse into a single write after the quiet
//! period. Owned by the controller; never a free-floating timer handle.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable fire-once scheduled write
#[derive(Debug)]
pub struct WriteDebounce {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl WriteDebounce {
    /// Create a debounce slot with a fixed quiet period
    #[inline]
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `write` to run after the quiet period
    ///
    /// Cancels any previously armed write; at most one write is pending
    /// at a time.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn arm<F>(&mut self, write: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            write.await;
        }));
    }

    /// Cancel the pending write, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a write is still pending
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Configured quiet period
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for WriteDebounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_quiet_period() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = WriteDebounce::new(Duration::from_millis(100));

        let counter = Arc::clone(&fired);
        debounce.arm(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debounce.is_armed());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_coalesces_into_one_write() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = WriteDebounce::new(Duration::from_millis(100));

        for _ in 0..5 {
            let counter = Arc::clone(&fired);
            debounce.arm(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_write() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debounce = WriteDebounce::new(Duration::from_millis(100));

        let counter = Arc::clone(&fired);
        debounce.arm(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debounce.cancel();
        assert!(!debounce.is_armed());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
