//! Timer-delayed dispatch for the search input: an action fires only after
//! the triggering events have paused for the configured delay.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Schedules `action` after the delay, cancelling any action still
    /// waiting from an earlier call.
    pub fn call<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action().await;
        }));
    }

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
