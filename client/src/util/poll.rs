//! Lifecycle handle for the background list poller.
//!
//! DESIGN
//! ======
//! The poll loop runs as a detached task, so teardown is signalled through a
//! shared flag rather than by dropping a future. In-flight HTTP requests are
//! not cancelled; only the timer stops firing.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Delay between background list refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Stop flag shared between the poll loop and the page that spawned it.
///
/// Clones observe the same flag. `stop` is idempotent; once stopped, the
/// handle never reports active again.
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    stopped: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until `stop` is called on this handle or any clone of it.
    pub fn is_active(&self) -> bool {
        !self.stopped.load(Ordering::Relaxed)
    }

    /// Signal the loop to exit before its next tick.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}
