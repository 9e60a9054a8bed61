//! Periodic callback driver.
//!
//! The core never embeds timers: the presentation layer owns a [`Ticker`]
//! and calls into the pure state functions from it. Dropping the returned
//! [`TickerHandle`] cancels the task, so a ticker cannot outlive its owner.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

pub struct Ticker;

impl Ticker {
    /// Spawn `on_tick` every `period` on the current tokio runtime.
    ///
    /// The first call happens one full period after spawning. Ticks missed
    /// while the callback was slow are skipped, not bunched up.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> TickerHandle
    where
        F: FnMut(u64) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut clock = interval(period);
            clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately.
            clock.tick().await;
            let mut count = 0u64;
            loop {
                clock.tick().await;
                count += 1;
                on_tick(count);
            }
        });
        debug!(period_ms = period.as_millis() as u64, "ticker started");
        TickerHandle {
            handle: Some(handle),
        }
    }
}

/// Owns a running ticker; aborts it on drop.
pub struct TickerHandle {
    handle: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn stop(mut self) {
        self.abort();
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.abort();
    }
}
