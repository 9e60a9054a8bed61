//! Procrastination timer.
//!
//! The timer is a wall-clock accumulator. It does not use internal threads -
//! the caller is responsible for calling `tick()` periodically and for
//! passing in the current instant.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!   ^________|__________|   (reset)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = ProcrastinationTimer::new();
//! timer.start(clock.now());
//! // In a loop:
//! timer.tick(clock.now());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Accumulates time spent procrastinating.
///
/// Operates on wall-clock deltas -- no internal thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcrastinationTimer {
    running: bool,
    /// Accumulated time in milliseconds.
    total_ms: u64,
    /// Timestamp (ms since epoch) of the last flush while running.
    #[serde(default)]
    last_tick_epoch_ms: Option<i64>,
}

impl ProcrastinationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a timer from its persisted parts.
    pub fn from_parts(running: bool, total_ms: u64, last_tick_epoch_ms: Option<i64>) -> Self {
        Self {
            running,
            total_ms,
            last_tick_epoch_ms: if running { last_tick_epoch_ms } else { None },
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        match (self.running, self.total_ms) {
            (true, _) => TimerState::Running,
            (false, 0) => TimerState::Idle,
            (false, _) => TimerState::Paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn last_tick_epoch_ms(&self) -> Option<i64> {
        self.last_tick_epoch_ms
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        self.last_tick_epoch_ms = Some(now.timestamp_millis());
        debug!(total_ms = self.total_ms, "timer started");
        Some(Event::TimerStarted {
            total_ms: self.total_ms,
            at: now,
        })
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.flush_elapsed(now);
        self.running = false;
        self.last_tick_epoch_ms = None;
        debug!(total_ms = self.total_ms, "timer paused");
        Some(Event::TimerPaused {
            total_ms: self.total_ms,
            at: now,
        })
    }

    /// Stop and zero the counter.
    pub fn reset(&mut self, now: DateTime<Utc>) -> Event {
        self.running = false;
        self.total_ms = 0;
        self.last_tick_epoch_ms = None;
        debug!("timer reset");
        Event::TimerReset { at: now }
    }

    /// Call periodically. Returns the milliseconds added by this tick.
    pub fn tick(&mut self, now: DateTime<Utc>) -> u64 {
        if !self.running {
            return 0;
        }
        self.flush_elapsed(now)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self, now: DateTime<Utc>) -> u64 {
        let now_ms = now.timestamp_millis();
        let elapsed = match self.last_tick_epoch_ms {
            // A clock that went backwards adds nothing.
            Some(last) => u64::try_from(now_ms.saturating_sub(last)).unwrap_or(0),
            None => 0,
        };
        self.total_ms = self.total_ms.saturating_add(elapsed);
        self.last_tick_epoch_ms = Some(now_ms);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn start_pause_accumulates() {
        let mut timer = ProcrastinationTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start(t0()).is_some());
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.start(t0()).is_none());

        assert_eq!(timer.tick(t0() + Duration::seconds(1)), 1_000);
        assert_eq!(timer.tick(t0() + Duration::seconds(3)), 2_000);

        let event = timer.pause(t0() + Duration::seconds(4)).unwrap();
        assert_eq!(
            event,
            Event::TimerPaused {
                total_ms: 4_000,
                at: t0() + Duration::seconds(4)
            }
        );
        assert_eq!(timer.state(), TimerState::Paused);
        assert!(timer.pause(t0() + Duration::seconds(5)).is_none());
    }

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut timer = ProcrastinationTimer::new();
        timer.start(t0());
        timer.pause(t0() + Duration::seconds(10));
        assert_eq!(timer.tick(t0() + Duration::minutes(5)), 0);
        assert_eq!(timer.total_ms(), 10_000);

        // Resuming does not count the paused gap.
        timer.start(t0() + Duration::minutes(5));
        timer.tick(t0() + Duration::minutes(5) + Duration::seconds(1));
        assert_eq!(timer.total_ms(), 11_000);
    }

    #[test]
    fn reset_goes_to_idle() {
        let mut timer = ProcrastinationTimer::new();
        timer.start(t0());
        timer.tick(t0() + Duration::seconds(30));
        timer.reset(t0() + Duration::seconds(31));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.total_ms(), 0);
        assert!(timer.last_tick_epoch_ms().is_none());
    }

    #[test]
    fn backwards_clock_adds_nothing() {
        let mut timer = ProcrastinationTimer::new();
        timer.start(t0());
        assert_eq!(timer.tick(t0() - Duration::seconds(10)), 0);
        assert_eq!(timer.total_ms(), 0);
    }

    #[test]
    fn from_parts_drops_stale_tick_when_stopped() {
        let timer = ProcrastinationTimer::from_parts(false, 5_000, Some(123));
        assert_eq!(timer.last_tick_epoch_ms(), None);
        assert_eq!(timer.state(), TimerState::Paused);
    }
}
