//! Focus-break reminders.
//!
//! A nudge fires when the configured interval has elapsed since the last
//! prompt. An interval of zero disables nudges; muting suppresses them
//! without touching the interval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

pub const BREAK_MESSAGE: &str = "☕ Focus Break: you deserve a break!";

pub const DEFAULT_BREAK_INTERVAL_MIN: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPolicy {
    pub interval_min: u32,
    /// Epoch milliseconds of the last prompt; 0 means never.
    pub last_prompt_at_ms: i64,
    pub muted: bool,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            interval_min: DEFAULT_BREAK_INTERVAL_MIN,
            last_prompt_at_ms: 0,
            muted: false,
        }
    }
}

impl BreakPolicy {
    pub fn is_enabled(&self) -> bool {
        self.interval_min > 0
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if self.muted || !self.is_enabled() {
            return false;
        }
        let interval_ms = i64::from(self.interval_min) * 60_000;
        now.timestamp_millis().saturating_sub(self.last_prompt_at_ms) >= interval_ms
    }

    /// Emit a nudge if one is due, recording `now` as the last prompt.
    pub fn check(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if !self.is_due(now) {
            return None;
        }
        self.last_prompt_at_ms = now.timestamp_millis();
        Some(Event::BreakNudge {
            message: BREAK_MESSAGE.to_string(),
            at: now,
        })
    }

    /// Human-readable summary for status output.
    pub fn describe(&self) -> String {
        if !self.is_enabled() {
            "Break nudges disabled".to_string()
        } else {
            format!(
                "You'll get a gentle nudge every ~{} min",
                self.interval_min
            )
        }
    }
}
