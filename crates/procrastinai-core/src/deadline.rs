//! Deadline evaluation and urgency modes.
//!
//! ## Modes
//!
//! ```text
//! remaining:  ..0 ─── 60m ───────── 360m ─────────>  (none)
//! mode:       FullPanic │ StrongDelay │ MildDelay     MildDelay
//! ```
//!
//! Each band includes its upper edge: exactly 60 minutes is still
//! `FullPanic`, exactly 360 minutes is still `StrongDelay`.

use std::fmt;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Shown by [`format_duration`] once a deadline has passed.
pub const EXPIRED_LABEL: &str = "Time's up!";

/// Shown by [`deadline_label`] when no task has a usable deadline.
pub const NO_DEADLINE_LABEL: &str = "No deadlines";

const PANIC_WINDOW_MIN: i64 = 60;
const STRONG_DELAY_WINDOW_MIN: i64 = 6 * 60;

/// `datetime-local` style shapes, interpreted in the local time zone.
/// `%.f` also accepts a missing fraction.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    FullPanic,
    StrongDelay,
    MildDelay,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::FullPanic => "Full Panic",
            Mode::StrongDelay => "Strong Delay",
            Mode::MildDelay => "Mild Delay",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse user-entered deadline text.
///
/// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` values
/// (local time). Returns `None` for anything else, including local times that
/// fall into a DST gap.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(raw, fmt).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Signed time until the most imminent (or most overdue) deadline.
///
/// Tasks without a deadline and tasks whose deadline does not parse are
/// skipped. Returns `None` when nothing is left.
pub fn nearest_deadline(tasks: &[Task], reference: DateTime<Utc>) -> Option<Duration> {
    tasks
        .iter()
        .filter_map(Task::deadline_at)
        .map(|at| at - reference)
        .min()
}

/// Map the nearest deadline to an urgency mode. `None` means "infinitely far".
pub fn classify_mode(remaining: Option<Duration>) -> Mode {
    match remaining {
        None => Mode::MildDelay,
        Some(d) if d <= Duration::minutes(PANIC_WINDOW_MIN) => Mode::FullPanic,
        Some(d) if d <= Duration::minutes(STRONG_DELAY_WINDOW_MIN) => Mode::StrongDelay,
        Some(_) => Mode::MildDelay,
    }
}

/// Render a remaining duration as `"1h 0m 5s"`.
///
/// Each unit is truncated, never rounded. Hours appear only when non-zero;
/// minutes appear when non-zero or when hours are shown.
pub fn format_duration(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return EXPIRED_LABEL.to_string();
    }
    let total_secs = remaining.num_seconds();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}

/// Label for the nearest-deadline status card.
pub fn deadline_label(remaining: Option<Duration>) -> String {
    match remaining {
        Some(d) => format_duration(d),
        None => NO_DEADLINE_LABEL.to_string(),
    }
}
