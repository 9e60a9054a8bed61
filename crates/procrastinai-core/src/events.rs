use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::distraction::Mood;
use crate::excuse::ExcuseContext;

/// Every state change in the system produces an Event.
/// The CLI prints them; the ticker collects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded {
        task_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    TaskToggled {
        task_id: String,
        done: bool,
        at: DateTime<Utc>,
    },
    TaskRemoved {
        task_id: String,
        at: DateTime<Utc>,
    },
    TimerStarted {
        total_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        total_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    BadgeEarned {
        badge_id: String,
        label: String,
        at: DateTime<Utc>,
    },
    /// A focus-break reminder is due.
    BreakNudge {
        message: String,
        at: DateTime<Utc>,
    },
    ExcuseGenerated {
        excuse_id: String,
        context: ExcuseContext,
        at: DateTime<Utc>,
    },
    MoodChanged {
        mood: Mood,
        at: DateTime<Utc>,
    },
}
