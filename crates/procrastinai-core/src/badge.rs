//! Procrastination badges.
//!
//! A badge is unlocked once the accumulated timer crosses its minute
//! threshold. The table is static and ordered by threshold.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub label: &'static str,
    pub threshold_min: u64,
}

pub const BADGES: [Badge; 5] = [
    Badge {
        id: "sprout",
        label: "Master of Delay (15m)",
        threshold_min: 15,
    },
    Badge {
        id: "bronze",
        label: "Deadline Dabbler (1h)",
        threshold_min: 60,
    },
    Badge {
        id: "silver",
        label: "Excuse Artisan (3h)",
        threshold_min: 180,
    },
    Badge {
        id: "gold",
        label: "Delay Sensei (6h)",
        threshold_min: 360,
    },
    Badge {
        id: "diamond",
        label: "Time Wizard (12h)",
        threshold_min: 720,
    },
];

/// Whole minutes in `ms`, truncated.
pub fn elapsed_minutes(ms: u64) -> u64 {
    ms / 60_000
}

pub fn earned_badges(total_ms: u64) -> Vec<&'static Badge> {
    let minutes = elapsed_minutes(total_ms);
    BADGES
        .iter()
        .filter(|b| minutes >= b.threshold_min)
        .collect()
}

/// The first badge not yet earned, if any remain.
pub fn next_badge(total_ms: u64) -> Option<&'static Badge> {
    let minutes = elapsed_minutes(total_ms);
    BADGES.iter().find(|b| minutes < b.threshold_min)
}

/// Badges crossed when the counter moves from `before_ms` to `after_ms`.
pub fn newly_earned(before_ms: u64, after_ms: u64) -> Vec<&'static Badge> {
    let before = elapsed_minutes(before_ms);
    let after = elapsed_minutes(after_ms);
    BADGES
        .iter()
        .filter(|b| before < b.threshold_min && after >= b.threshold_min)
        .collect()
}
