use procrastinai_core::badge::elapsed_minutes;
use procrastinai_core::BADGES;
use serde::Serialize;

use super::{print_json, CliResult, Session};

#[derive(Serialize)]
struct BadgeRow {
    id: &'static str,
    label: &'static str,
    threshold_min: u64,
    earned: bool,
}

/// Print every badge with its unlock status.
pub fn run() -> CliResult {
    let session = Session::open()?;
    let minutes = elapsed_minutes(session.state.timer.total_ms());
    let rows: Vec<BadgeRow> = BADGES
        .iter()
        .map(|b| BadgeRow {
            id: b.id,
            label: b.label,
            threshold_min: b.threshold_min,
            earned: minutes >= b.threshold_min,
        })
        .collect();
    print_json(&rows)
}
