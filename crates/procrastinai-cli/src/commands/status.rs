use procrastinai_core::{seeded_rng, SystemClock};

use super::{print_json, CliResult, Session};

/// Print the dashboard: mode, nearest deadline, timer, badges, suggestions.
pub fn run(seed: Option<u64>) -> CliResult {
    let mut session = Session::open()?;
    let clock = SystemClock;

    let events = session.state.tick(&clock);
    let dashboard = session.state.dashboard(&clock, &mut seeded_rng(seed));
    print_json(&dashboard)?;
    for event in &events {
        print_json(event)?;
    }

    session.save()
}
