use clap::Subcommand;
use procrastinai_core::badge::{earned_badges, elapsed_minutes};
use procrastinai_core::{format_duration, SystemClock, TimerState};
use serde::Serialize;

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start delaying
    Start,
    /// Pause delay
    Pause,
    /// Stop and zero the counter
    Reset,
    /// Print current timer state as JSON
    Status,
}

#[derive(Serialize)]
struct TimerStatus {
    state: TimerState,
    total_ms: u64,
    display: String,
    procrastinated_min: u64,
    badges: Vec<&'static str>,
}

pub fn run(action: TimerAction) -> CliResult {
    let mut session = Session::open()?;
    let clock = SystemClock;

    match action {
        TimerAction::Start => match session.state.start_timer(&clock) {
            Some(event) => print_json(&event)?,
            None => println!("timer already running"),
        },
        TimerAction::Pause => match session.state.pause_timer(&clock) {
            Some(event) => print_json(&event)?,
            None => println!("timer not running"),
        },
        TimerAction::Reset => {
            let event = session.state.reset_timer(&clock);
            print_json(&event)?;
        }
        TimerAction::Status => {
            // Tick to fold in time elapsed since the last command.
            let events = session.state.tick(&clock);
            let total_ms = session.state.timer.total_ms();
            print_json(&TimerStatus {
                state: session.state.timer.state(),
                total_ms,
                display: format_duration(chrono::Duration::milliseconds(
                    i64::try_from(total_ms).unwrap_or(i64::MAX),
                )),
                procrastinated_min: elapsed_minutes(total_ms),
                badges: earned_badges(total_ms).iter().map(|b| b.label).collect(),
            })?;
            for event in &events {
                print_json(event)?;
            }
        }
    }

    session.save()
}
