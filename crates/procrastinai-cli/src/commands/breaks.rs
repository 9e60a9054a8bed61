use clap::Subcommand;
use procrastinai_core::{Clock, SystemClock};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum BreaksAction {
    /// Set the focus-break interval in minutes (0 disables nudges)
    Interval { minutes: u32 },
    /// Mute notifications (protect my peace)
    Mute,
    /// Unmute notifications
    Unmute,
    /// Show the break policy
    Show,
    /// Emit a nudge if one is due
    Check,
}

pub fn run(action: BreaksAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        BreaksAction::Interval { minutes } => {
            session.state.set_break_interval(minutes);
            println!("{}", session.state.breaks.describe());
        }
        BreaksAction::Mute => {
            session.state.set_muted(true);
            println!("notifications muted");
        }
        BreaksAction::Unmute => {
            session.state.set_muted(false);
            println!("notifications active");
        }
        BreaksAction::Show => {
            print_json(&session.state.breaks)?;
            return Ok(());
        }
        BreaksAction::Check => match session.state.breaks.check(SystemClock.now()) {
            Some(event) => print_json(&event)?,
            None => println!("no break due"),
        },
    }

    session.save()
}
