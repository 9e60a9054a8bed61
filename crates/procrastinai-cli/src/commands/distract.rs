use clap::Subcommand;
use procrastinai_core::{seeded_rng, suggest_distractions, Mood, SystemClock};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum DistractAction {
    /// Set the current mood (chill, curious or frantic)
    Mood { mood: Mood },
    /// Suggest distractions for the current mood
    Suggest {
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(action: DistractAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        DistractAction::Mood { mood } => {
            let event = session.state.set_mood(mood, &SystemClock);
            print_json(&event)?;
            session.save()
        }
        DistractAction::Suggest { seed } => {
            let picks = suggest_distractions(session.state.mood, &mut seeded_rng(seed));
            for pick in picks {
                println!("- {pick}");
            }
            Ok(())
        }
    }
}
