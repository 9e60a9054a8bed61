//! Smart excuse generator commands.

use clap::Subcommand;
use procrastinai_core::{seeded_rng, Audience, Blocker, SystemClock, Tone};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum ExcuseAction {
    /// Show the active excuse context
    Show,
    /// Change one or more fields of the excuse context
    Set {
        /// professor, boss, team or friend
        #[arg(long)]
        audience: Option<Audience>,
        /// power_outage, wifi_issues, family_emergency, pet_situation or mysterious_illness
        #[arg(long)]
        blocker: Option<Blocker>,
        /// vague, formal, apologetic or techy
        #[arg(long)]
        tone: Option<Tone>,
    },
    /// Compose an excuse for the active context and record it
    Generate {
        /// Seed for the phrasing choice (reproducible output)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show previously generated excuses, newest first
    History {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ExcuseAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        ExcuseAction::Show => {
            print_json(&session.state.excuse_context)?;
            return Ok(());
        }
        ExcuseAction::Set {
            audience,
            blocker,
            tone,
        } => {
            if let Some(a) = audience {
                session.state.set_audience(a);
            }
            if let Some(b) = blocker {
                session.state.set_blocker(b);
            }
            if let Some(t) = tone {
                session.state.set_tone(t);
            }
            print_json(&session.state.excuse_context)?;
        }
        ExcuseAction::Generate { seed } => {
            let mut rng = seeded_rng(seed);
            let (record, _event) = session.state.generate_excuse(&SystemClock, &mut rng);
            println!("{}", record.text);
        }
        ExcuseAction::History { json } => {
            let history = &session.state.excuse_history;
            if json {
                print_json(history)?;
            } else if history.is_empty() {
                println!("No excuses yet. Bold of you.");
            } else {
                for record in history.iter() {
                    println!("--- {} ({})", record.generated_at.to_rfc3339(), record.id);
                    println!("{}\n", record.text);
                }
            }
            return Ok(());
        }
    }

    session.save()
}
