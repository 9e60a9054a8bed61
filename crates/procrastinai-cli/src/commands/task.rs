//! Task management commands for CLI.

use clap::Subcommand;
use procrastinai_core::{Event, SystemClock};

use super::{print_json, CliResult, Session};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task you are avoiding
    Add {
        /// Task title
        title: String,
        /// Deadline, e.g. "2026-10-19T18:00" (local) or RFC 3339
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List tasks, newest first
    List,
    /// Toggle a task between open and done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Remove a task
    Remove {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> CliResult {
    let mut session = Session::open()?;
    let clock = SystemClock;

    match action {
        TaskAction::Add { title, deadline } => {
            let event = session.state.add_task(&title, deadline, &clock)?;
            if let Event::TaskAdded { task_id, .. } = &event {
                eprintln!("Task added: {task_id}");
                if let Some(task) = session.state.tasks.get(task_id) {
                    if task.deadline.is_some() && task.deadline_at().is_none() {
                        eprintln!("warning: deadline not recognized, task ignored for urgency");
                    }
                    print_json(task)?;
                }
            }
        }
        TaskAction::List => {
            if session.state.tasks.is_empty() {
                eprintln!("No tasks yet. Add something terrifying.");
            }
            print_json(session.state.tasks.as_slice())?;
            return Ok(());
        }
        TaskAction::Toggle { id } => {
            let event = session.state.toggle_task(&id, &clock)?;
            print_json(&event)?;
        }
        TaskAction::Remove { id } => {
            let event = session.state.remove_task(&id, &clock)?;
            print_json(&event)?;
        }
    }

    session.save()
}
