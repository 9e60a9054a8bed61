use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use procrastinai_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "procrastinai", version, about = "ProcrastinAI: delay responsibly")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Procrastination timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Smart excuse generator
    Excuse {
        #[command(subcommand)]
        action: commands::excuse::ExcuseAction,
    },
    /// Mood and distraction suggestions
    Distract {
        #[command(subcommand)]
        action: commands::distract::DistractAction,
    },
    /// Focus-break nudges
    Breaks {
        #[command(subcommand)]
        action: commands::breaks::BreaksAction,
    },
    /// List procrastination badges
    Badges,
    /// Print the dashboard as JSON
    Status {
        /// Seed for the distraction suggestions
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Tick continuously and stream events
    Watch {
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Erase all persisted state
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

fn init_logging() {
    let level = Config::load_or_default().logging.level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn reset(yes: bool) -> commands::CliResult {
    if !yes {
        return Err("refusing to erase state without --yes".into());
    }
    let mut session = commands::Session::open()?;
    session.clear()?;
    println!("state cleared");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Excuse { action } => commands::excuse::run(action),
        Commands::Distract { action } => commands::distract::run(action),
        Commands::Breaks { action } => commands::breaks::run(action),
        Commands::Badges => commands::badges::run(),
        Commands::Status { seed } => commands::status::run(seed),
        Commands::Watch { ticks } => commands::watch::run(ticks),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => reset(yes),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "procrastinai", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
