pub mod badges;
pub mod breaks;
pub mod config;
pub mod distract;
pub mod excuse;
pub mod status;
pub mod task;
pub mod timer;
pub mod watch;

use procrastinai_core::{AppState, Config, Database, StateStore};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Loaded state plus the database it came from.
///
/// Every command that changes state opens a session, mutates
/// `session.state` and calls [`Session::save`].
pub struct Session {
    db: Database,
    pub config: Config,
    pub state: AppState,
}

impl Session {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let db = Database::open()?;
        let state = StateStore::new(&db).load_or(config.initial_state())?;
        Ok(Self { db, config, state })
    }

    pub fn save(&self) -> CliResult {
        StateStore::new(&self.db).save(&self.state)?;
        Ok(())
    }

    /// Wipe every persisted field and start over from the configured defaults.
    pub fn clear(&mut self) -> CliResult {
        StateStore::new(&self.db).clear()?;
        self.state = self.config.initial_state();
        Ok(())
    }
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
