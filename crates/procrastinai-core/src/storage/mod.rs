mod config;
pub mod database;
pub mod state_store;

pub use config::{Config, DefaultsConfig, LoggingConfig, TickerConfig};
pub use database::Database;
pub use state_store::{keys, StateStore};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/procrastinai[-dev]/` based on PROCRASTINAI_ENV.
///
/// Set PROCRASTINAI_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PROCRASTINAI_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("procrastinai-dev")
    } else {
        base_dir.join("procrastinai")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
