//! Persisting [`AppState`] field by field.
//!
//! Each field is stored as JSON under its own stable key. Loading is
//! forgiving: a missing or unparseable entry yields that field's default and
//! a warning, never an error. Only database failures propagate.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::Database;
use crate::distraction::Mood;
use crate::error::Result;
use crate::excuse::{ExcuseContext, ExcuseHistory};
use crate::nudge::BreakPolicy;
use crate::state::AppState;
use crate::task::TaskList;
use crate::timer::ProcrastinationTimer;

/// Stable storage keys, one per persisted field.
pub mod keys {
    pub const TASKS: &str = "procrastinai_state_v1:tasks";
    pub const MOOD: &str = "procrastinai_state_v1:mood";
    pub const MUTE: &str = "procrastinai_state_v1:mute";
    pub const BREAK_INTERVAL_MIN: &str = "procrastinai_state_v1:breakIntervalMin";
    pub const LAST_BREAK_PROMPT_AT: &str = "procrastinai_state_v1:lastBreakPromptAt";
    pub const TIMER_RUNNING: &str = "procrastinai_state_v1:timerRunning";
    pub const TOTAL_PROCRASTINATED_MS: &str = "procrastinai_state_v1:totalProcrastinatedMs";
    pub const TIMER_LAST_TICK_AT: &str = "procrastinai_state_v1:timerLastTickAt";
    pub const EXCUSE_CONTEXT: &str = "procrastinai_state_v1:excuseContext";
    pub const EXCUSE_HISTORY: &str = "procrastinai_state_v1:excuseHistory";

    pub const ALL: [&str; 10] = [
        TASKS,
        MOOD,
        MUTE,
        BREAK_INTERVAL_MIN,
        LAST_BREAK_PROMPT_AT,
        TIMER_RUNNING,
        TOTAL_PROCRASTINATED_MS,
        TIMER_LAST_TICK_AT,
        EXCUSE_CONTEXT,
        EXCUSE_HISTORY,
    ];
}

/// Loads and saves [`AppState`] through a [`Database`].
pub struct StateStore<'a> {
    db: &'a Database,
}

impl<'a> StateStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the state, starting from `defaults` for anything not stored.
    pub fn load_or(&self, defaults: AppState) -> Result<AppState> {
        let breaks = BreakPolicy {
            interval_min: self.field(keys::BREAK_INTERVAL_MIN, defaults.breaks.interval_min)?,
            last_prompt_at_ms: self
                .field(keys::LAST_BREAK_PROMPT_AT, defaults.breaks.last_prompt_at_ms)?,
            muted: self.field(keys::MUTE, defaults.breaks.muted)?,
        };
        let timer = ProcrastinationTimer::from_parts(
            self.field(keys::TIMER_RUNNING, defaults.timer.is_running())?,
            self.field(keys::TOTAL_PROCRASTINATED_MS, defaults.timer.total_ms())?,
            self.field(keys::TIMER_LAST_TICK_AT, defaults.timer.last_tick_epoch_ms())?,
        );

        Ok(AppState {
            tasks: self.field::<TaskList>(keys::TASKS, defaults.tasks)?,
            mood: self.field::<Mood>(keys::MOOD, defaults.mood)?,
            breaks,
            timer,
            excuse_context: self.field::<ExcuseContext>(keys::EXCUSE_CONTEXT, defaults.excuse_context)?,
            excuse_history: self.field::<ExcuseHistory>(keys::EXCUSE_HISTORY, defaults.excuse_history)?,
        })
    }

    pub fn load(&self) -> Result<AppState> {
        self.load_or(AppState::default())
    }

    /// Write every field in one transaction.
    pub fn save(&self, state: &AppState) -> Result<()> {
        let entries = vec![
            (keys::TASKS, encode(&state.tasks)?),
            (keys::MOOD, encode(&state.mood)?),
            (keys::MUTE, encode(&state.breaks.muted)?),
            (keys::BREAK_INTERVAL_MIN, encode(&state.breaks.interval_min)?),
            (keys::LAST_BREAK_PROMPT_AT, encode(&state.breaks.last_prompt_at_ms)?),
            (keys::TIMER_RUNNING, encode(&state.timer.is_running())?),
            (keys::TOTAL_PROCRASTINATED_MS, encode(&state.timer.total_ms())?),
            (keys::TIMER_LAST_TICK_AT, encode(&state.timer.last_tick_epoch_ms())?),
            (keys::EXCUSE_CONTEXT, encode(&state.excuse_context)?),
            (keys::EXCUSE_HISTORY, encode(&state.excuse_history)?),
        ];
        self.db.kv_set_many(entries)?;
        debug!("state saved");
        Ok(())
    }

    /// Remove every stored field, so the next load yields defaults.
    pub fn clear(&self) -> Result<()> {
        for key in keys::ALL {
            self.db.kv_delete(key)?;
        }
        Ok(())
    }

    fn field<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let Some(raw) = self.db.kv_get(key)? else {
            return Ok(default);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "unreadable state entry, using default");
                Ok(default)
            }
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
