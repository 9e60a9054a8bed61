//! # ProcrastinAI Core Library
//!
//! This library provides the core logic for ProcrastinAI, a local-only
//! procrastination assistant. It follows a CLI-first philosophy: every
//! operation is reachable from the standalone CLI binary, which is a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Deadline evaluator**: nearest deadline, urgency mode, duration labels
//! - **Excuse composer**: template tables filled from an [`ExcuseContext`]
//! - **Procrastination timer**: a wall-clock accumulator driven by `tick()`
//! - **Storage**: SQLite key-value state store and TOML configuration
//!
//! Nothing here reads the clock or a random source implicitly: both are
//! passed in, see [`Clock`] and [`rand::Rng`].
//!
//! ## Key Components
//!
//! - [`AppState`]: the single owner of all user state
//! - [`StateStore`]: per-field persistence of [`AppState`]
//! - [`Config`]: application configuration management
//! - [`Ticker`]: scoped periodic driver for `tick()`

pub mod badge;
pub mod clock;
pub mod deadline;
pub mod distraction;
pub mod error;
pub mod events;
pub mod excuse;
pub mod nudge;
pub mod state;
pub mod storage;
pub mod task;
pub mod ticker;
pub mod timer;

pub use badge::{Badge, BADGES};
pub use clock::{seeded_rng, Clock, FixedClock, SystemClock};
pub use deadline::{classify_mode, deadline_label, format_duration, nearest_deadline, Mode};
pub use distraction::{suggest_distractions, Mood};
pub use error::{ConfigError, CoreError, DatabaseError, SelectionError, ValidationError};
pub use events::Event;
pub use excuse::{compose_excuse, Audience, Blocker, ExcuseContext, ExcuseHistory, ExcuseRecord, Tone};
pub use nudge::BreakPolicy;
pub use state::{AppState, Dashboard};
pub use storage::{Config, Database, StateStore};
pub use task::{Task, TaskList};
pub use ticker::{Ticker, TickerHandle};
pub use timer::{ProcrastinationTimer, TimerState};
