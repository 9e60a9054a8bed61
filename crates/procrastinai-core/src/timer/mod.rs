mod engine;

pub use engine::{ProcrastinationTimer, TimerState};
