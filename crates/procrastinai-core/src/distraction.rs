//! Distraction suggestions, picked by mood.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// How many suggestions the widget shows at once.
pub const SUGGESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Chill,
    Curious,
    Frantic,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Chill, Mood::Curious, Mood::Frantic];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Chill => "chill",
            Mood::Curious => "curious",
            Mood::Frantic => "frantic",
        }
    }

    pub fn pool(self) -> &'static [&'static str] {
        match self {
            Mood::Chill => &[
                "Watch a 4-hour 'quick' documentary",
                "Rearrange your desktop icons alphabetically",
                "Compare coffee bean reviews",
                "Learn three origami birds (for science)",
            ],
            Mood::Curious => &[
                "Open 27 tabs about medieval spoons",
                "Read the entire changelog of your OS",
                "Benchmark your Wi‑Fi by room",
                "Plan a hypothetical sabbatical in Iceland",
            ],
            Mood::Frantic => &[
                "Deep-clean your keyboard with a toothpick",
                "Refactor your playlists by BPM",
                "Organize cables by mood",
                "Price out label makers you'll never buy",
            ],
        }
    }
}

impl FromStr for Mood {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| SelectionError::UnknownMood(s.to_string()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up to [`SUGGESTION_COUNT`] distinct suggestions from the mood's pool, in
/// random order.
pub fn suggest_distractions<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> Vec<&'static str> {
    mood.pool()
        .choose_multiple(rng, SUGGESTION_COUNT)
        .copied()
        .collect()
}
