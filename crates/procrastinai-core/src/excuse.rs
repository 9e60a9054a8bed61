//! Excuse composer.
//!
//! An excuse is assembled from fixed phrase tables keyed by the three fields
//! of an [`ExcuseContext`]. The only non-determinism is the choice among the
//! synonymous cause phrasings for the blocker, drawn from a caller-supplied
//! random source.
//!
//! ```text
//! {greeting},
//!
//! {opener} related to {cause}. I'm prioritizing resolution now and don't want to deliver something subpar. {call_to_action}
//!
//! {closing}
//! ```
//!
//! Every table is an exhaustive `match`, so adding a variant without phrases
//! fails to compile. Unknown values coming from text are rejected by the
//! `FromStr` impls with a [`SelectionError`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

const CONNECTIVE: &str =
    "I'm prioritizing resolution now and don't want to deliver something subpar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Professor,
    Boss,
    Team,
    Friend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blocker {
    #[default]
    #[serde(alias = "power outage")]
    PowerOutage,
    #[serde(alias = "wifi issues")]
    WifiIssues,
    #[serde(alias = "family emergency")]
    FamilyEmergency,
    #[serde(alias = "pet situation")]
    PetSituation,
    #[serde(alias = "mysterious illness")]
    MysteriousIllness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Vague,
    Formal,
    Apologetic,
    Techy,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Professor,
        Audience::Boss,
        Audience::Team,
        Audience::Friend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Professor => "professor",
            Audience::Boss => "boss",
            Audience::Team => "team",
            Audience::Friend => "friend",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Audience::Professor => "Dear Professor",
            Audience::Boss => "Hi",
            Audience::Team => "Hey team",
            Audience::Friend => "Hey",
        }
    }

    pub fn call_to_action(self) -> &'static str {
        match self {
            Audience::Professor => "Could I submit by tomorrow evening?",
            Audience::Boss => "Could we push the deadline 24 hours?",
            Audience::Team => "Can we shift this to tomorrow's standup?",
            Audience::Friend => "Can we rain-check to tomorrow?",
        }
    }
}

impl Blocker {
    pub const ALL: [Blocker; 5] = [
        Blocker::PowerOutage,
        Blocker::WifiIssues,
        Blocker::FamilyEmergency,
        Blocker::PetSituation,
        Blocker::MysteriousIllness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Blocker::PowerOutage => "power_outage",
            Blocker::WifiIssues => "wifi_issues",
            Blocker::FamilyEmergency => "family_emergency",
            Blocker::PetSituation => "pet_situation",
            Blocker::MysteriousIllness => "mysterious_illness",
        }
    }

    /// Synonymous phrasings; never empty.
    pub fn causes(self) -> &'static [&'static str] {
        match self {
            Blocker::PowerOutage => &[
                "a localized power outage",
                "my apartment's power cycling like a disco",
            ],
            Blocker::WifiIssues => &[
                "network instability",
                "Wi‑Fi that keeps authenticating with the void",
            ],
            Blocker::FamilyEmergency => &[
                "a family matter that needs my attention",
                "a sudden family situation",
            ],
            Blocker::PetSituation => &[
                "an urgent pet situation (he's fine, just dramatic)",
                "my cat unionizing against productivity",
            ],
            Blocker::MysteriousIllness => &[
                "a minor but inconvenient illness",
                "an uncooperative immune system",
            ],
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Vague, Tone::Formal, Tone::Apologetic, Tone::Techy];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Vague => "vague",
            Tone::Formal => "formal",
            Tone::Apologetic => "apologetic",
            Tone::Techy => "techy",
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            Tone::Vague => "I'm dealing with an unexpected situation today",
            Tone::Formal => "I regret to inform you of an unforeseen circumstance",
            Tone::Apologetic => "I'm really sorry, but something came up",
            Tone::Techy => "A cascade of edge cases hit my local environment",
        }
    }

    pub fn closing(self) -> &'static str {
        match self {
            Tone::Vague => "Thank you for understanding.",
            Tone::Formal => "I appreciate your consideration in this matter.",
            Tone::Apologetic => "I appreciate your patience and I'm sorry again.",
            Tone::Techy => "I'll stabilize the stack and follow up ASAP.",
        }
    }
}

/// Lowercase and fold spaces/hyphens to underscores, so `"Wifi Issues"`,
/// `"wifi-issues"` and `"wifi_issues"` all match.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

macro_rules! text_enum {
    ($ty:ident, $err:ident) => {
        impl FromStr for $ty {
            type Err = SelectionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize(s);
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str() == key)
                    .ok_or_else(|| SelectionError::$err(s.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum!(Audience, UnknownAudience);
text_enum!(Blocker, UnknownBlocker);
text_enum!(Tone, UnknownTone);

/// The active excuse selection. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExcuseContext {
    pub audience: Audience,
    pub blocker: Blocker,
    pub tone: Tone,
}

impl ExcuseContext {
    pub fn new(audience: Audience, blocker: Blocker, tone: Tone) -> Self {
        Self {
            audience,
            blocker,
            tone,
        }
    }
}

/// Compose an excuse for `ctx`, drawing the cause phrasing from `rng`.
pub fn compose_excuse<R: Rng + ?Sized>(ctx: &ExcuseContext, rng: &mut R) -> String {
    let causes = ctx.blocker.causes();
    let cause = causes[rng.gen_range(0..causes.len())];
    format!(
        "{greeting},\n\n{opener} related to {cause}. {connective} {ask}\n\n{closing}",
        greeting = ctx.audience.greeting(),
        opener = ctx.tone.opener(),
        ask = ctx.audience.call_to_action(),
        closing = ctx.tone.closing(),
        connective = CONNECTIVE,
    )
}

/// A generated excuse. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcuseRecord {
    pub id: String,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

/// Append-only excuse log, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExcuseHistory {
    records: Vec<ExcuseRecord>,
}

impl ExcuseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> &ExcuseRecord {
        self.records.insert(
            0,
            ExcuseRecord {
                id: id.into(),
                text: text.into(),
                generated_at,
            },
        );
        &self.records[0]
    }

    pub fn latest(&self) -> Option<&ExcuseRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExcuseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
