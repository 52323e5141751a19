//! Session vocabulary shared by prompt assembly and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Difficulty governor for a problem or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Warmup,
    Standard,
    Challenge,
    Contest,
    Elite,
}

impl Tier {
    /// All tiers in ascending difficulty.
    pub const ALL: [Tier; 5] =
        [Tier::Warmup, Tier::Standard, Tier::Challenge, Tier::Contest, Tier::Elite];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Warmup => "warmup",
            Tier::Standard => "standard",
            Tier::Challenge => "challenge",
            Tier::Contest => "contest",
            Tier::Elite => "elite",
        }
    }

    /// Parse a tier from its canonical lowercase name.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.name() == name)
    }

    /// Contest and elite tiers never see hints, whatever the mode or attempt state.
    pub fn withholds_hints(&self) -> bool {
        matches!(self, Tier::Contest | Tier::Elite)
    }

    /// Template key of the tier governor document.
    pub fn template_key(&self) -> String {
        format!("tier_{}_v1", self.name())
    }

    pub fn legal_names() -> String {
        join_names(Tier::ALL.iter().map(Tier::name))
    }
}

/// Session framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Bootcamp,
    Mixed,
    Mock,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Bootcamp, Mode::Mixed, Mode::Mock];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Bootcamp => "bootcamp",
            Mode::Mixed => "mixed",
            Mode::Mock => "mock",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.name() == name)
    }

    /// Template key of the session context document.
    pub fn template_key(&self) -> String {
        format!("mode_{}_v1", self.name())
    }

    pub fn legal_names() -> String {
        join_names(Mode::ALL.iter().map(Mode::name))
    }
}

/// Disclosure gate of the current attempt.
///
/// Variants are ordered by how much may be disclosed: `Active < Submitted < Review`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptState {
    Active,
    Submitted,
    Review,
}

impl AttemptState {
    pub const ALL: [AttemptState; 3] =
        [AttemptState::Active, AttemptState::Submitted, AttemptState::Review];

    pub fn name(&self) -> &'static str {
        match self {
            AttemptState::Active => "active",
            AttemptState::Submitted => "submitted",
            AttemptState::Review => "review",
        }
    }

    pub fn from_name(name: &str) -> Option<AttemptState> {
        AttemptState::ALL.into_iter().find(|state| state.name() == name)
    }

    /// Uppercased name used in the context footer.
    pub fn label(&self) -> &'static str {
        match self {
            AttemptState::Active => "ACTIVE",
            AttemptState::Submitted => "SUBMITTED",
            AttemptState::Review => "REVIEW",
        }
    }

    /// Footer instruction telling the assistant how much it may disclose.
    pub fn instruction(&self) -> &'static str {
        match self {
            AttemptState::Active => {
                "(Student is actively working on this problem - follow tier rules strictly)"
            }
            AttemptState::Submitted => {
                "(Student has submitted - you may acknowledge but wait for review mode for full explanation)"
            }
            AttemptState::Review => {
                "(Review mode - provide complete explanation with answer and solution)"
            }
        }
    }

    pub fn legal_names() -> String {
        join_names(AttemptState::ALL.iter().map(AttemptState::name))
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

macro_rules! impl_name_traits {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::from_name(s)
                    .ok_or_else(|| AppError::invalid_argument($field, s, <$ty>::legal_names()))
            }
        }
    };
}

impl_name_traits!(Tier, "tier");
impl_name_traits!(Mode, "mode");
impl_name_traits!(AttemptState, "attempt_state");
