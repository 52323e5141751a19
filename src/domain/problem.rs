use serde::{Deserialize, Serialize};

/// A practice problem as supplied by the caller.
///
/// `archetype` is an internal categorisation used to steer hint strategy and is never
/// named to the student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub statement: Option<String>,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub skill_track: Option<String>,
    /// Ordered hints, weakest first.
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub answer_key: Option<String>,
    /// Worked solution; only meaningful alongside `answer_key`.
    #[serde(default)]
    pub solution: Option<String>,
}

/// Descriptive learner state, rendered verbatim when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentState {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub attempts_on_this_archetype: Option<u32>,
}

impl StudentState {
    /// True when no field is set; such a state contributes nothing to the context.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.age.is_none() && self.attempts_on_this_archetype.is_none()
    }
}
