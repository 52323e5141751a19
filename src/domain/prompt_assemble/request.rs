use serde::Deserialize;

use crate::domain::{AppError, AttemptState, Mode, Problem, StudentState, Tier};

/// Unvalidated assembly inputs, as they arrive from a caller or a request document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssemblyRequest {
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub attempt_state: Option<String>,
    #[serde(default)]
    pub problem: Option<Problem>,
    #[serde(default)]
    pub student_state: Option<StudentState>,
}

/// Assembly inputs whose enums have been checked against their legal sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub tier: Tier,
    pub mode: Mode,
    pub attempt_state: AttemptState,
    pub problem: Problem,
    pub student_state: Option<StudentState>,
}

impl AssemblyRequest {
    /// Check presence first, then legal values.
    ///
    /// Order: attempt_state present, then tier, mode and problem present, then tier,
    /// mode and attempt_state legal. The first failure names its field and legal set.
    pub fn validate(self) -> Result<ValidatedRequest, AppError> {
        let attempt_state = present(self.attempt_state)
            .ok_or_else(|| AppError::missing_argument("attempt_state", AttemptState::legal_names()))?;
        let tier = present(self.tier)
            .ok_or_else(|| AppError::missing_argument("tier", Tier::legal_names()))?;
        let mode = present(self.mode)
            .ok_or_else(|| AppError::missing_argument("mode", Mode::legal_names()))?;
        let problem =
            self.problem.ok_or_else(|| AppError::missing_argument("problem", "a problem document"))?;

        Ok(ValidatedRequest {
            tier: tier.parse()?,
            mode: mode.parse()?,
            attempt_state: attempt_state.parse()?,
            problem,
            student_state: self.student_state,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
