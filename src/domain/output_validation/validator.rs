use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::domain::AppError;

use super::policy::OutputPolicy;
use super::reason::{OutputReason, OutputVerdict};

const ACTIVE: &str = "ACTIVE";
const REVIEW: &str = "REVIEW";

/// An output policy with its patterns compiled once.
#[derive(Debug, Clone)]
pub struct OutputValidator {
    leak_patterns: Vec<Regex>,
    stepwise: Regex,
    active_max_chars: usize,
    review_min_chars: usize,
    known_tiers: Vec<String>,
    known_modes: Vec<String>,
}

impl OutputValidator {
    /// Compile `policy`. A pattern that does not compile is rejected here, at startup.
    pub fn new(policy: OutputPolicy) -> Result<Self, AppError> {
        let leak_patterns = policy
            .leak_patterns
            .iter()
            .map(|pattern| compile(pattern, RegexBuilder::new(pattern).case_insensitive(true)))
            .collect::<Result<Vec<_>, _>>()?;
        let stepwise = compile(
            &policy.stepwise_pattern,
            RegexBuilder::new(&policy.stepwise_pattern).multi_line(true),
        )?;

        Ok(Self {
            leak_patterns,
            stepwise,
            active_max_chars: policy.active_max_chars,
            review_min_chars: policy.review_min_chars,
            known_tiers: normalize_all(&policy.known_tiers),
            known_modes: normalize_all(&policy.known_modes),
        })
    }

    /// Screen one generated response.
    ///
    /// Never fails: malformed enum strings are normalized and reported as informational
    /// reasons. Every check runs; none short-circuits another.
    pub fn validate(
        &self,
        difficulty_tier: &str,
        attempt_state: &str,
        mode: &str,
        ai_output: &str,
    ) -> OutputVerdict {
        let tier = normalize(difficulty_tier);
        let state = normalize(attempt_state);
        let mode = normalize(mode);
        let text = ai_output.trim();
        let length = text.chars().count();

        let mut reasons = Vec::new();

        if text.is_empty() {
            reasons.push(OutputReason::EmptyOutput);
        }

        if state == ACTIVE {
            if let Some(pattern) = self.leak_patterns.iter().find(|re| re.is_match(text)) {
                debug!(pattern = pattern.as_str(), "leak pattern matched");
                reasons.push(OutputReason::ActiveLeak);
            }
            if length > self.active_max_chars {
                reasons.push(OutputReason::ActiveTooLong);
            }
            if self.stepwise.is_match(text) {
                reasons.push(OutputReason::ActiveStepwiseFormatting);
            }
        }

        if state == REVIEW && length < self.review_min_chars {
            reasons.push(OutputReason::ReviewTooShort);
        }

        if !self.known_tiers.contains(&tier) {
            reasons.push(OutputReason::UnknownTier(tier));
        }

        if !self.known_modes.contains(&mode) {
            reasons.push(OutputReason::UnknownMode(mode));
        }

        OutputVerdict::from_reasons(reasons)
    }
}

fn compile(pattern: &str, builder: &mut RegexBuilder) -> Result<Regex, AppError> {
    builder.build().map_err(|err| AppError::InvalidPolicy {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

fn normalize_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| normalize(v)).collect()
}
