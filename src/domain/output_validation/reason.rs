use std::fmt;

use serde::{Serialize, Serializer};

/// Prefix shared by informational reasons, which never fail a response.
pub const INFORMATIONAL_PREFIX: &str = "unknown_";

/// Why a response was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputReason {
    EmptyOutput,
    ActiveLeak,
    ActiveTooLong,
    ActiveStepwiseFormatting,
    ReviewTooShort,
    /// Informational: the normalized tier is not recognised.
    UnknownTier(String),
    /// Informational: the normalized mode is not recognised.
    UnknownMode(String),
}

impl OutputReason {
    pub fn token(&self) -> String {
        match self {
            OutputReason::EmptyOutput => "empty_output".to_string(),
            OutputReason::ActiveLeak => "active_leak_solution_or_answer_language".to_string(),
            OutputReason::ActiveTooLong => "active_too_long_possible_full_solution".to_string(),
            OutputReason::ActiveStepwiseFormatting => "active_stepwise_formatting".to_string(),
            OutputReason::ReviewTooShort => "review_too_short".to_string(),
            OutputReason::UnknownTier(tier) => format!("{}tier:{}", INFORMATIONAL_PREFIX, tier),
            OutputReason::UnknownMode(mode) => format!("{}mode:{}", INFORMATIONAL_PREFIX, mode),
        }
    }

    pub fn is_informational(&self) -> bool {
        self.token().starts_with(INFORMATIONAL_PREFIX)
    }
}

impl fmt::Display for OutputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl Serialize for OutputReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pass/fail verdict with every reason found, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputVerdict {
    pub pass: bool,
    pub reasons: Vec<OutputReason>,
}

impl OutputVerdict {
    /// A response passes unless some reason is a hard failure.
    pub fn from_reasons(reasons: Vec<OutputReason>) -> Self {
        let pass = reasons.iter().all(OutputReason::is_informational);
        Self { pass, reasons }
    }

    pub fn reason_tokens(&self) -> Vec<String> {
        self.reasons.iter().map(OutputReason::token).collect()
    }
}
