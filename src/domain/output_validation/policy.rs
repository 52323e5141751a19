use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Tunable output policy. Every field falls back to the built-in value when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPolicy {
    /// Case-insensitive patterns signalling answer or solution language.
    pub leak_patterns: Vec<String>,
    /// Multi-line pattern matching a line that starts a numbered or bulleted list.
    pub stepwise_pattern: String,
    /// Longest response (in characters) accepted during an active attempt.
    pub active_max_chars: usize,
    /// Shortest response (in characters) accepted during review.
    pub review_min_chars: usize,
    /// Tiers the validator recognises; others yield an informational reason.
    pub known_tiers: Vec<String>,
    /// Modes the validator recognises; others yield an informational reason.
    pub known_modes: Vec<String>,
}

const LEAK_PATTERNS: &[&str] = &[
    r"\bfinal answer\b",
    r"\banswer\s*:",
    r"\banswer\s+is\b",
    r"\bfull solution\b",
    r"\bsolution\b",
    r"\bwalk-?through\b",
    r"\bstep\s*1\b",
    r"\bstep\s*2\b",
    r"\btherefore\b",
    r"\bhence\b",
    r"\bproof\b",
    r"\bderive\b",
];

// A marker counts when followed by whitespace or directly by a letter, so "1.Draw" is a
// list item but "3.14" and "-5" are not.
const STEPWISE_PATTERN: &str = r"^\s*(?:\d+[.)]|[-*])(?:\s+\S|[A-Za-z(])";

// TODO: align with the assembler's five tiers and three modes once product confirms
// whether CONTEST/ELITE and PRACTICE are meant to differ here.
const KNOWN_TIERS: &[&str] = &["WARMUP", "STANDARD", "CHALLENGE"];
const KNOWN_MODES: &[&str] = &["PRACTICE", "BOOTCAMP", "MIXED", "MOCK"];

impl Default for OutputPolicy {
    fn default() -> Self {
        Self {
            leak_patterns: LEAK_PATTERNS.iter().map(|p| p.to_string()).collect(),
            stepwise_pattern: STEPWISE_PATTERN.to_string(),
            active_max_chars: 700,
            review_min_chars: 20,
            known_tiers: KNOWN_TIERS.iter().map(|t| t.to_string()).collect(),
            known_modes: KNOWN_MODES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl OutputPolicy {
    /// Parse a policy document (YAML or JSON).
    pub fn from_yaml(origin: &str, source: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(source).map_err(|err| AppError::parse_error(origin, err.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self)
            .map_err(|err| AppError::parse_error("output policy", err.to_string()))
    }
}
