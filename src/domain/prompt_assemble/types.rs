use serde::{Deserialize, Serialize};

use crate::domain::{AttemptState, Mode, Tier};

/// Placeholder for metadata fields the caller did not supply.
pub const UNKNOWN: &str = "unknown";

/// Structured prompt parts, in assembly order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptComponents {
    /// System constitution.
    pub system: String,
    /// Tier governor, then mode context.
    pub developer: Vec<String>,
    /// Problem and student context.
    pub context: String,
}

/// Single-message rendering for providers that accept one system message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedMessage {
    pub system: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub tier: Tier,
    pub mode: Mode,
    pub attempt_state: AttemptState,
    pub problem_id: String,
    pub archetype: String,
    pub student_level: String,
    pub hints_allowed: usize,
    pub answer_included: bool,
}

/// Result of prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledPrompt {
    pub components: PromptComponents,
    pub messages: FlattenedMessage,
    pub metadata: PromptMetadata,
}

impl AssembledPrompt {
    /// The flattened prompt text.
    pub fn flattened(&self) -> &str {
        &self.messages.system
    }
}

/// Logging/debugging view of an assembly, computed without touching templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSummary {
    pub tier: Tier,
    pub mode: Mode,
    pub attempt_state: AttemptState,
    pub problem_id: String,
    pub archetype: String,
    pub student_level: String,
    pub hints_in_db: usize,
    pub hints_allowed: usize,
    pub answer_included: bool,
    pub prompt_assembly_order: Vec<String>,
}
