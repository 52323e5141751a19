//! Post-condition checks over an assembled prompt.
//!
//! These re-check invariants the hint gate and context builder already enforce, so a
//! regression in either surfaces as a validation error instead of a leaked answer.
//! Findings are collected, never raised.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::prompt_assemble::AssembledPrompt;
use super::{AttemptState, Tier};

/// Clause the system constitution must carry verbatim.
pub const ANSWER_SAFETY_CLAUSE: &str = "Never reveal the final answer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self { valid: true, errors: Vec::new(), warnings: Vec::new() }
    }
}

impl ValidationResult {
    fn push_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// The facts the checks need, independent of where the prompt came from.
struct MetadataFacts {
    tier: Option<Tier>,
    attempt_state: Option<AttemptState>,
    has_hints: bool,
    answer_included: bool,
}

/// Validate a prompt assembled in-process.
pub fn validate_assembly(assembled: &AssembledPrompt) -> ValidationResult {
    let metadata = &assembled.metadata;
    let facts = MetadataFacts {
        tier: Some(metadata.tier),
        attempt_state: Some(metadata.attempt_state),
        has_hints: metadata.hints_allowed > 0,
        answer_included: metadata.answer_included,
    };
    run_checks(true, Some(&assembled.components.system), Some(facts))
}

/// Validate a serialized prompt produced elsewhere.
///
/// Only a document that is not JSON at all yields a single "unreadable" error. Missing or
/// off-type fields are read leniently so every other check still runs.
pub fn validate_assembly_json(source: &str) -> ValidationResult {
    let document: Value = match serde_json::from_str(source) {
        Ok(document) => document,
        Err(err) => {
            let mut result = ValidationResult::default();
            result.push_error(format!("Unreadable prompt document: {}", err));
            return result;
        }
    };

    let components = document.get("components").filter(|c| c.is_object());
    let system = components.and_then(|c| c.get("system")).and_then(Value::as_str);
    let facts = document.get("metadata").filter(|m| m.is_object()).map(|meta| MetadataFacts {
        tier: meta.get("tier").and_then(Value::as_str).and_then(Tier::from_name),
        attempt_state: meta
            .get("attempt_state")
            .and_then(Value::as_str)
            .and_then(AttemptState::from_name),
        has_hints: meta.get("hints_allowed").and_then(Value::as_f64).is_some_and(|n| n > 0.0),
        answer_included: meta.get("answer_included").is_some_and(is_truthy),
    });
    run_checks(components.is_some(), system, facts)
}

/// JSON truthiness: `null`, `false`, `0`, `""` and empty containers are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn run_checks(
    has_components: bool,
    system: Option<&str>,
    metadata: Option<MetadataFacts>,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !has_components {
        result.push_error("Missing components structure");
    }

    let system = system.unwrap_or_default();
    if system.is_empty() {
        result.push_error("Missing system prompt");
    }

    if !system.contains(ANSWER_SAFETY_CLAUSE) {
        result.push_error("System prompt missing answer leakage prevention");
    }

    match metadata {
        None => result.push_warning("Missing metadata (recommended for logging)"),
        Some(meta) => {
            let withholds = meta.tier.is_some_and(|tier| tier.withholds_hints());
            if withholds
                && meta.attempt_state == Some(AttemptState::Active)
                && meta.has_hints
            {
                result.push_error("CRITICAL: Contest/Elite tier has hints during active attempt");
            }

            if meta.attempt_state != Some(AttemptState::Review) && meta.answer_included {
                result.push_error("CRITICAL: Answer included during non-review state");
            }
        }
    }

    if !result.valid {
        warn!(errors = ?result.errors, "prompt assembly failed validation");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt_assemble::PromptAssembler;
    use crate::domain::{Mode, Tier};
    use crate::testing::{MockPromptTemplateStore, sample_problem, sample_student};

    fn assembled(tier: Tier, mode: Mode, state: AttemptState) -> AssembledPrompt {
        let store = MockPromptTemplateStore::new();
        PromptAssembler::new(&store)
            .assemble(tier, mode, state, &sample_problem(), Some(&sample_student()))
            .unwrap()
    }

    #[test]
    fn every_legal_assembly_is_valid() {
        for tier in Tier::ALL {
            for mode in Mode::ALL {
                for state in AttemptState::ALL {
                    let result = validate_assembly(&assembled(tier, mode, state));
                    assert!(result.valid, "{tier}/{mode}/{state}: {:?}", result.errors);
                    assert!(result.warnings.is_empty());
                }
            }
        }
    }

    #[test]
    fn system_without_safety_clause_fails() {
        let store = MockPromptTemplateStore::new().with_system_lines(&["Be helpful."]);
        let prompt = PromptAssembler::new(&store)
            .assemble(Tier::Standard, Mode::Mixed, AttemptState::Active, &sample_problem(), None)
            .unwrap();

        let result = validate_assembly(&prompt);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["System prompt missing answer leakage prevention"]);
    }

    #[test]
    fn empty_system_reports_both_findings() {
        let mut prompt = assembled(Tier::Standard, Mode::Mixed, AttemptState::Active);
        prompt.components.system.clear();

        let result = validate_assembly(&prompt);
        assert_eq!(
            result.errors,
            vec!["Missing system prompt", "System prompt missing answer leakage prevention"]
        );
    }

    #[test]
    fn tampered_hint_count_for_contest_is_critical() {
        let mut prompt = assembled(Tier::Contest, Mode::Mock, AttemptState::Active);
        prompt.metadata.hints_allowed = 2;

        let result = validate_assembly(&prompt);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("Contest/Elite tier has hints")));
    }

    #[test]
    fn tampered_answer_flag_outside_review_is_critical() {
        let mut prompt = assembled(Tier::Warmup, Mode::Bootcamp, AttemptState::Submitted);
        prompt.metadata.answer_included = true;

        let result = validate_assembly(&prompt);
        assert_eq!(result.errors, vec!["CRITICAL: Answer included during non-review state"]);
    }

    #[test]
    fn serialized_assembly_roundtrips_as_valid() {
        let prompt = assembled(Tier::Challenge, Mode::Mixed, AttemptState::Review);
        let json = serde_json::to_string(&prompt).unwrap();

        assert_eq!(validate_assembly_json(&json), validate_assembly(&prompt));
    }

    #[test]
    fn json_without_structure_collects_every_finding() {
        let result = validate_assembly_json("{}");

        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Missing components structure",
                "Missing system prompt",
                "System prompt missing answer leakage prevention",
            ]
        );
        assert_eq!(result.warnings, vec!["Missing metadata (recommended for logging)"]);
    }

    #[test]
    fn json_metadata_checks_apply_to_foreign_documents() {
        let result = validate_assembly_json(
            r#"{"components": {"system": "Never reveal the final answer."},
                "metadata": {"tier": "elite", "attempt_state": "active",
                             "hints_allowed": 1, "answer_included": true}}"#,
        );

        assert_eq!(result.errors.len(), 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn off_type_metadata_keeps_every_other_check() {
        let result = validate_assembly_json(
            r#"{"components": {"system": "x"},
                "metadata": {"tier": "elite", "attempt_state": "active",
                             "hints_allowed": null, "answer_included": true}}"#,
        );

        assert_eq!(
            result.errors,
            vec![
                "System prompt missing answer leakage prevention",
                "CRITICAL: Answer included during non-review state",
            ]
        );
    }

    #[test]
    fn metadata_values_are_read_by_truthiness() {
        let result = validate_assembly_json(
            r#"{"components": {"system": "Never reveal the final answer."},
                "metadata": {"tier": "contest", "attempt_state": "active",
                             "hints_allowed": 1.5, "answer_included": "yes"}}"#,
        );
        assert_eq!(result.errors.len(), 2);

        let result = validate_assembly_json(
            r#"{"components": {"system": "Never reveal the final answer."},
                "metadata": {"tier": "contest", "attempt_state": "active",
                             "hints_allowed": -2, "answer_included": 0}}"#,
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn non_object_sections_are_reported_as_missing() {
        let result = validate_assembly_json(r#"{"components": "system", "metadata": []}"#);

        assert_eq!(result.errors[0], "Missing components structure");
        assert_eq!(result.warnings, vec!["Missing metadata (recommended for logging)"]);
    }

    #[test]
    fn unreadable_json_is_a_finding_not_a_panic() {
        let result = validate_assembly_json("not json");
        assert!(!result.valid);
        assert!(result.errors[0].starts_with("Unreadable prompt document"));
    }
}
