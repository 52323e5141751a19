use crate::domain::{AttemptState, Mode, Problem, StudentState, Tier};

use super::hint_gate::gate_hints;
use super::types::{PromptSummary, UNKNOWN};

/// Identifier of the system constitution in the assembly order.
const SYSTEM_PROMPT_ID: &str = "system_olympiad_constitution_v1";
const CONTEXT_PROMPT_ID: &str = "context_prompt";

/// Describe what `assemble` would produce, without touching any template.
pub fn prompt_summary(
    tier: Tier,
    mode: Mode,
    attempt_state: AttemptState,
    problem: &Problem,
    student_state: Option<&StudentState>,
) -> PromptSummary {
    PromptSummary {
        tier,
        mode,
        attempt_state,
        problem_id: problem.id.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        archetype: problem.archetype.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        student_level: student_state
            .and_then(|student| student.level.clone())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        hints_in_db: problem.hints.len(),
        hints_allowed: gate_hints(tier, mode, attempt_state, &problem.hints).len(),
        answer_included: attempt_state == AttemptState::Review,
        prompt_assembly_order: vec![
            SYSTEM_PROMPT_ID.to_string(),
            tier.template_key(),
            mode.template_key(),
            CONTEXT_PROMPT_ID.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_problem, sample_student};

    #[test]
    fn summary_counts_database_and_gated_hints() {
        let summary = prompt_summary(
            Tier::Elite,
            Mode::Mock,
            AttemptState::Active,
            &sample_problem(),
            Some(&sample_student()),
        );

        assert_eq!(summary.hints_in_db, 3);
        assert_eq!(summary.hints_allowed, 0);
        assert_eq!(summary.student_level, "junior");
        assert_eq!(
            summary.prompt_assembly_order,
            vec!["system_olympiad_constitution_v1", "tier_elite_v1", "mode_mock_v1", "context_prompt"]
        );
    }

    #[test]
    fn summary_serializes_enums_as_names() {
        let summary =
            prompt_summary(Tier::Warmup, Mode::Bootcamp, AttemptState::Review, &sample_problem(), None);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["tier"], "warmup");
        assert_eq!(json["attempt_state"], "review");
        assert_eq!(json["answer_included"], true);
        assert_eq!(json["student_level"], "unknown");
    }
}
