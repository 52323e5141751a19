//! Problem and student context rendering.
//!
//! Disclosure decisions are made here in Rust; `context.j2` only lays the sections out.
//! The answer block is emitted for the review state alone, independent of tier or mode.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, AttemptState, Problem, StudentState};

const CONTEXT_TEMPLATE_NAME: &str = "context.j2";
const CONTEXT_TEMPLATE: &str = include_str!("../../assets/context.j2");

#[derive(Debug, Serialize)]
struct ContextView<'a> {
    statement: Option<&'a str>,
    archetype: Option<&'a str>,
    skill_track: Option<&'a str>,
    student: Option<&'a StudentState>,
    hints: &'a [String],
    answer: Option<AnswerView<'a>>,
    attempt_label: &'static str,
    attempt_instruction: &'static str,
}

#[derive(Debug, Serialize)]
struct AnswerView<'a> {
    answer_key: &'a str,
    solution: Option<&'a str>,
}

/// Render the context prompt for `problem`.
///
/// `allowed_hints` must already be gated; they are listed only while the attempt is active.
pub fn build_context(
    problem: &Problem,
    student_state: Option<&StudentState>,
    attempt_state: AttemptState,
    allowed_hints: &[String],
) -> Result<String, AppError> {
    let hints: &[String] = if attempt_state == AttemptState::Active { allowed_hints } else { &[] };

    let answer = match (attempt_state, problem.answer_key.as_deref()) {
        (AttemptState::Review, Some(answer_key)) => {
            Some(AnswerView { answer_key, solution: problem.solution.as_deref() })
        }
        _ => None,
    };

    let view = ContextView {
        statement: problem.statement.as_deref(),
        archetype: problem.archetype.as_deref(),
        skill_track: problem.skill_track.as_deref(),
        student: student_state.filter(|student| !student.is_empty()),
        hints,
        answer,
        attempt_label: attempt_state.label(),
        attempt_instruction: attempt_state.instruction(),
    };

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(CONTEXT_TEMPLATE, &view).map_err(|err| AppError::TemplateRender {
        template: CONTEXT_TEMPLATE_NAME.to_string(),
        reason: err.to_string(),
    })
}
