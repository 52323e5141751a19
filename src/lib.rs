//! tutorgate: policy-gated prompt assembly and output screening for an olympiad math tutor.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::OnceLock;

use adapters::catalogs::embedded_prompt_tables;

pub use domain::{
    ANSWER_SAFETY_CLAUSE, AppError, AssembledPrompt, AssemblyRequest, AttemptState, FixtureCase,
    FixtureMismatch, FixtureReport, Mode, OutputPolicy, OutputReason, OutputValidator,
    OutputVerdict, Problem, PromptAssembler, PromptDocument, PromptMetadata, PromptSummary,
    PromptTables, RuntimeConfig, StudentState, Tier, ValidationResult, gate_hints,
    parse_fixture_cases, prompt_summary, run_fixtures, validate_assembly, validate_assembly_json,
};
pub use ports::PromptTemplateStore;

static DEFAULT_VALIDATOR: OnceLock<OutputValidator> = OnceLock::new();

/// Assemble a prompt against the embedded templates.
pub fn assemble(
    tier: Tier,
    mode: Mode,
    attempt_state: AttemptState,
    problem: &Problem,
    student_state: Option<&StudentState>,
) -> Result<AssembledPrompt, AppError> {
    let tables = embedded_prompt_tables()?;
    PromptAssembler::new(tables).assemble(tier, mode, attempt_state, problem, student_state)
}

/// Validate raw string inputs, then assemble against the embedded templates.
pub fn assemble_request(request: AssemblyRequest) -> Result<AssembledPrompt, AppError> {
    let tables = embedded_prompt_tables()?;
    PromptAssembler::new(tables).assemble_request(request)
}

/// Screen a generated response with the built-in output policy.
pub fn validate_output(
    difficulty_tier: &str,
    attempt_state: &str,
    mode: &str,
    ai_output: &str,
) -> OutputVerdict {
    default_validator().validate(difficulty_tier, attempt_state, mode, ai_output)
}

/// Validator for the built-in policy, compiled on first use.
pub fn default_validator() -> &'static OutputValidator {
    DEFAULT_VALIDATOR.get_or_init(|| {
        OutputValidator::new(OutputPolicy::default()).expect("built-in output policy should compile")
    })
}
