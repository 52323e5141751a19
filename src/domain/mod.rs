pub mod assembly_validation;
pub mod configuration;
pub mod error;
pub mod fixture;
pub mod output_validation;
pub mod problem;
pub mod prompt_assemble;
pub mod prompt_tables;
pub mod session;

pub use assembly_validation::{
    ANSWER_SAFETY_CLAUSE, ValidationResult, validate_assembly, validate_assembly_json,
};
pub use configuration::RuntimeConfig;
pub use error::AppError;
pub use fixture::{FixtureCase, FixtureMismatch, FixtureReport, parse_fixture_cases, run_fixtures};
pub use output_validation::{OutputPolicy, OutputReason, OutputValidator, OutputVerdict};
pub use problem::{Problem, StudentState};
pub use prompt_assemble::{
    AssembledPrompt, AssemblyRequest, PromptAssembler, PromptMetadata, PromptSummary, gate_hints,
    prompt_summary,
};
pub use prompt_tables::{PromptDocument, PromptTables};
pub use session::{AttemptState, Mode, Tier};
