//! Prompt assembly, summaries and assembled-prompt checks for documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    AppError, AssembledPrompt, AssemblyRequest, PromptSummary, ValidationResult, prompt_summary,
    validate_assembly, validate_assembly_json,
};

use super::documents::{read_problem, read_student};

/// Raw assembly inputs as given on the command line.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    pub tier: Option<String>,
    pub mode: Option<String>,
    pub attempt_state: Option<String>,
    pub problem: PathBuf,
    pub student: Option<PathBuf>,
}

impl AssembleOptions {
    fn into_request(self) -> Result<AssemblyRequest, AppError> {
        let problem = read_problem(&self.problem)?;
        let student_state = self.student.as_deref().map(read_student).transpose()?;
        Ok(AssemblyRequest {
            tier: self.tier,
            mode: self.mode,
            attempt_state: self.attempt_state,
            problem: Some(problem),
            student_state,
        })
    }
}

/// An assembled prompt together with its post-condition check.
#[derive(Debug, Clone)]
pub struct AssembleOutcome {
    pub prompt: AssembledPrompt,
    pub validation: ValidationResult,
}

pub fn execute(ctx: &AppContext, options: AssembleOptions) -> Result<AssembleOutcome, AppError> {
    let request = options.into_request()?;
    let prompt = ctx.assembler().assemble_request(request)?;
    let validation = validate_assembly(&prompt);
    Ok(AssembleOutcome { prompt, validation })
}

pub fn summarize(options: AssembleOptions) -> Result<PromptSummary, AppError> {
    let request = options.into_request()?.validate()?;
    Ok(prompt_summary(
        request.tier,
        request.mode,
        request.attempt_state,
        &request.problem,
        request.student_state.as_ref(),
    ))
}

/// Check a serialized assembled prompt.
pub fn check_prompt(path: &Path) -> Result<ValidationResult, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Cannot read prompt document {}: {}", path.display(), err))
    })?;
    Ok(validate_assembly_json(&content))
}
