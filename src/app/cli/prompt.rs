//! Assembly-side commands.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::app::commands::assemble::{self, AssembleOptions};
use crate::app::config::load_context;
use crate::domain::{AppError, ValidationResult};

#[derive(Args)]
pub struct RequestArgs {
    /// Difficulty tier: warmup, standard, challenge, contest, elite
    #[arg(long)]
    tier: Option<String>,
    /// Session mode: bootcamp, mixed, mock
    #[arg(long)]
    mode: Option<String>,
    /// Attempt state: active, submitted, review
    #[arg(long)]
    attempt_state: Option<String>,
    /// Problem document (YAML or JSON)
    #[arg(long)]
    problem: PathBuf,
    /// Student state document (YAML or JSON)
    #[arg(long)]
    student: Option<PathBuf>,
}

impl From<RequestArgs> for AssembleOptions {
    fn from(args: RequestArgs) -> Self {
        AssembleOptions {
            tier: args.tier,
            mode: args.mode,
            attempt_state: args.attempt_state,
            problem: args.problem,
            student: args.student,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PromptFormat {
    Text,
    Json,
}

pub fn run_assemble(
    config: Option<&Path>,
    request: RequestArgs,
    format: PromptFormat,
) -> Result<i32, AppError> {
    let ctx = load_context(config)?;
    let outcome = assemble::execute(&ctx, request.into())?;

    match format {
        PromptFormat::Text => println!("{}", outcome.prompt.flattened()),
        PromptFormat::Json => println!("{}", to_pretty_json(&outcome.prompt)?),
    }

    print_findings(&outcome.validation);
    Ok(if outcome.validation.valid { 0 } else { 1 })
}

pub fn run_summary(request: RequestArgs) -> Result<(), AppError> {
    let summary = assemble::summarize(request.into())?;
    println!("{}", to_pretty_json(&summary)?);
    Ok(())
}

pub fn run_check_prompt(file: &Path) -> Result<i32, AppError> {
    let result = assemble::check_prompt(file)?;
    print_findings(&result);

    if result.valid {
        println!("✅ Prompt passed validation");
        Ok(0)
    } else {
        println!("❌ Prompt failed validation ({} error(s))", result.errors.len());
        Ok(1)
    }
}

fn print_findings(result: &ValidationResult) {
    for warning in &result.warnings {
        eprintln!("⚠️  {}", warning);
    }
    for error in &result.errors {
        eprintln!("❌ {}", error);
    }
}

pub(super) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize output: {}", e)))
}
