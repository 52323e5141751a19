//! Output-side commands.

use std::io::Read;
use std::path::Path;

use crate::app::commands::check_fixtures;
use crate::app::config::{effective_output_policy, load_context, load_runtime_config};
use crate::domain::AppError;

pub fn run_validate_output(
    config: Option<&Path>,
    tier: &str,
    attempt_state: &str,
    mode: &str,
    text: Option<String>,
) -> Result<i32, AppError> {
    let ctx = load_context(config)?;
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let verdict = ctx.validator().validate(tier, attempt_state, mode, &text);
    println!("{}", if verdict.pass { "PASS" } else { "FAIL" });
    for reason in &verdict.reasons {
        println!("  • {}", reason);
    }

    Ok(if verdict.pass { 0 } else { 1 })
}

pub fn run_check_fixtures(
    config: Option<&Path>,
    file: &Path,
    out: Option<&Path>,
) -> Result<i32, AppError> {
    let ctx = load_context(config)?;
    let run = check_fixtures::execute(ctx.validator(), file, out)?;

    for outcome in &run.report.outcomes {
        let status = if outcome.verdict.pass { "PASS" } else { "FAIL" };
        println!(
            "[{}] {} | expected={} | reasons=[{}]",
            status,
            outcome.case.case_id,
            outcome.case.expected_pass,
            outcome.verdict.reason_tokens().join(", ")
        );
    }

    let mismatches = run.report.total() - run.report.correct();
    println!("\n--- Summary ---");
    println!("Total: {}", run.report.total());
    println!("Correct: {}", run.report.correct());
    println!("Mismatches: {}", mismatches);

    match run.mismatch_report {
        Some(path) => {
            println!("Saved mismatch details to: {}", path.display());
            Ok(1)
        }
        None => Ok(0),
    }
}

pub fn run_policy(config: Option<&Path>) -> Result<(), AppError> {
    let config = load_runtime_config(config)?;
    let policy = effective_output_policy(&config)?;
    print!("{}", policy.to_yaml()?);
    Ok(())
}
