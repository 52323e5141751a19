//! Labelled response fixtures for exercising the output validator.

use serde::{Deserialize, Serialize};

use super::AppError;
use super::output_validation::{OutputValidator, OutputVerdict};

/// One labelled response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Defaults to `line_<n>` when the record carries none.
    #[serde(default)]
    pub case_id: String,
    pub difficulty_tier: String,
    pub attempt_state: String,
    pub mode: String,
    pub ai_output: String,
    pub expected_pass: bool,
}

/// Parse newline-delimited JSON fixtures. Blank lines are skipped.
pub fn parse_fixture_cases(origin: &str, source: &str) -> Result<Vec<FixtureCase>, AppError> {
    let mut cases = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = index + 1;
        let mut case: FixtureCase = serde_json::from_str(line).map_err(|err| {
            AppError::parse_error(format!("{} line {}", origin, line_no), err.to_string())
        })?;
        if case.case_id.is_empty() {
            case.case_id = format!("line_{}", line_no);
        }
        cases.push(case);
    }
    Ok(cases)
}

/// Verdict for one fixture.
#[derive(Debug, Clone)]
pub struct FixtureOutcome {
    pub case: FixtureCase,
    pub verdict: OutputVerdict,
}

impl FixtureOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict.pass == self.case.expected_pass
    }
}

/// A fixture whose verdict disagreed with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureMismatch {
    pub case_id: String,
    pub expected_pass: bool,
    pub actual_pass: bool,
    pub reasons: Vec<String>,
    pub attempt_state: String,
    pub difficulty_tier: String,
    pub mode: String,
    pub ai_output: String,
}

#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub outcomes: Vec<FixtureOutcome>,
}

impl FixtureReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_correct()).count()
    }

    pub fn mismatches(&self) -> Vec<FixtureMismatch> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_correct())
            .map(|o| FixtureMismatch {
                case_id: o.case.case_id.clone(),
                expected_pass: o.case.expected_pass,
                actual_pass: o.verdict.pass,
                reasons: o.verdict.reason_tokens(),
                attempt_state: o.case.attempt_state.clone(),
                difficulty_tier: o.case.difficulty_tier.clone(),
                mode: o.case.mode.clone(),
                ai_output: o.case.ai_output.clone(),
            })
            .collect()
    }
}

/// Run every case through `validator`. One bad case never aborts the batch.
pub fn run_fixtures(cases: Vec<FixtureCase>, validator: &OutputValidator) -> FixtureReport {
    let outcomes = cases
        .into_iter()
        .map(|case| {
            let verdict = validator.validate(
                &case.difficulty_tier,
                &case.attempt_state,
                &case.mode,
                &case.ai_output,
            );
            FixtureOutcome { case, verdict }
        })
        .collect();
    FixtureReport { outcomes }
}
