//! Fixture harness: replay labelled responses through the output validator.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, FixtureReport, OutputValidator, parse_fixture_cases, run_fixtures};

/// Report file written next to the fixtures when no explicit path is given.
pub const MISMATCH_REPORT_FILE: &str = "validator_mismatches.json";

#[derive(Debug, Clone)]
pub struct FixtureRun {
    pub report: FixtureReport,
    /// Where mismatch details were written, if there were any.
    pub mismatch_report: Option<PathBuf>,
}

pub fn execute(
    validator: &OutputValidator,
    fixtures: &Path,
    out: Option<&Path>,
) -> Result<FixtureRun, AppError> {
    let content = fs::read_to_string(fixtures).map_err(|err| {
        AppError::config_error(format!("Cannot read fixtures {}: {}", fixtures.display(), err))
    })?;
    let cases = parse_fixture_cases(&fixtures.display().to_string(), &content)?;
    let report = run_fixtures(cases, validator);

    let mismatches = report.mismatches();
    info!(
        total = report.total(),
        correct = report.correct(),
        mismatches = mismatches.len(),
        "fixture run finished"
    );

    if mismatches.is_empty() {
        return Ok(FixtureRun { report, mismatch_report: None });
    }

    let path = out.map(Path::to_path_buf).unwrap_or_else(|| default_report_path(fixtures));
    let json = serde_json::to_string_pretty(&mismatches)
        .map_err(|err| AppError::InternalError(format!("Failed to serialize mismatches: {}", err)))?;
    fs::write(&path, json)?;

    Ok(FixtureRun { report, mismatch_report: Some(path) })
}

fn default_report_path(fixtures: &Path) -> PathBuf {
    fixtures.parent().unwrap_or(Path::new("")).join(MISMATCH_REPORT_FILE)
}
