//! Problem and student documents read from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{AppError, Problem, StudentState};

/// Read a problem document (YAML or JSON).
pub fn read_problem(path: &Path) -> Result<Problem, AppError> {
    read_document(path, "problem")
}

/// Read a student-state document (YAML or JSON).
pub fn read_student(path: &Path) -> Result<StudentState, AppError> {
    read_document(path, "student state")
}

fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Cannot read {} {}: {}", what, path.display(), err))
    })?;
    serde_yaml::from_str(&content).map_err(|err| {
        AppError::parse_error(format!("{} {}", what, path.display()), err.to_string())
    })
}
