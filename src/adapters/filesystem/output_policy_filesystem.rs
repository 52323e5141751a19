use std::fs;
use std::path::Path;

use crate::domain::{AppError, OutputPolicy};

/// Read an output policy document. Omitted fields keep their built-in values.
pub fn load_output_policy(path: &Path) -> Result<OutputPolicy, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Cannot read output policy {}: {}", path.display(), err))
    })?;
    OutputPolicy::from_yaml(&path.display().to_string(), &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_partial_policy_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("policy.yml");
        fs::write(&path, "review_min_chars: 5\nknown_tiers: [WARMUP, CONTEST]\n").unwrap();

        let policy = load_output_policy(&path).unwrap();

        assert_eq!(policy.review_min_chars, 5);
        assert_eq!(policy.known_tiers, vec!["WARMUP", "CONTEST"]);
        assert_eq!(policy.active_max_chars, 700);
    }

    #[test]
    fn missing_file_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let err = load_output_policy(&tmp.path().join("nope.yml")).unwrap_err();
        assert!(err.to_string().contains("nope.yml"));
    }

    #[test]
    fn malformed_policy_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("policy.yml");
        fs::write(&path, "active_max_chars: lots\n").unwrap();

        assert!(matches!(load_output_policy(&path), Err(AppError::ParseError { .. })));
    }
}
