use std::io;

use thiserror::Error;

/// Library-wide error type for tutorgate operations.
///
/// Only assembly and startup paths produce these. Validators report findings in their
/// result types instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required parameter is missing or outside its legal set.
    #[error("{}", describe_invalid_argument(.field, .value.as_deref(), .allowed))]
    InvalidArgument { field: String, value: Option<String>, allowed: String },

    /// No prompt template is registered under the requested key.
    #[error("Prompt template not found: {key}")]
    PromptTemplateMissing { key: String },

    /// A prompt template failed to render.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// An output policy pattern failed to compile.
    #[error("Invalid output policy pattern '{pattern}': {reason}")]
    InvalidPolicy { pattern: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Internal error such as a report that failed to serialize.
    #[error("Internal error: {0}")]
    InternalError(String),
}

fn describe_invalid_argument(field: &str, value: Option<&str>, allowed: &str) -> String {
    match value {
        Some(value) => format!("Invalid {}: {}. Must be one of: {}", field, value, allowed),
        None => format!("Missing required parameter: {} (expected: {})", field, allowed),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Missing required parameter `field` whose legal values are `allowed`.
    pub fn missing_argument(field: &str, allowed: impl Into<String>) -> Self {
        AppError::InvalidArgument { field: field.to_string(), value: None, allowed: allowed.into() }
    }

    /// Parameter `field` carried `value`, which is outside `allowed`.
    pub fn invalid_argument(
        field: &str,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        AppError::InvalidArgument {
            field: field.to_string(),
            value: Some(value.into()),
            allowed: allowed.into(),
        }
    }

    pub fn parse_error(what: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::ParseError { what: what.into(), details: details.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_names_field_and_legal_set() {
        let err = AppError::missing_argument("attempt_state", "active, submitted, review");
        assert_eq!(
            err.to_string(),
            "Missing required parameter: attempt_state (expected: active, submitted, review)"
        );
    }

    #[test]
    fn invalid_argument_names_value() {
        let err = AppError::invalid_argument("mode", "practice", "bootcamp, mixed, mock");
        assert_eq!(err.to_string(), "Invalid mode: practice. Must be one of: bootcamp, mixed, mock");
    }

    #[test]
    fn template_missing_names_the_key() {
        let err = AppError::PromptTemplateMissing { key: "tier_elite_v1".into() };
        assert!(err.to_string().contains("tier_elite_v1"));
    }
}
