//! Runtime configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Optional overrides loaded from `tutorgate.toml`.
///
/// Every section may be omitted; the embedded defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Prompt template overrides.
    #[serde(default)]
    pub prompts: PromptsConfig,
    /// Output policy overrides.
    #[serde(default)]
    pub output_policy: OutputPolicyConfig,
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.prompts.validate()?;
        self.output_policy.validate()?;
        Ok(())
    }

    /// Resolve relative paths against the directory holding the config file.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        self.prompts.dir = self.prompts.dir.map(|dir| base.join(dir));
        self.output_policy.path = self.output_policy.path.map(|path| base.join(path));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptsConfig {
    /// Directory with `system_prompt`, `tier_prompts` and `mode_prompts` documents.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl PromptsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_ref().is_some_and(|dir| dir.as_os_str().is_empty()) {
            return Err(AppError::config_error("prompts.dir must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputPolicyConfig {
    /// YAML policy document replacing the built-in output policy.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl OutputPolicyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(AppError::config_error("output_policy.path must not be empty"));
        }
        Ok(())
    }
}
