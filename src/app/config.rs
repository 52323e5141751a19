//! Runtime configuration loading and context construction.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::adapters::catalogs::embedded_prompt_tables;
use crate::adapters::filesystem::{load_output_policy, load_prompt_tables_from_dir};
use crate::domain::configuration::parse_config_file_content;
use crate::domain::{AppError, OutputPolicy, OutputValidator, RuntimeConfig};

use super::AppContext;

/// Load `path` when given; otherwise the embedded defaults apply.
pub fn load_runtime_config(path: Option<&Path>) -> Result<RuntimeConfig, AppError> {
    let Some(path) = path else {
        return Ok(RuntimeConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Cannot read config {}: {}", path.display(), err))
    })?;
    parse_config_file_content(path, &content)
}

/// Resolve prompt tables and the output validator from `config`.
///
/// Overrides are loaded and compiled here, so a bad template or pattern fails at startup.
pub fn build_context(config: &RuntimeConfig) -> Result<AppContext, AppError> {
    let tables = match &config.prompts.dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading prompt templates from directory");
            Cow::Owned(load_prompt_tables_from_dir(dir)?)
        }
        None => Cow::Borrowed(embedded_prompt_tables()?),
    };

    let validator = match &config.output_policy.path {
        Some(_) => Cow::Owned(OutputValidator::new(effective_output_policy(config)?)?),
        None => Cow::Borrowed(crate::default_validator()),
    };

    Ok(AppContext::new(tables, validator))
}

/// The configured output policy, or the built-in one.
pub fn effective_output_policy(config: &RuntimeConfig) -> Result<OutputPolicy, AppError> {
    match &config.output_policy.path {
        Some(path) => {
            info!(path = %path.display(), "loading output policy override");
            load_output_policy(path)
        }
        None => Ok(OutputPolicy::default()),
    }
}

pub fn load_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    build_context(&load_runtime_config(config_path)?)
}
