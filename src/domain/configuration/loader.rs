//! Runtime configuration parsing.

use std::path::Path;

use crate::domain::AppError;

use super::RuntimeConfig;

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RuntimeConfig, AppError> {
    let config: RuntimeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration read from `path`, resolving relative paths against its directory.
pub fn parse_config_file_content(path: &Path, content: &str) -> Result<RuntimeConfig, AppError> {
    let config = parse_config_content(content)?;
    let base = path.parent().unwrap_or(Path::new("."));
    Ok(config.resolve_relative_to(base))
}
