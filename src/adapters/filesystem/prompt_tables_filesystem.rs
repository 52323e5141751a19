//! Prompt tables loaded from a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PromptTables};

const DOCUMENT_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Load `system_prompt`, `tier_prompts` and `mode_prompts` from `dir`.
///
/// Each document may be YAML or JSON; the first existing extension wins.
pub fn load_prompt_tables_from_dir(dir: &Path) -> Result<PromptTables, AppError> {
    if !dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Prompt directory not found: {}",
            dir.display()
        )));
    }

    let system = read_document(dir, "system_prompt")?;
    let tiers = read_document(dir, "tier_prompts")?;
    let modes = read_document(dir, "mode_prompts")?;
    PromptTables::parse(&dir.display().to_string(), &system, &tiers, &modes)
}

fn read_document(dir: &Path, stem: &str) -> Result<String, AppError> {
    let path = find_document(dir, stem).ok_or_else(|| {
        AppError::config_error(format!(
            "Prompt document '{}' not found in {} (expected .{})",
            stem,
            dir.display(),
            DOCUMENT_EXTENSIONS.join(", .")
        ))
    })?;
    fs::read_to_string(path).map_err(AppError::from)
}

fn find_document(dir: &Path, stem: &str) -> Option<PathBuf> {
    DOCUMENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
}
