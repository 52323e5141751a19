//! Embedded catalog for the built-in prompt documents.
//!
//! These assets are compiled into the binary and parsed once per process.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, PromptTables};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

static EMBEDDED_TABLES: OnceLock<PromptTables> = OnceLock::new();

const ORIGIN: &str = "embedded://prompts";

/// Read an embedded prompt document by its path relative to `src/assets/prompts/`.
pub fn read_prompt_asset(path: &str) -> Option<&'static str> {
    PROMPTS_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

/// Parse the embedded documents into fresh tables.
pub fn load_embedded_prompt_tables() -> Result<PromptTables, AppError> {
    let system = required_asset("system_prompt.yml")?;
    let tiers = required_asset("tier_prompts.yml")?;
    let modes = required_asset("mode_prompts.yml")?;
    PromptTables::parse(ORIGIN, system, tiers, modes)
}

/// Process-wide embedded tables, parsed on first use.
pub fn embedded_prompt_tables() -> Result<&'static PromptTables, AppError> {
    if let Some(tables) = EMBEDDED_TABLES.get() {
        return Ok(tables);
    }
    let tables = load_embedded_prompt_tables()?;
    Ok(EMBEDDED_TABLES.get_or_init(|| tables))
}

fn required_asset(path: &str) -> Result<&'static str, AppError> {
    read_prompt_asset(path).ok_or_else(|| {
        AppError::config_error(format!("Embedded prompt asset missing: {}/{}", ORIGIN, path))
    })
}
