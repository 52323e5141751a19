//! Static prompt documents: the system constitution plus tier and mode governors.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::AppError;
use crate::ports::PromptTemplateStore;

/// One prompt document. Only `content` takes part in assembly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub content: Vec<String>,
}

impl PromptDocument {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            version: None,
            description: None,
            content: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Content lines joined by newline.
    pub fn text(&self) -> String {
        self.content.join("\n")
    }
}

/// Immutable prompt tables, built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTables {
    system: PromptDocument,
    tiers: BTreeMap<String, PromptDocument>,
    modes: BTreeMap<String, PromptDocument>,
}

impl PromptTables {
    pub fn new(
        system: PromptDocument,
        tiers: BTreeMap<String, PromptDocument>,
        modes: BTreeMap<String, PromptDocument>,
    ) -> Self {
        Self { system, tiers, modes }
    }

    /// Parse the three documents from YAML (or JSON) source text.
    ///
    /// `origin` labels parse errors, e.g. the directory the sources came from.
    pub fn parse(
        origin: &str,
        system_src: &str,
        tiers_src: &str,
        modes_src: &str,
    ) -> Result<Self, AppError> {
        let system = parse_document::<PromptDocument>(origin, "system_prompt", system_src)?;
        let tiers = parse_document(origin, "tier_prompts", tiers_src)?;
        let modes = parse_document(origin, "mode_prompts", modes_src)?;
        Ok(Self::new(system, tiers, modes))
    }
}

fn parse_document<T: for<'de> Deserialize<'de>>(
    origin: &str,
    name: &str,
    source: &str,
) -> Result<T, AppError> {
    serde_yaml::from_str(source)
        .map_err(|err| AppError::parse_error(format!("{}/{}", origin, name), err.to_string()))
}

impl PromptTemplateStore for PromptTables {
    fn system_document(&self) -> &PromptDocument {
        &self.system
    }

    fn tier_document(&self, key: &str) -> Option<&PromptDocument> {
        self.tiers.get(key)
    }

    fn mode_document(&self, key: &str) -> Option<&PromptDocument> {
        self.modes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_documents() {
        let tables = PromptTables::parse(
            "inline",
            "id: system_v1\ncontent:\n  - line one\n  - line two\n",
            "tier_warmup_v1:\n  content: [\"warm\"]\n",
            "mode_mixed_v1:\n  content: [\"mixed\"]\n",
        )
        .unwrap();

        assert_eq!(tables.system_document().text(), "line one\nline two");
        assert_eq!(tables.tier_document("tier_warmup_v1").unwrap().text(), "warm");
        assert!(tables.tier_document("tier_elite_v1").is_none());
        assert_eq!(tables.mode_document("mode_mixed_v1").unwrap().text(), "mixed");
    }

    #[test]
    fn parses_json_documents() {
        let tables = PromptTables::parse(
            "inline",
            r#"{"content": ["a", "b"]}"#,
            r#"{"tier_standard_v1": {"content": ["s"]}}"#,
            r#"{"mode_mock_v1": {"content": ["m"]}}"#,
        )
        .unwrap();

        assert_eq!(tables.system_document().content, vec!["a", "b"]);
        assert_eq!(tables.tier_document("tier_standard_v1").unwrap().content, vec!["s"]);
        assert!(tables.mode_document("mode_mixed_v1").is_none());
    }

    #[test]
    fn missing_content_is_a_parse_error() {
        let err = PromptTables::parse("inline", "id: nope\n", "{}", "{}").unwrap_err();
        assert!(matches!(err, AppError::ParseError { ref what, .. } if what == "inline/system_prompt"));
    }
}
