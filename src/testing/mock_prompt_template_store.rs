use std::collections::HashMap;

use crate::domain::{Mode, PromptDocument, Tier};
use crate::ports::PromptTemplateStore;

/// In-memory template store with one short document per tier and mode.
pub struct MockPromptTemplateStore {
    system: PromptDocument,
    tiers: HashMap<String, PromptDocument>,
    modes: HashMap<String, PromptDocument>,
}

impl MockPromptTemplateStore {
    pub fn new() -> Self {
        let tiers = Tier::ALL
            .iter()
            .map(|tier| {
                let doc = PromptDocument::from_lines([format!("TIER {}", tier.name())]);
                (tier.template_key(), doc)
            })
            .collect();
        let modes = Mode::ALL
            .iter()
            .map(|mode| {
                let doc = PromptDocument::from_lines([format!("MODE {}", mode.name())]);
                (mode.template_key(), doc)
            })
            .collect();

        Self {
            system: PromptDocument::from_lines([
                "You are a patient olympiad coach.",
                "Never reveal the final answer during an active attempt.",
            ]),
            tiers,
            modes,
        }
    }

    pub fn with_system_lines(mut self, lines: &[&str]) -> Self {
        self.system = PromptDocument::from_lines(lines.iter().copied());
        self
    }

    pub fn without_tier(mut self, tier: Tier) -> Self {
        self.tiers.remove(&tier.template_key());
        self
    }

    pub fn without_mode(mut self, mode: Mode) -> Self {
        self.modes.remove(&mode.template_key());
        self
    }
}

impl Default for MockPromptTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptTemplateStore for MockPromptTemplateStore {
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
