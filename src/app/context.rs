use std::borrow::Cow;

use crate::domain::{OutputValidator, PromptAssembler, PromptTables};

/// Application context holding the prompt tables and output validator for command execution.
pub struct AppContext {
    tables: Cow<'static, PromptTables>,
    validator: Cow<'static, OutputValidator>,
}

impl AppContext {
    pub fn new(
        tables: Cow<'static, PromptTables>,
        validator: Cow<'static, OutputValidator>,
    ) -> Self {
        Self { tables, validator }
    }

    pub fn tables(&self) -> &PromptTables {
        &self.tables
    }

    pub fn validator(&self) -> &OutputValidator {
        &self.validator
    }

    /// Assembler bound to this context's tables.
    pub fn assembler(&self) -> PromptAssembler<'_, PromptTables> {
        PromptAssembler::new(self.tables())
    }
}
