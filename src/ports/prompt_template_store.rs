use crate::domain::PromptDocument;

/// Read-only lookup of the prompt documents used during assembly.
///
/// Keys are resolved lazily per request, so a store may be incomplete; the assembler
/// turns a missing key into `AppError::PromptTemplateMissing`.
pub trait PromptTemplateStore {
    /// The system constitution.
    fn system_document(&self) -> &PromptDocument;

    /// Tier governor registered under `key` (e.g. `tier_standard_v1`).
    fn tier_document(&self, key: &str) -> Option<&PromptDocument>;

    /// Mode context registered under `key` (e.g. `mode_mock_v1`).
    fn mode_document(&self, key: &str) -> Option<&PromptDocument>;
}
