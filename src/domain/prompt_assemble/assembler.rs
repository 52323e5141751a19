use tracing::debug;

use crate::domain::{AppError, AttemptState, Mode, Problem, StudentState, Tier};
use crate::ports::PromptTemplateStore;

use super::context::build_context;
use super::hint_gate::gate_hints;
use super::request::AssemblyRequest;
use super::types::{AssembledPrompt, FlattenedMessage, PromptComponents, PromptMetadata, UNKNOWN};

/// Separator between prompt parts in the flattened rendering.
const PART_SEPARATOR: &str = "\n\n";

/// Assembles prompts from an injected template store.
///
/// Parts are always ordered: system constitution, tier governor, mode context,
/// problem/student context.
pub struct PromptAssembler<'a, S: PromptTemplateStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PromptTemplateStore + ?Sized> PromptAssembler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate a raw request, then assemble it.
    pub fn assemble_request(&self, request: AssemblyRequest) -> Result<AssembledPrompt, AppError> {
        let request = request.validate()?;
        self.assemble(
            request.tier,
            request.mode,
            request.attempt_state,
            &request.problem,
            request.student_state.as_ref(),
        )
    }

    pub fn assemble(
        &self,
        tier: Tier,
        mode: Mode,
        attempt_state: AttemptState,
        problem: &Problem,
        student_state: Option<&StudentState>,
    ) -> Result<AssembledPrompt, AppError> {
        let allowed_hints = gate_hints(tier, mode, attempt_state, &problem.hints);

        let system = self.store.system_document().text();
        let developer = self.developer_texts(tier, mode)?;
        let context = build_context(problem, student_state, attempt_state, &allowed_hints)?;

        let flattened = std::iter::once(system.as_str())
            .chain(developer.iter().map(String::as_str))
            .chain(std::iter::once(context.as_str()))
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR);

        let metadata = PromptMetadata {
            tier,
            mode,
            attempt_state,
            problem_id: problem.id.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            archetype: problem.archetype.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            student_level: student_state
                .and_then(|student| student.level.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            hints_allowed: allowed_hints.len(),
            answer_included: attempt_state == AttemptState::Review,
        };

        debug!(
            tier = %metadata.tier,
            mode = %metadata.mode,
            attempt_state = %metadata.attempt_state,
            problem_id = %metadata.problem_id,
            hints_allowed = metadata.hints_allowed,
            answer_included = metadata.answer_included,
            "assembled prompt"
        );

        Ok(AssembledPrompt {
            components: PromptComponents { system, developer, context },
            messages: FlattenedMessage { system: flattened, role: "system".to_string() },
            metadata,
        })
    }

    /// Tier governor text, then mode context text.
    fn developer_texts(&self, tier: Tier, mode: Mode) -> Result<Vec<String>, AppError> {
        let tier_key = tier.template_key();
        let tier_doc = self
            .store
            .tier_document(&tier_key)
            .ok_or_else(|| AppError::PromptTemplateMissing { key: tier_key.clone() })?;

        let mode_key = mode.template_key();
        let mode_doc = self
            .store
            .mode_document(&mode_key)
            .ok_or_else(|| AppError::PromptTemplateMissing { key: mode_key.clone() })?;

        Ok(vec![tier_doc.text(), mode_doc.text()])
    }
}
