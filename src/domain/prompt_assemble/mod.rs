pub mod assembler;
pub mod context;
pub mod hint_gate;
pub mod request;
pub mod summary;
pub mod types;

pub use assembler::PromptAssembler;
pub use context::build_context;
pub use hint_gate::gate_hints;
pub use request::{AssemblyRequest, ValidatedRequest};
pub use summary::prompt_summary;
pub use types::{AssembledPrompt, FlattenedMessage, PromptComponents, PromptMetadata, PromptSummary};
