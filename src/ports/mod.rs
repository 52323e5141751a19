mod prompt_template_store;

pub use prompt_template_store::PromptTemplateStore;
