pub mod loader;
pub mod runtime_config;

pub use loader::{parse_config_content, parse_config_file_content};
pub use runtime_config::{OutputPolicyConfig, PromptsConfig, RuntimeConfig};
