mod output_policy_filesystem;
mod prompt_tables_filesystem;

pub use output_policy_filesystem::load_output_policy;
pub use prompt_tables_filesystem::load_prompt_tables_from_dir;
