pub mod prompt_assets;

pub use self::prompt_assets::{embedded_prompt_tables, load_embedded_prompt_tables};
