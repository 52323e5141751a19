pub mod assemble;
pub mod check_fixtures;
pub mod documents;
