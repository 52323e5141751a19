pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod telemetry;

pub use context::AppContext;
