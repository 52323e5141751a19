//! CLI Adapter.

mod output;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::telemetry;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tutorgate")]
#[command(version)]
#[command(
    about = "Assemble policy-gated tutor prompts and screen generated responses",
    long_about = None
)]
struct Cli {
    /// Runtime configuration file (TOML)
    #[arg(long, global = true, env = "TUTORGATE_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt and check it before printing
    #[clap(visible_alias = "a")]
    Assemble {
        #[command(flatten)]
        request: prompt::RequestArgs,
        /// Print the flattened prompt or the full assembled document
        #[arg(long, value_enum, default_value_t = prompt::PromptFormat::Text)]
        format: prompt::PromptFormat,
    },
    /// Summarize what assembly would produce, as JSON
    #[clap(visible_alias = "s")]
    Summary {
        #[command(flatten)]
        request: prompt::RequestArgs,
    },
    /// Check a serialized assembled prompt
    CheckPrompt {
        /// Assembled prompt JSON document
        file: PathBuf,
    },
    /// Screen one generated response
    #[clap(visible_alias = "vo")]
    ValidateOutput {
        /// Difficulty tier (e.g. WARMUP)
        #[arg(long)]
        tier: String,
        /// Attempt state (ACTIVE, SUBMITTED, REVIEW)
        #[arg(long)]
        attempt_state: String,
        /// Session mode (e.g. MIXED)
        #[arg(long)]
        mode: String,
        /// Response text; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,
    },
    /// Replay labelled responses through the output validator
    CheckFixtures {
        /// Newline-delimited JSON fixtures
        file: PathBuf,
        /// Mismatch report path (defaults to validator_mismatches.json next to the fixtures)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the effective output policy as YAML
    Policy,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let config = cli.config.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::Assemble { request, format } => prompt::run_assemble(config, request, format),
        Commands::Summary { request } => prompt::run_summary(request).map(|_| 0),
        Commands::CheckPrompt { file } => prompt::run_check_prompt(&file),
        Commands::ValidateOutput { tier, attempt_state, mode, text } => {
            output::run_validate_output(config, &tier, &attempt_state, &mode, text)
        }
        Commands::CheckFixtures { file, out } => {
            output::run_check_fixtures(config, &file, out.as_deref())
        }
        Commands::Policy => output::run_policy(config).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
