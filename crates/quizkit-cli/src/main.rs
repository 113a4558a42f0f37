//! quizkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "quizkit", version, about = "In-memory quiz evaluator")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions without their answers
    Questions {
        /// Catalog TOML file (default: built-in questions)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Check a single answer
    Check {
        /// Question ID
        #[arg(long)]
        question: String,

        /// The answer to check (exact, case-sensitive)
        #[arg(long)]
        answer: String,

        /// Catalog TOML file (default: built-in questions)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Score a JSON file of responses
    Score {
        /// JSON array of {"question_id", "user_answer"} objects
        #[arg(long)]
        responses: PathBuf,

        /// Catalog TOML file (default: built-in questions)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Validate a catalog TOML file
    Validate {
        /// Path to catalog file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create starter config and example catalog
    Init,
}

fn main() {
    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref()).and_then(|config| {
        init_tracing(&config.log_level);

        match cli.command {
            Commands::Questions { catalog, format } => {
                commands::questions::execute(&config, catalog, format)
            }
            Commands::Check {
                question,
                answer,
                catalog,
            } => commands::check::execute(&config, catalog, &question, &answer),
            Commands::Score {
                responses,
                catalog,
                format,
            } => commands::score::execute(&config, catalog, responses, format),
            Commands::Validate { catalog } => commands::validate::execute(catalog),
            Commands::Init => commands::init::execute(),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
