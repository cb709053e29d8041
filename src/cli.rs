use clap::{ArgAction, Parser, Subcommand};
use pipeline_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pipeline-lint",
    version,
    about = "Static linter for CI pipeline YAML"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a pipeline file, or every pipeline file under a directory
    Lint {
        /// Path to a YAML file or a directory
        path: PathBuf,

        /// Treat the repository as trusted (allows privileged features)
        #[arg(long)]
        trusted: bool,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all rules with their diagnostics
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "trust/privileged")
        rule_id: String,
    },
}
