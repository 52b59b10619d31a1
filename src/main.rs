//! Proposal Diff CLI
//!
//! Compares an object's current custom attribute values with a proposal
//! and prints or writes the resulting diff.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use proposal_diff::commands::{
    display_schema, display_version, execute_diff, validate_args, validate_report_file, DiffArgs,
};

/// Proposal Diff - review proposed custom attribute changes
#[derive(Parser, Debug)]
#[command(name = "proposal-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Diff a proposal against the current instance
    Diff {
        /// JSON file with the current instance
        #[arg(short, long)]
        instance: PathBuf,

        /// JSON file with the proposal content
        #[arg(short, long)]
        proposal: PathBuf,

        /// Output path for the JSON diff report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the diff table to stdout
        #[arg(long)]
        summary: bool,

        /// Placeholder for empty values
        #[arg(long, env = "PROPOSAL_DIFF_EMPTY_VALUE")]
        empty_value: Option<String>,

        /// TOML file with rendering options
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a diff report JSON file
    Validate {
        /// Path to diff report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Diff {
            instance,
            proposal,
            output,
            summary,
            empty_value,
            config,
        } => {
            let args = DiffArgs {
                instance,
                proposal,
                print_summary: summary || output.is_none(),
                output,
                empty_value,
                config,
            };

            validate_args(&args)?;
            execute_diff(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
