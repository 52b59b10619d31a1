//! Diff command implementation.
//!
//! The diff command:
//! 1. Loads rendering options
//! 2. Reads the instance and the proposal
//! 3. Builds the diff rows
//! 4. Writes the report and/or prints the table

use super::models::DiffArgs;
use crate::diff::{render_terminal_diff, AttributeDiffComponent, DiffEvent, DiffReport};
use crate::output::json::{read_instance, read_proposal};
use crate::output::write_report;
use crate::utils::config::{load_config, DiffConfig};
use anyhow::{bail, Context, Result};
use colored::*;
use log::{debug, info};
use std::time::Instant;

/// Execute the diff command
pub fn execute_diff(args: DiffArgs) -> Result<DiffReport> {
    let start = Instant::now();

    // Step 1: Rendering options
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DiffConfig::default(),
    };
    if let Some(empty_value) = &args.empty_value {
        config.empty_value = empty_value.clone();
    }
    debug!("Rendering options: {:?}", config);

    // Step 2: Inputs
    let instance = read_instance(&args.instance).context("Failed to read instance")?;
    let proposal = read_proposal(&args.proposal).context("Failed to read proposal")?;
    let key = instance.key();

    // Step 3: Build the diff through the component, as the review widget does
    let mut component = AttributeDiffComponent::new(config);
    component.set_current_instance(Some(instance));
    component.set_modified_attributes(Some(proposal.custom_attribute_values));
    component.handle_event(&DiffEvent::Inserted);

    let report = DiffReport::new(key, component.diff().to_vec());
    info!(
        "Built {} diff rows for {} in {:.2?}",
        report.diff.len(),
        report.instance,
        start.elapsed()
    );

    // Step 4: Outputs
    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write diff report JSON")?;
        println!(
            "📝 Diff report written to {}",
            path.display().to_string().cyan()
        );
    }

    if args.print_summary {
        println!("{}", render_terminal_diff(&report));
    }

    Ok(report)
}

/// Validate diff command arguments
///
/// **Public** - called before execution to fail fast
pub fn validate_args(args: &DiffArgs) -> Result<()> {
    if !args.instance.is_file() {
        bail!("Instance file not found: {}", args.instance.display());
    }

    if !args.proposal.is_file() {
        bail!("Proposal file not found: {}", args.proposal.display());
    }

    if let Some(config) = &args.config {
        if !config.is_file() {
            bail!("Config file not found: {}", config.display());
        }
    }

    if let Some(output) = &args.output {
        crate::output::validate_path(output)?;
    }

    if args.output.is_none() && !args.print_summary {
        bail!("Nothing to do: pass --output and/or --summary");
    }

    Ok(())
}
