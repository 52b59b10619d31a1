use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a diff report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating diff report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid diff report JSON");
    println!("  Version: {}", report.version);
    println!("  Instance: {}", report.instance);
    println!("  Generated: {}", report.generated_at);
    println!("  Rows: {}", report.diff.len());
    println!("  Changed: {}", report.changed_count());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Proposal Diff Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  instance: object         - Instance under review");
        println!("    type: string           - Object type (e.g., 'Risk')");
        println!("    id: number             - Object id");
        println!("  diff: array              - One row per proposed attribute");
        println!("    attrName: string       - Attribute title");
        println!("    currentVal: [string]   - Formatted current value");
        println!("    modifiedVal: [string]  - Formatted proposed value");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Proposal Diff v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Human-readable diffs of proposed custom attribute changes.");
}
