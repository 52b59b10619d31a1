//! Readers and writers for the JSON files the CLI works with.
//!
//! - Instance and proposal inputs
//! - Diff reports (pretty JSON)

pub mod json;

// Re-export main functions
pub use json::{read_instance, read_proposal, read_report, write_report, write_report_to};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
