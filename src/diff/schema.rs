//! Schema definitions for diff rows and reports.

use crate::model::InstanceKey;
use crate::utils::config::{DiffConfig, SCHEMA_VERSION};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One rendered comparison line for a single attribute
///
/// Both sides are one-element lists so that every diff widget renders
/// values the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRow {
    /// Attribute title
    pub attr_name: String,

    /// Formatted current value
    pub current_val: Vec<String>,

    /// Formatted proposed value
    pub modified_val: Vec<String>,
}

impl DiffRow {
    pub fn new(
        attr_name: impl Into<String>,
        current: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            attr_name: attr_name.into(),
            current_val: vec![current.into()],
            modified_val: vec![modified.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.current_val.first().map(String::as_str).unwrap_or_default()
    }

    pub fn modified(&self) -> &str {
        self.modified_val.first().map(String::as_str).unwrap_or_default()
    }

    /// Whether the formatted values differ
    pub fn is_changed(&self) -> bool {
        self.current_val != self.modified_val
    }
}

/// Shared diff state: rendering options plus the last computed rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffState {
    pub config: DiffConfig,
    pub diff: Vec<DiffRow>,
}

impl DiffState {
    pub fn new(config: DiffConfig) -> Self {
        Self {
            config,
            diff: Vec::new(),
        }
    }

    pub fn empty_value(&self) -> &str {
        &self.config.empty_value
    }

    pub fn diff(&self) -> &[DiffRow] {
        &self.diff
    }
}

/// Diff written to disk or printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version for the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Instance the proposal applies to
    pub instance: InstanceKey,

    /// Rows in attribute id order
    pub diff: Vec<DiffRow>,
}

impl DiffReport {
    pub fn new(instance: InstanceKey, diff: Vec<DiffRow>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            instance,
            diff,
        }
    }

    /// Number of rows whose formatted values differ
    pub fn changed_count(&self) -> usize {
        self.diff.iter().filter(|row| row.is_changed()).count()
    }
}
