//! Configuration and constants for diff rendering.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Placeholder rendered when a side of the diff has no value
pub const DEFAULT_EMPTY_VALUE: &str = "—";

/// Marker rendered for a checked checkbox
pub const CHECKBOX_CHECKED: &str = "✓";

/// Day-granularity display format for `Date` attributes (MM/DD/YYYY)
pub const DATE_DISPLAY_FORMAT: &str = "%m/%d/%Y";

// Accepted date inputs, tried in order. RFC 3339 is handled separately.
pub const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
pub const DATETIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Rendering options shared by every diff row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Text used when a value is absent or falsy
    #[serde(default = "default_empty_value")]
    pub empty_value: String,

    /// chrono format string for `Date` attributes
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_empty_value() -> String {
    DEFAULT_EMPTY_VALUE.to_string()
}

fn default_date_format() -> String {
    DATE_DISPLAY_FORMAT.to_string()
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            empty_value: default_empty_value(),
            date_format: default_date_format(),
        }
    }
}

impl DiffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder for empty values
    pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
        self.empty_value = empty_value.into();
        self
    }

    /// Set the date display format
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Reject formats chrono would choke on while rendering
    pub fn validate(&self) -> Result<(), ConfigError> {
        use chrono::format::{Item, StrftimeItems};

        if self.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid("date_format is empty".to_string()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "date_format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Load rendering options from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If the date format is unusable
///
/// # Example
/// ```ignore
/// let config = load_config("proposal-diff.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DiffConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: DiffConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DiffConfig::default();
        assert_eq!(config.empty_value, "—");
        assert_eq!(config.date_format, "%m/%d/%Y");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "empty_value = \"n/a\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.empty_value, "n/a");
        assert_eq!(config.date_format, DATE_DISPLAY_FORMAT);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "empty_value = ").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_invalid_date_format() {
        let config = DiffConfig::new().with_date_format("%Q");
        assert!(config.validate().is_err());
    }
}
