//! Utility modules for configuration, error handling, and logging.

pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use config::{load_config, DiffConfig};
pub use error::{ConfigError, InputError, OutputError};
