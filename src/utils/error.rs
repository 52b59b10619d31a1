//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Building a diff never fails; these only cover reading inputs,
//! loading configuration and writing reports.

use thiserror::Error;

/// Errors that can occur while loading instance or proposal files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to parse JSON input: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a TOML configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
