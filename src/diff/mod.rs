//! Custom attribute diff generation.
//!
//! This module compares the current custom attribute values of an instance
//! with the values proposed for it and produces one display row per
//! attribute, formatted by declared type.
//!
//! # Example
//! ```ignore
//! use proposal_diff::diff::build_diff;
//! use proposal_diff::output::json::{read_instance, read_proposal};
//! use proposal_diff::utils::DiffConfig;
//!
//! let instance = read_instance("instance.json")?;
//! let proposal = read_proposal("proposal.json")?;
//! let rows = build_diff(&instance, &proposal.custom_attribute_values, &DiffConfig::default());
//! ```

mod component;
mod convert;
mod engine;
mod output;
mod schema;

// Public API exports
pub use component::{AttributeDiffComponent, DiffEvent};
pub use convert::{convert_value, format_date, parse_date};
pub use engine::{
    build_attribute_diff, build_diff, build_diff_object, get_value_and_definition,
    prepare_attributes, AttributeMatch,
};
pub use output::render_terminal_diff;
pub use schema::{DiffReport, DiffRow, DiffState};
