//! Proposal Diff
//!
//! Human-readable diffs between an object's current custom attribute
//! values and the values proposed for it.
//!
//! This crate provides the library behind the `proposal-diff` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! proposal-diff diff --instance instance.json --proposal proposal.json --summary
//! ```

pub mod commands;
pub mod diff;
pub mod model;
pub mod output;
pub mod utils;
