//! Input data model.
//!
//! This module defines:
//! - Custom attribute definitions and values of the current instance
//! - Proposed (modified) attribute values, keyed by canonical id
//! - The instance key used to scope refresh events

pub mod schema;

// Re-export main types
pub use schema::{
    normalize_attribute_id, AttributeId, AttributeType, AttributeValue, CurrentInstance,
    CustomAttributeDefinition, CustomAttributeValue, InstanceKey, ModifiedAttribute,
    ModifiedAttributes, Proposal,
};
