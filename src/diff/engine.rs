//! Core diff engine implementation.
//! Matches proposed values to current values and definitions, and builds
//! the ordered list of diff rows.

use crate::model::{
    AttributeId, CurrentInstance, CustomAttributeDefinition, CustomAttributeValue,
    ModifiedAttribute, ModifiedAttributes,
};
use crate::utils::config::DiffConfig;
use log::debug;

use super::convert::convert_value;
use super::schema::{DiffRow, DiffState};

/// Current value and definition found for one attribute id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeMatch<'a> {
    pub value: Option<&'a CustomAttributeValue>,
    pub def: Option<&'a CustomAttributeDefinition>,
}

/// Snapshot the current attribute values of an instance
pub fn prepare_attributes(instance: &CurrentInstance) -> Vec<CustomAttributeValue> {
    instance.custom_attribute_values.clone()
}

/// Look up the current value (in `values`) and the definition (on
/// `instance`) for `attr_id`; the first match wins on both sides.
pub fn get_value_and_definition<'a>(
    values: &'a [CustomAttributeValue],
    instance: &'a CurrentInstance,
    attr_id: AttributeId,
) -> AttributeMatch<'a> {
    let value = values
        .iter()
        .find(|val| val.custom_attribute_id == attr_id);
    let def = instance
        .custom_attribute_definitions
        .iter()
        .find(|def| def.id == attr_id);

    AttributeMatch { value, def }
}

/// Build the row for a single attribute
///
/// Either side falls back to the empty value when it is missing.
pub fn build_attribute_diff(
    config: &DiffConfig,
    modified: Option<&ModifiedAttribute>,
    current: Option<&CustomAttributeValue>,
    def: &CustomAttributeDefinition,
) -> DiffRow {
    let current_val = match current {
        Some(value) => convert_value(value.attribute_value.as_ref(), &def.attribute_type, config),
        None => config.empty_value.clone(),
    };

    let modified_val = match modified.and_then(|m| m.attribute_value.as_ref()) {
        Some(value) => convert_value(Some(value), &def.attribute_type, config),
        None => config.empty_value.clone(),
    };

    DiffRow {
        attr_name: def.title.clone(),
        current_val: vec![current_val],
        modified_val: vec![modified_val],
    }
}

/// Recompute `state.diff` from scratch
///
/// # Arguments
/// * `state` - Diff state whose rows are replaced
/// * `values` - Snapshot of current values (see [`prepare_attributes`])
/// * `instance` - Instance providing the attribute definitions
/// * `modified` - Proposed values, visited in ascending id order
///
/// Ids without a definition (deleted attributes) produce no row.
pub fn build_diff_object(
    state: &mut DiffState,
    values: &[CustomAttributeValue],
    instance: &CurrentInstance,
    modified: &ModifiedAttributes,
) {
    state.diff = Vec::with_capacity(modified.len());

    for (attr_id, modified_attr) in modified.iter() {
        let attr = get_value_and_definition(values, instance, attr_id);

        // attr was deleted
        let Some(def) = attr.def else {
            debug!("No definition for custom attribute {}, skipping", attr_id);
            continue;
        };

        let row = build_attribute_diff(&state.config, Some(modified_attr), attr.value, def);
        state.diff.push(row);
    }

    debug!(
        "Built {} diff rows for {} ({} proposed)",
        state.diff.len(),
        instance.key(),
        modified.len()
    );
}

/// Build the diff rows for an instance and its proposed values
///
/// Pure convenience wrapper around [`build_diff_object`].
///
/// # Example
/// ```ignore
/// let rows = build_diff(&instance, &proposal.custom_attribute_values, &DiffConfig::default());
/// ```
pub fn build_diff(
    instance: &CurrentInstance,
    modified: &ModifiedAttributes,
    config: &DiffConfig,
) -> Vec<DiffRow> {
    let mut state = DiffState::new(config.clone());
    let values = prepare_attributes(instance);
    build_diff_object(&mut state, &values, instance, modified);
    state.diff
}
