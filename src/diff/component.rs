//! Lifecycle wrapper around the diff engine.
//!
//! The component holds its inputs and the last computed rows, and
//! recomputes them when it is inserted or when a refresh is signalled
//! for its instance.

use crate::model::{CurrentInstance, CustomAttributeValue, InstanceKey, ModifiedAttributes};
use crate::utils::config::DiffConfig;
use log::debug;

use super::engine::{build_diff_object, prepare_attributes};
use super::schema::{DiffRow, DiffState};

/// Events the component reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEvent {
    /// The component was inserted into the page
    Inserted,

    /// The proposal diff for the given instance should be recomputed
    RefreshProposalDiff(InstanceKey),
}

/// Custom attribute diff view-model
#[derive(Debug, Clone, Default)]
pub struct AttributeDiffComponent {
    state: DiffState,
    current_instance: Option<CurrentInstance>,
    modified_attributes: Option<ModifiedAttributes>,
    custom_attribute_values: Vec<CustomAttributeValue>,
}

impl AttributeDiffComponent {
    pub fn new(config: DiffConfig) -> Self {
        Self {
            state: DiffState::new(config),
            ..Default::default()
        }
    }

    pub fn current_instance(&self) -> Option<&CurrentInstance> {
        self.current_instance.as_ref()
    }

    pub fn set_current_instance(&mut self, instance: Option<CurrentInstance>) {
        self.current_instance = instance;
    }

    pub fn modified_attributes(&self) -> Option<&ModifiedAttributes> {
        self.modified_attributes.as_ref()
    }

    pub fn set_modified_attributes(&mut self, modified: Option<ModifiedAttributes>) {
        self.modified_attributes = modified;
    }

    /// Values captured by the last recompute
    pub fn custom_attribute_values(&self) -> &[CustomAttributeValue] {
        &self.custom_attribute_values
    }

    pub fn diff(&self) -> &[DiffRow] {
        self.state.diff()
    }

    pub fn empty_value(&self) -> &str {
        self.state.empty_value()
    }

    pub fn state(&self) -> &DiffState {
        &self.state
    }

    /// Dispatch a lifecycle or refresh event
    ///
    /// Returns whether the diff was recomputed.
    pub fn handle_event(&mut self, event: &DiffEvent) -> bool {
        match event {
            DiffEvent::Inserted => self.build_diff(),
            DiffEvent::RefreshProposalDiff(key) => {
                let targets_us = self
                    .current_instance
                    .as_ref()
                    .is_some_and(|instance| instance.instance_type == key.instance_type && instance.id == key.id);

                if !targets_us {
                    debug!("Ignoring refresh for {}", key);
                    return false;
                }
                self.build_diff()
            }
        }
    }

    /// Recompute the diff from the current inputs
    ///
    /// Does nothing and returns `false` while either input is missing.
    pub fn build_diff(&mut self) -> bool {
        let (Some(instance), Some(modified)) =
            (self.current_instance.as_ref(), self.modified_attributes.as_ref())
        else {
            debug!("Diff inputs not ready, skipping recompute");
            return false;
        };

        self.custom_attribute_values = prepare_attributes(instance);
        build_diff_object(
            &mut self.state,
            &self.custom_attribute_values,
            instance,
            modified,
        );
        true
    }
}
