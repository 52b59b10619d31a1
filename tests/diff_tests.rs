//! End-to-end tests for building diffs from JSON payloads.

use pretty_assertions::assert_eq;
use proposal_diff::diff::*;
use proposal_diff::model::{CurrentInstance, InstanceKey, ModifiedAttributes, Proposal};
use proposal_diff::utils::DiffConfig;

fn instance_json() -> &'static str {
    r#"{
        "type": "Risk",
        "id": 42,
        "custom_attribute_definitions": [
            {"id": 1, "title": "Reviewed", "attribute_type": "Checkbox"},
            {"id": 2, "title": "Due date", "attribute_type": "Date"},
            {"id": 10, "title": "Owner notes", "attribute_type": "Text"}
        ],
        "custom_attribute_values": [
            {"custom_attribute_id": 1, "attribute_value": "1"},
            {"custom_attribute_id": 2, "attribute_value": "2018-05-01"},
            {"custom_attribute_id": 10, "attribute_value": null}
        ]
    }"#
}

fn parse_instance() -> CurrentInstance {
    serde_json::from_str(instance_json()).unwrap()
}

#[test]
fn test_rows_follow_numeric_id_order() {
    let instance = parse_instance();
    let modified: ModifiedAttributes = serde_json::from_str(
        r#"{
            "10": {"attribute_value": "new notes"},
            "2": {"attribute_value": "2019-01-15"},
            "1": {"attribute_value": true}
        }"#,
    )
    .unwrap();

    let rows = build_diff(&instance, &modified, &DiffConfig::default());

    assert_eq!(
        rows,
        vec![
            DiffRow::new("Reviewed", "✓", "✓"),
            DiffRow::new("Due date", "05/01/2018", "01/15/2019"),
            DiffRow::new("Owner notes", "—", "new notes"),
        ]
    );
}

#[test]
fn test_deleted_definitions_are_skipped() {
    let instance = parse_instance();
    let proposal: Proposal = serde_json::from_str(
        r#"{"custom_attribute_values": {
            "1": {"attribute_value": false},
            "555": {"attribute_value": "gone"},
            "not-an-id": {"attribute_value": "ignored"}
        }}"#,
    )
    .unwrap();

    let rows = build_diff(&instance, &proposal.custom_attribute_values, &DiffConfig::default());

    assert_eq!(rows, vec![DiffRow::new("Reviewed", "✓", "—")]);
}

#[test]
fn test_row_serializes_with_camel_case_names() {
    let row = DiffRow::new("Risk", "✓", "—");
    let json = serde_json::to_value(&row).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "attrName": "Risk",
            "currentVal": ["✓"],
            "modifiedVal": ["—"]
        })
    );
}

#[test]
fn test_component_refresh_cycle() {
    let mut component = AttributeDiffComponent::new(DiffConfig::default());
    component.set_current_instance(Some(parse_instance()));
    component.set_modified_attributes(Some(
        serde_json::from_str(r#"{"2": {"attribute_value": "2018-05-01T22:00:00"}}"#).unwrap(),
    ));

    assert!(component.handle_event(&DiffEvent::Inserted));
    let first = component.diff().to_vec();
    assert_eq!(first, vec![DiffRow::new("Due date", "05/01/2018", "05/01/2018")]);

    assert!(component.handle_event(&DiffEvent::RefreshProposalDiff(InstanceKey::new("Risk", 42))));
    assert_eq!(component.diff(), first.as_slice());
}

#[test]
fn test_report_counts_changed_rows() {
    let report = DiffReport::new(
        InstanceKey::new("Risk", 42),
        vec![
            DiffRow::new("A", "x", "y"),
            DiffRow::new("B", "same", "same"),
        ],
    );

    assert_eq!(report.version, "1.0.0");
    assert_eq!(report.changed_count(), 1);
}
