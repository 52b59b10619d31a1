use proposal_diff::commands::{execute_diff, validate_args, DiffArgs};
use proposal_diff::diff::DiffRow;
use proposal_diff::output::read_report;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INSTANCE: &str = r#"{
    "type": "Control",
    "id": 7,
    "custom_attribute_definitions": [
        {"id": 3, "title": "Checked", "attribute_type": "Checkbox"}
    ],
    "custom_attribute_values": [
        {"custom_attribute_id": 3, "attribute_value": "1"}
    ]
}"#;

const PROPOSAL: &str = r#"{"custom_attribute_values": {"3": {"attribute_value": false}}}"#;

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let instance = dir.join("instance.json");
    let proposal = dir.join("proposal.json");
    fs::write(&instance, INSTANCE).unwrap();
    fs::write(&proposal, PROPOSAL).unwrap();
    (instance, proposal)
}

#[test]
fn test_validate_args_valid() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());

    let args = DiffArgs {
        instance,
        proposal,
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_instance() {
    let dir = TempDir::new().unwrap();
    let (_, proposal) = write_inputs(dir.path());

    let args = DiffArgs {
        instance: dir.path().join("missing.json"),
        proposal,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_missing_config() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());

    let args = DiffArgs {
        instance,
        proposal,
        config: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_is_directory() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());

    let args = DiffArgs {
        instance,
        proposal,
        output: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_nothing_to_do() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());

    let args = DiffArgs {
        instance,
        proposal,
        print_summary: false,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_diff_writes_report() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());
    let output = dir.path().join("out/diff.json");

    let args = DiffArgs {
        instance,
        proposal,
        output: Some(output.clone()),
        print_summary: false,
        ..Default::default()
    };

    let report = execute_diff(args).unwrap();
    let loaded = read_report(&output).unwrap();

    assert_eq!(report.diff, vec![DiffRow::new("Checked", "✓", "—")]);
    assert_eq!(loaded.diff, report.diff);
    assert_eq!(loaded.instance.to_string(), "Control #7");
}

#[test]
fn test_execute_diff_config_and_override() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());
    let config = dir.path().join("proposal-diff.toml");
    fs::write(&config, "empty_value = \"(from file)\"\n").unwrap();

    let from_file = execute_diff(DiffArgs {
        instance: instance.clone(),
        proposal: proposal.clone(),
        config: Some(config.clone()),
        print_summary: false,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(from_file.diff[0].modified(), "(from file)");

    let overridden = execute_diff(DiffArgs {
        instance,
        proposal,
        config: Some(config),
        empty_value: Some("n/a".to_string()),
        print_summary: false,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(overridden.diff[0].modified(), "n/a");
}

#[test]
fn test_execute_diff_bad_proposal() {
    let dir = TempDir::new().unwrap();
    let (instance, proposal) = write_inputs(dir.path());
    fs::write(&proposal, "{ not json").unwrap();

    let result = execute_diff(DiffArgs {
        instance,
        proposal,
        print_summary: false,
        ..Default::default()
    });

    assert!(result.is_err());
}
