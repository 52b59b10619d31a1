//! JSON input readers and report writer.

use super::validate_path;
use crate::diff::DiffReport;
use crate::model::{CurrentInstance, Proposal};
use crate::utils::error::{InputError, OutputError};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a diff report to a JSON file
///
/// Parent directories are created as needed.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &DiffReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing diff report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    write_report_to(report, BufWriter::new(file))?;

    info!("Diff report written ({} rows)", report.diff.len());

    Ok(())
}

/// Serialize a diff report as pretty JSON into `writer`
///
/// The writer is flushed before returning, so buffered write errors
/// surface as `OutputError::WriteFailed`.
pub fn write_report_to<W: Write>(report: &DiffReport, mut writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;
    Ok(())
}

/// Read a diff report back from a JSON file
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DiffReport, InputError> {
    let report: DiffReport = read_json(input_path.as_ref())?;

    debug!(
        "Report loaded: version {}, {} rows",
        report.version,
        report.diff.len()
    );

    Ok(report)
}

/// Read the instance under review from a JSON file
pub fn read_instance(input_path: impl AsRef<Path>) -> Result<CurrentInstance, InputError> {
    let instance: CurrentInstance = read_json(input_path.as_ref())?;

    debug!(
        "Instance loaded: {} ({} definitions, {} values)",
        instance.key(),
        instance.custom_attribute_definitions.len(),
        instance.custom_attribute_values.len()
    );

    Ok(instance)
}

/// Read proposal content from a JSON file
pub fn read_proposal(input_path: impl AsRef<Path>) -> Result<Proposal, InputError> {
    let proposal: Proposal = read_json(input_path.as_ref())?;

    debug!(
        "Proposal loaded: {} modified attributes",
        proposal.custom_attribute_values.len()
    );

    Ok(proposal)
}

fn read_json<T: DeserializeOwned>(input_path: &Path) -> Result<T, InputError> {
    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffRow;
    use crate::model::InstanceKey;
    use tempfile::NamedTempFile;

    fn create_test_report() -> DiffReport {
        DiffReport::new(
            InstanceKey::new("Risk", 42),
            vec![DiffRow::new("Reviewed", "✓", "—")],
        )
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&report, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.instance, report.instance);
        assert_eq!(loaded.diff, report.diff);
    }

    #[test]
    fn test_report_uses_camel_case_rows() {
        let temp_file = NamedTempFile::new().unwrap();
        write_report(&create_test_report(), temp_file.path()).unwrap();

        let raw = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(raw.contains("\"attrName\""));
        assert!(raw.contains("\"currentVal\""));
        assert!(raw.contains("\"modifiedVal\""));
    }

    /// Accepts nothing; every write fails like a full disk would
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_buffered_write_error_is_reported() {
        // small report stays in the buffer until the final flush
        let writer = BufWriter::new(FullDisk);
        let result = write_report_to(&create_test_report(), writer);

        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/diff.json");

        write_report(&create_test_report(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_report(&create_test_report(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_read_instance_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"type\": \"Risk\"").unwrap();

        assert!(matches!(
            read_instance(file.path()),
            Err(InputError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_proposal("/definitely/not/here.json"),
            Err(InputError::ReadFailed(_))
        ));
    }
}
