//! JSON batch output writer.
//!
//! Writes converted records to JSON files with proper formatting.

use crate::mapper::ModernRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a batch of converted records to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `records` - converted records to write
/// * `output_path` - path to output JSON file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = ConversionReport::collect(bridge.convert_lines(lines));
/// write_records(&report.records, "records.json")?;
/// ```
pub fn write_records(
    records: &[ModernRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} records to: {}", records.len(), output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
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

    // Open file for writing
    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    let writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(writer, records).map_err(OutputError::SerializationFailed)?;

    info!(
        "Batch written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a batch of records from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Arguments
/// * `input_path` - path to JSON file
///
/// # Returns
/// Parsed records
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<ModernRecord>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading records from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let records: Vec<ModernRecord> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Batch loaded: {} records", records.len());

    Ok(records)
}
