//! Raw line acquisition.
//!
//! The conversion core accepts any ordered sequence of strings; this module
//! provides the two sources the CLI ships with: a plain text file reader
//! and the built-in sample extract used for demos and smoke tests.

use crate::utils::error::SourceError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Read raw lines from a text file
///
/// **Public** - file-based line source
///
/// Empty lines are dropped; trailing newlines are not part of any record.
///
/// # Errors
/// * `SourceError::ReadFailed` - file could not be opened or read
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    debug!("Reading raw lines from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!("Read {} raw lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// The built-in sample extract: four user-master records
///
/// **Public** - demo line source
///
/// Matches the layout of `RecordLayout::user_master` (50-column records,
/// filler in columns 35-38).
pub fn sample_stream() -> Vec<String> {
    vec![
        "USR001CLAUDIO DE PAULO       TEXAS     20251231ACT".to_string(),
        "USR002JOHN DOE            DALLAS       20251215INA".to_string(),
        "USR003SARAH CONNOR        AUSTIN       20251120ACT".to_string(),
        "USR004FORT WORTH LOGISTICSDFW          20260110ACT".to_string(),
    ]
}
