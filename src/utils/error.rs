//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while constructing a record layout
///
/// These are configuration errors: a layout that fails construction is a
/// defect in the caller's field table, not in any input line.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout has no fields")]
    EmptyLayout,

    #[error("Field '{field}' has zero width")]
    ZeroWidth { field: String },

    #[error("Fields '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },
}

/// Errors that can occur while decoding a fixed-width line
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Line too short for field '{field}': needs {needed} characters, got {actual}")]
    TruncatedInput {
        field: String,
        needed: usize,
        actual: usize,
    },
}

/// Errors that can occur while mapping decoded fields to the output schema
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors from the full decode-then-map conversion of a single line
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Errors that can occur during context generation
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while acquiring raw lines
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
