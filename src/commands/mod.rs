//! CLI command implementations.

pub mod convert;

// Re-export main types
pub use convert::{execute_convert, validate_args, ConvertArgs};
