//! Fixed-width record decoding.
//!
//! This module handles:
//! - Field layout definition and validation
//! - Character-offset field extraction with trimming
//! - Fail-fast handling of truncated lines

pub mod extract;
pub mod layout;

// Re-export main types
pub use extract::{decode_line, DecodedFields};
pub use layout::{FieldSpec, RecordLayout};
