//! Record mapping and schema definitions.
//!
//! This module handles:
//! - Defining the modernized output schema
//! - Copying decoded fields into the payload
//! - Deriving the activity flag from the legacy status code
//! - Stamping provenance metadata and generation time

pub mod schema;
pub mod transform;

// Re-export main types
pub use schema::{ModernRecord, RecordMetadata, UserPayload};
pub use transform::{map_record, Provenance};
