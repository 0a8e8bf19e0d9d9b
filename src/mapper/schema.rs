//! Output JSON schema definitions for converted records.
//!
//! This module defines the structure of the modernized records we hand to
//! downstream consumers. Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level modernized record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModernRecord {
    /// Provenance and generation metadata
    pub metadata: RecordMetadata,

    /// Converted business payload
    pub payload: UserPayload,
}

/// Provenance metadata attached to every converted record
///
/// Describes where the record came from and which engine converted it;
/// nothing here is derived from the input line itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Source system identifier (e.g., "Z_SERIES_MAINFRAME_DB2")
    pub origin: String,

    /// Converting engine name and version
    pub engine_version: String,

    /// RFC 3339 timestamp of when the record was converted
    pub generated_at: String,
}

/// The converted user payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// Legacy user identifier
    pub id: String,

    /// Full name, trimmed of padding
    pub full_name: String,

    /// Region code
    pub region: String,

    /// Onboarding date in the extract's native YYYYMMDD form
    pub onboarding_date: String,

    /// True only when the legacy status code matched the active sentinel
    pub is_active: bool,
}
