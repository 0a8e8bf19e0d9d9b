//! Mapping of decoded fields into the modernized schema.
//!
//! The mapper copies the trimmed fields into the payload, derives the
//! activity flag from the legacy status code, and stamps provenance plus
//! generation time. It returns either a complete record or an error -
//! never a partially filled record.

use crate::decoder::DecodedFields;
use crate::mapper::schema::{ModernRecord, RecordMetadata, UserPayload};
use crate::utils::config::{
    ACTIVE_STATUS, DEFAULT_ORIGIN, ENGINE_NAME, ENGINE_VERSION, FIELD_FULL_NAME, FIELD_ID,
    FIELD_ONBOARDING_DATE, FIELD_REGION, FIELD_STATUS,
};
use crate::utils::error::MappingError;
use chrono::Utc;
use log::debug;

/// Static provenance configuration, supplied once at startup
///
/// **Public** - shared read-only by every mapping call
#[derive(Debug, Clone)]
pub struct Provenance {
    /// Source system identifier
    pub origin: String,

    /// Converting engine name and version
    pub engine_version: String,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            engine_version: format!("{}_v{}", ENGINE_NAME, ENGINE_VERSION),
        }
    }
}

/// Map decoded fields into a modernized record
///
/// **Public** - main entry point for record mapping
///
/// # Arguments
/// * `fields` - decoded field mapping from the decoder
/// * `provenance` - static origin and engine identification
///
/// # Returns
/// A complete `ModernRecord` with metadata stamped at mapping time
///
/// # Errors
/// * `MappingError::MissingField` - a required field is absent from the
///   decoded mapping. Fields are checked in a fixed order (id, full_name,
///   region, onboarding_date, status), so the reported name is
///   deterministic.
pub fn map_record(
    fields: &DecodedFields,
    provenance: &Provenance,
) -> Result<ModernRecord, MappingError> {
    let payload = UserPayload {
        id: require(fields, FIELD_ID)?.to_string(),
        full_name: require(fields, FIELD_FULL_NAME)?.to_string(),
        region: require(fields, FIELD_REGION)?.to_string(),
        onboarding_date: require(fields, FIELD_ONBOARDING_DATE)?.to_string(),
        is_active: require(fields, FIELD_STATUS)? == ACTIVE_STATUS,
    };

    debug!("Mapped record {} (active: {})", payload.id, payload.is_active);

    Ok(ModernRecord {
        metadata: RecordMetadata {
            origin: provenance.origin.clone(),
            engine_version: provenance.engine_version.clone(),
            generated_at: Utc::now().to_rfc3339(),
        },
        payload,
    })
}

/// Look up a required field by name
///
/// **Private** - internal helper for map_record
fn require<'a>(fields: &'a DecodedFields, name: &str) -> Result<&'a str, MappingError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| MappingError::MissingField(name.to_string()))
}
