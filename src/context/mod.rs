//! Downstream context generation.
//!
//! Turns a converted record into the enriched prompt text handed to a
//! GenAI agent for the migration feasibility study. Pure function over the
//! record; the exact text format is a consumer concern, not part of the
//! conversion contract.

use crate::mapper::ModernRecord;
use crate::utils::error::ContextError;

/// Generate the agent prompt context for a converted record
///
/// **Public** - downstream consumer hook
///
/// # Arguments
/// * `record` - a converted record
///
/// # Returns
/// The prompt text, one instruction block per record
///
/// # Errors
/// * `ContextError::Serialization` - payload could not be rendered as JSON
pub fn generate_context(record: &ModernRecord) -> Result<String, ContextError> {
    let payload = &record.payload;
    let payload_json = serde_json::to_string(payload)?;

    let status_word = if payload.is_active { "Active" } else { "Inactive" };

    Ok(format!(
        "### AI ARCHITECT INSTRUCTION ###\n\
         INPUT_DATA: {payload_json}\n\
         OBJECTIVE: Perform a cloud migration feasibility study for '{name}'.\n\
         REGION_CONTEXT: {region} (North Texas Hub).\n\
         TASK: Generate a retention strategy based on the status: {status_word}.",
        name = payload.full_name,
        region = payload.region,
    ))
}
