//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Conversion engine name, embedded in record metadata
pub const ENGINE_NAME: &str = "LegacyBridge";

/// Conversion engine version, embedded in record metadata
pub const ENGINE_VERSION: &str = "1.0.0";

/// Default origin identifier for converted records
pub const DEFAULT_ORIGIN: &str = "Z_SERIES_MAINFRAME_DB2";

// Status sentinel: a record is active only when the status field matches
// this code exactly. Anything else (blank, garbled, lowercase) is inactive.
pub const ACTIVE_STATUS: &str = "ACT";

// Field names of the legacy user-master extract
pub const FIELD_ID: &str = "id";
pub const FIELD_FULL_NAME: &str = "full_name";
pub const FIELD_REGION: &str = "region";
pub const FIELD_ONBOARDING_DATE: &str = "onboarding_date";
pub const FIELD_STATUS: &str = "status";
