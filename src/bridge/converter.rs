//! Line-by-line conversion of legacy extracts.
//!
//! A `Bridge` owns the validated layout and the provenance configuration
//! and turns raw lines into modernized records. Conversion is lazy and
//! error-isolated: each line yields its own result, and one malformed line
//! never aborts the rest of the stream.

use crate::decoder::{decode_line, RecordLayout};
use crate::mapper::{map_record, ModernRecord, Provenance};
use crate::utils::error::BridgeError;

/// Converter from fixed-width lines to modernized records
///
/// **Public** - main library entry point
///
/// Immutable after construction; decoding and mapping are pure aside from
/// reading the clock, so a `Bridge` can be shared across threads without
/// locking.
#[derive(Debug, Clone)]
pub struct Bridge {
    layout: RecordLayout,
    provenance: Provenance,
}

impl Bridge {
    /// Create a bridge from a validated layout and provenance configuration
    pub fn new(layout: RecordLayout, provenance: Provenance) -> Self {
        Self { layout, provenance }
    }

    /// Bridge for the legacy user-master extract with default provenance
    pub fn user_master() -> Self {
        Self::new(RecordLayout::user_master(), Provenance::default())
    }

    /// The layout this bridge decodes against
    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Convert a single raw line
    ///
    /// # Errors
    /// * `BridgeError::Decode` - the line is too short for the layout
    /// * `BridgeError::Mapping` - the layout lacks a required field
    pub fn convert_line(&self, raw_line: &str) -> Result<ModernRecord, BridgeError> {
        let fields = decode_line(raw_line, &self.layout)?;
        let record = map_record(&fields, &self.provenance)?;
        Ok(record)
    }

    /// Convert a sequence of raw lines lazily
    ///
    /// **Public** - orchestration entry point
    ///
    /// Yields one result per input line, in order. Failures are isolated
    /// per record; the caller decides whether to skip, collect, or abort.
    /// The returned iterator borrows the bridge and performs no work until
    /// consumed.
    pub fn convert_lines<'a, I, S>(
        &'a self,
        lines: I,
    ) -> impl Iterator<Item = Result<ModernRecord, BridgeError>> + 'a
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(move |line| self.convert_line(line.as_ref()))
    }
}
