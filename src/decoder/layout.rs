//! Field layout definitions for fixed-width records.
//!
//! A layout is the static description of where each field lives in a line:
//! character offset plus width. Layouts are validated at construction, so a
//! bad field table is rejected before any line is decoded.

use crate::utils::config::{
    FIELD_FULL_NAME, FIELD_ID, FIELD_ONBOARDING_DATE, FIELD_REGION, FIELD_STATUS,
};
use crate::utils::error::LayoutError;

/// A single named field within a fixed-width record
///
/// Offsets are character offsets, not byte offsets. Code page conversion
/// (EBCDIC to UTF-8) happens upstream, so a field may legitimately contain
/// multi-byte characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used as the key in the decoded mapping
    pub name: String,

    /// Character offset of the first character of the field
    pub start: usize,

    /// Field width in characters
    pub width: usize,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, start: usize, width: usize) -> Self {
        Self {
            name: name.into(),
            start,
            width,
        }
    }

    /// First character offset past the end of this field
    pub fn end(&self) -> usize {
        self.start + self.width
    }
}

/// A validated, ordered set of field specs
///
/// **Public** - constructed once at startup and shared read-only
///
/// Field order is preserved: the decoder visits fields in the order given
/// here, so truncation errors report the first affected field as listed.
/// Gaps between fields are allowed (filler columns are common in legacy
/// extracts); overlaps are not.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    fields: Vec<FieldSpec>,
}

impl RecordLayout {
    /// Build a layout from field specs, validating the field table
    ///
    /// # Errors
    /// * `LayoutError::EmptyLayout` - no fields given
    /// * `LayoutError::ZeroWidth` - a field with width 0
    /// * `LayoutError::Overlap` - two fields whose spans intersect
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, LayoutError> {
        if fields.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }

        for field in &fields {
            if field.width == 0 {
                return Err(LayoutError::ZeroWidth {
                    field: field.name.clone(),
                });
            }
        }

        // Overlap check is order-independent: sort a view by offset and
        // compare neighbours.
        let mut by_offset: Vec<&FieldSpec> = fields.iter().collect();
        by_offset.sort_by_key(|f| f.start);

        for pair in by_offset.windows(2) {
            if pair[1].start < pair[0].end() {
                return Err(LayoutError::Overlap {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }

        Ok(Self { fields })
    }

    /// The layout of the legacy user-master extract
    ///
    /// Record width is 50 characters; columns 35-38 are filler.
    pub fn user_master() -> Self {
        // Known-good field table, skips runtime validation
        Self {
            fields: vec![
                FieldSpec::new(FIELD_ID, 0, 6),
                FieldSpec::new(FIELD_FULL_NAME, 6, 20),
                FieldSpec::new(FIELD_REGION, 26, 9),
                FieldSpec::new(FIELD_ONBOARDING_DATE, 39, 8),
                FieldSpec::new(FIELD_STATUS, 47, 3),
            ],
        }
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Minimum line width (in characters) a line must have to cover every field
    pub fn min_line_width(&self) -> usize {
        self.fields.iter().map(FieldSpec::end).max().unwrap_or(0)
    }
}
