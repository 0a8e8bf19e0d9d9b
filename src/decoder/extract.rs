//! Fixed-width field extraction.
//!
//! Pulls each field of a layout out of a raw line, trims surrounding
//! whitespace, and returns the values keyed by field name. A line that is
//! too short for any field fails outright: the decoder never substitutes an
//! empty or shortened value for a span it cannot read.

use crate::decoder::layout::RecordLayout;
use crate::utils::error::DecodeError;
use log::debug;
use std::collections::HashMap;

/// Decoded field values keyed by field name, whitespace-trimmed
///
/// Transient: produced by [`decode_line`] and consumed by a single mapping
/// call.
pub type DecodedFields = HashMap<String, String>;

/// Decode a raw fixed-width line against a layout
///
/// **Public** - main entry point for field extraction
///
/// # Arguments
/// * `raw_line` - the raw line; may be longer than the layout requires
/// * `layout` - validated field layout
///
/// # Returns
/// Mapping from field name to trimmed value
///
/// # Errors
/// * `DecodeError::TruncatedInput` - the line is shorter than a field's
///   span. The reported field is the first affected one in layout order.
pub fn decode_line(
    raw_line: &str,
    layout: &RecordLayout,
) -> Result<DecodedFields, DecodeError> {
    let mut fields = HashMap::with_capacity(layout.fields().len());

    for spec in layout.fields() {
        let value = match char_span(raw_line, spec.start, spec.width) {
            Some(span) => span.trim(),
            None => {
                return Err(DecodeError::TruncatedInput {
                    field: spec.name.clone(),
                    needed: spec.end(),
                    actual: raw_line.chars().count(),
                });
            }
        };
        fields.insert(spec.name.clone(), value.to_string());
    }

    debug!(
        "Decoded {} fields from {}-character line",
        fields.len(),
        raw_line.chars().count()
    );

    Ok(fields)
}

/// Extract the character span `[start, start + width)` from a line
///
/// **Private** - internal slicing helper
///
/// Returns None when the line holds fewer than `start + width` characters.
/// Offsets count characters, not bytes, so lines containing multi-byte
/// characters slice at the intended columns. Layout validation guarantees
/// `width >= 1`.
fn char_span(line: &str, start: usize, width: usize) -> Option<&str> {
    let mut offsets = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .skip(start);

    let begin = offsets.next()?;
    let end = offsets.nth(width - 1)?;
    // begin == line.len() means the span starts past the end of the line;
    // the nth() above has already returned None in that case.
    Some(&line[begin..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::layout::FieldSpec;

    fn two_field_layout() -> RecordLayout {
        RecordLayout::new(vec![
            FieldSpec::new("code", 0, 4),
            FieldSpec::new("label", 4, 8),
        ])
        .unwrap()
    }

    #[test]
    fn test_decode_trims_both_ends() {
        let fields = decode_line("AB    WIDGET ", &two_field_layout()).unwrap();
        assert_eq!(fields["code"], "AB");
        assert_eq!(fields["label"], "WIDGET");
    }

    #[test]
    fn test_decode_tolerates_longer_line() {
        let fields = decode_line("CODELABEL   trailing junk", &two_field_layout()).unwrap();
        assert_eq!(fields["code"], "CODE");
        assert_eq!(fields["label"], "LABEL");
    }

    #[test]
    fn test_decode_exact_width_line() {
        let fields = decode_line("CODELABEL   ", &two_field_layout()).unwrap();
        assert_eq!(fields["label"], "LABEL");
    }

    #[test]
    fn test_truncated_line_fails_with_field_name() {
        let err = decode_line("CODELAB", &two_field_layout()).unwrap_err();
        match err {
            DecodeError::TruncatedInput {
                field,
                needed,
                actual,
            } => {
                assert_eq!(field, "label");
                assert_eq!(needed, 12);
                assert_eq!(actual, 7);
            }
        }
    }

    #[test]
    fn test_empty_line_fails_on_first_field() {
        let err = decode_line("", &two_field_layout()).unwrap_err();
        match err {
            DecodeError::TruncatedInput { field, .. } => assert_eq!(field, "code"),
        }
    }

    #[test]
    fn test_blank_field_decodes_to_empty_string() {
        let fields = decode_line("    LABEL   ", &two_field_layout()).unwrap();
        assert_eq!(fields["code"], "");
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        // 'É' and 'Ö' are two bytes each in UTF-8
        let layout = RecordLayout::new(vec![
            FieldSpec::new("a", 0, 2),
            FieldSpec::new("b", 2, 2),
        ])
        .unwrap();
        let fields = decode_line("ÉXÖY", &layout).unwrap();
        assert_eq!(fields["a"], "ÉX");
        assert_eq!(fields["b"], "ÖY");
    }

    #[test]
    fn test_char_span_at_line_end() {
        assert_eq!(char_span("ABC", 0, 3), Some("ABC"));
        assert_eq!(char_span("ABC", 2, 1), Some("C"));
        assert_eq!(char_span("ABC", 0, 4), None);
        assert_eq!(char_span("ABC", 3, 1), None);
    }
}
