use legacy_bridge::bridge::{Bridge, ConversionReport};
use legacy_bridge::context::generate_context;
use legacy_bridge::output::{read_records, write_records};
use legacy_bridge::source::sample_stream;
use legacy_bridge::utils::error::{BridgeError, DecodeError};
use pretty_assertions::assert_eq;

const ACTIVE_LINE: &str = "USR001CLAUDIO DE PAULO       TEXAS     20251231ACT";
const INACTIVE_LINE: &str = "USR001CLAUDIO DE PAULO       TEXAS     20251231INA";

#[test]
fn test_end_to_end_active_record() {
    let record = Bridge::user_master().convert_line(ACTIVE_LINE).unwrap();

    assert_eq!(record.payload.id, "USR001");
    assert_eq!(record.payload.full_name, "CLAUDIO DE PAULO");
    assert_eq!(record.payload.region, "TEXAS");
    assert_eq!(record.payload.onboarding_date, "20251231");
    assert!(record.payload.is_active);

    assert_eq!(record.metadata.origin, "Z_SERIES_MAINFRAME_DB2");
    assert_eq!(record.metadata.engine_version, "LegacyBridge_v1.0.0");
}

#[test]
fn test_end_to_end_inactive_record() {
    let record = Bridge::user_master().convert_line(INACTIVE_LINE).unwrap();

    // Only the activity flag differs from the active case
    assert_eq!(record.payload.id, "USR001");
    assert_eq!(record.payload.full_name, "CLAUDIO DE PAULO");
    assert_eq!(record.payload.region, "TEXAS");
    assert_eq!(record.payload.onboarding_date, "20251231");
    assert!(!record.payload.is_active);
}

#[test]
fn test_end_to_end_truncated_line() {
    let truncated: String = ACTIVE_LINE.chars().take(30).collect();
    let err = Bridge::user_master().convert_line(&truncated).unwrap_err();

    match err {
        BridgeError::Decode(DecodeError::TruncatedInput { field, needed, actual }) => {
            assert_eq!(field, "region");
            assert_eq!(needed, 35);
            assert_eq!(actual, 30);
        }
        other => panic!("Expected TruncatedInput, got {:?}", other),
    }
}

#[test]
fn test_sequence_isolates_failures() {
    let bridge = Bridge::user_master();
    let lines = vec![
        ACTIVE_LINE.to_string(),
        "GARBLED".to_string(),
        INACTIVE_LINE.to_string(),
    ];

    let report = ConversionReport::collect(bridge.convert_lines(lines.iter()));

    assert_eq!(report.converted(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.records[0].payload.id, "USR001");
    assert!(!report.records[1].payload.is_active);
    assert_eq!(report.failures[0].0, 1);
}

#[test]
fn test_sample_stream_converts_completely() {
    let bridge = Bridge::user_master();
    let report = ConversionReport::collect(bridge.convert_lines(sample_stream()));

    assert_eq!(report.converted(), 4);
    assert_eq!(report.failed(), 0);

    let ids: Vec<&str> = report.records.iter().map(|r| r.payload.id.as_str()).collect();
    assert_eq!(ids, vec!["USR001", "USR002", "USR003", "USR004"]);

    let active: Vec<bool> = report.records.iter().map(|r| r.payload.is_active).collect();
    assert_eq!(active, vec![true, false, true, true]);

    assert_eq!(report.records[3].payload.full_name, "FORT WORTH LOGISTICS");
    assert_eq!(report.records[3].payload.region, "DFW");
}

#[test]
fn test_timestamps_non_decreasing_across_sequence() {
    let bridge = Bridge::user_master();
    let report = ConversionReport::collect(bridge.convert_lines(sample_stream()));

    let stamps: Vec<chrono::DateTime<chrono::FixedOffset>> = report
        .records
        .iter()
        .map(|r| chrono::DateTime::parse_from_rfc3339(&r.metadata.generated_at).unwrap())
        .collect();

    for pair in stamps.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_converted_batch_roundtrips_through_json() {
    let bridge = Bridge::user_master();
    let report = ConversionReport::collect(bridge.convert_lines(sample_stream()));

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("records.json");

    write_records(&report.records, &path).unwrap();
    let loaded = read_records(&path).unwrap();

    assert_eq!(loaded.len(), report.records.len());
    for (loaded, original) in loaded.iter().zip(&report.records) {
        assert_eq!(loaded.payload, original.payload);
        assert_eq!(loaded.metadata, original.metadata);
    }
}

#[test]
fn test_context_generation_for_converted_record() {
    let record = Bridge::user_master().convert_line(ACTIVE_LINE).unwrap();
    let context = generate_context(&record).unwrap();

    assert!(context.contains("INPUT_DATA:"));
    assert!(context.contains("CLAUDIO DE PAULO"));
    assert!(context.contains("TEXAS"));
    assert!(context.contains("Active"));
}
