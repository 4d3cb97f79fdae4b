//! Tests for the individual checks

use super::super::check::Check;
use crate::app::services::csv_file::{
    CsvFile, CsvState, HeaderErrorCode, HeaderErrorType, RowErrorCode,
};

fn csv_file(content: &str) -> CsvFile {
    CsvFile::new(
        "event.csv",
        Some("text/csv".to_string()),
        content.as_bytes().to_vec(),
    )
}

fn apply(check: Check, file: &mut CsvFile) -> CsvState {
    let state = CsvState::new(file.file_name());
    check.apply(file, state)
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}

#[test]
fn test_not_empty_rejects_empty_buffer() {
    let mut file = csv_file("");
    let state = apply(Check::NotEmpty, &mut file);

    assert!(!state.is_valid());
    assert_eq!(state.file_errors, vec!["File is null or empty".to_string()]);
}

#[test]
fn test_not_empty_accepts_content() {
    let mut file = csv_file("eventID\n");
    let state = apply(Check::NotEmpty, &mut file);

    assert!(state.is_valid());
}

#[test]
fn test_media_type_allow_list() {
    let allowed = owned(&["text/csv", "application/vnd.ms-excel"]);

    let mut file = csv_file("eventID\n");
    let state = apply(Check::MediaType { allowed: allowed.clone() }, &mut file);
    assert!(state.is_valid());

    let mut file = CsvFile::new(
        "event.pdf",
        Some("application/pdf".to_string()),
        b"eventID\n".to_vec(),
    );
    let state = apply(Check::MediaType { allowed: allowed.clone() }, &mut file);
    assert_eq!(state.file_errors.len(), 1);
    assert!(state.file_errors[0].contains("application/pdf"));

    let mut file = CsvFile::new("event.csv", None, b"eventID\n".to_vec());
    let state = apply(Check::MediaType { allowed }, &mut file);
    assert_eq!(state.file_errors.len(), 1);
}

#[test]
fn test_media_type_comparison_is_case_insensitive() {
    let mut file = CsvFile::new(
        "event.csv",
        Some("Text/CSV".to_string()),
        b"eventID\n".to_vec(),
    );
    let state = apply(
        Check::MediaType {
            allowed: owned(&["text/csv"]),
        },
        &mut file,
    );

    assert!(state.is_valid());
}

#[test]
fn test_empty_media_type_list_disables_check() {
    let mut file = CsvFile::new(
        "event.pdf",
        Some("application/pdf".to_string()),
        b"eventID\n".to_vec(),
    );
    let state = apply(Check::MediaType { allowed: vec![] }, &mut file);

    assert!(state.is_valid());
}

#[test]
fn test_duplicate_headers_one_error_per_repeat() {
    // k occurrences of the same header produce k-1 errors.
    let mut file = csv_file("eventID,eventID,eventID,eventDate\ntrailer,row,x,y\n");
    let state = apply(Check::UniqueHeaders, &mut file);

    assert_eq!(state.header_errors.len(), 2);
    for error in &state.header_errors {
        assert_eq!(error.error_type, HeaderErrorType::Invalid);
        assert_eq!(error.code, HeaderErrorCode::DuplicateHeader);
        assert_eq!(error.col.to_string(), "eventID");
    }
}

#[test]
fn test_unique_headers_pass() {
    let mut file = csv_file("eventID,eventDate\ntrailer,row\n");
    let state = apply(Check::UniqueHeaders, &mut file);

    assert!(state.is_valid());
}

#[test]
fn test_required_headers_count_matches_missing_set() {
    let mut file = csv_file("eventID,habitat\ntrailer,row\n");
    let state = apply(
        Check::RequiredHeaders {
            required: owned(&["eventID", "eventDate", "samplingProtocol"]),
        },
        &mut file,
    );

    // |required - parsed| = 2
    assert_eq!(state.header_errors.len(), 2);
    let missing: Vec<String> = state
        .header_errors
        .iter()
        .map(|error| error.col.to_string())
        .collect();
    assert_eq!(missing, vec!["eventDate", "samplingProtocol"]);
    for error in &state.header_errors {
        assert_eq!(error.error_type, HeaderErrorType::Missing);
        assert_eq!(error.code, HeaderErrorCode::MissingRequiredHeader);
    }
}

#[test]
fn test_required_headers_with_no_headers_at_all() {
    let mut file = csv_file("");
    let state = apply(
        Check::RequiredHeaders {
            required: owned(&["eventID", "eventDate"]),
        },
        &mut file,
    );

    assert_eq!(state.header_errors.len(), 2);
}

#[test]
fn test_known_headers_flags_each_unknown_occurrence() {
    let mut file = csv_file("eventID,foo,bar\ntrailer,row,x\n");
    let state = apply(
        Check::KnownHeaders {
            allowed: owned(&["eventID", "eventDate"]),
        },
        &mut file,
    );

    assert_eq!(state.header_errors.len(), 2);
    for error in &state.header_errors {
        assert_eq!(error.code, HeaderErrorCode::UnknownHeader);
    }
}

#[test]
fn test_empty_known_headers_list_disables_check() {
    let mut file = csv_file("anything,goes,here\ntrailer,row,x\n");
    let state = apply(Check::KnownHeaders { allowed: vec![] }, &mut file);

    assert!(state.is_valid());
}

#[test]
fn test_required_fields_flag_empty_cells() {
    // Three physical data rows; the final one is withheld by the parser.
    let mut file = csv_file("eventID,eventDate\nevt-1,2024-05-01\n,2024-05-02\ntrailer,row\n");
    let state = apply(
        Check::RequiredFields {
            columns: owned(&["eventID"]),
        },
        &mut file,
    );

    assert_eq!(state.row_errors.len(), 1);
    assert_eq!(state.row_errors[0].code, RowErrorCode::MissingRequiredField);
    assert_eq!(state.row_errors[0].col, "eventID");
    assert_eq!(state.row_errors[0].row, 3);
}

#[test]
fn test_required_fields_with_zero_rows_pin_row_two() {
    let mut file = csv_file("eventID,eventDate\n");
    assert!(file.rows().is_empty());

    let state = apply(
        Check::RequiredFields {
            columns: owned(&["eventID", "eventDate", "samplingProtocol"]),
        },
        &mut file,
    );

    // Exactly one error per required column, each pinned to row 2.
    assert_eq!(state.row_errors.len(), 3);
    for error in &state.row_errors {
        assert_eq!(error.row, 2);
        assert_eq!(error.code, RowErrorCode::MissingRequiredField);
    }
}

#[test]
fn test_required_fields_for_absent_column_flag_every_row() {
    let mut file = csv_file("eventDate\n2024-05-01\n2024-05-02\ntrailer\n");
    let state = apply(
        Check::RequiredFields {
            columns: owned(&["eventID"]),
        },
        &mut file,
    );

    assert_eq!(state.row_errors.len(), 2);
    assert_eq!(state.row_errors[0].row, 2);
    assert_eq!(state.row_errors[1].row, 3);
}

#[test]
fn test_required_fields_whitespace_is_a_value() {
    // Only zero-length cells count as missing.
    let mut file = csv_file("eventID,eventDate\n ,2024-05-01\ntrailer,row\n");
    let state = apply(
        Check::RequiredFields {
            columns: owned(&["eventID"]),
        },
        &mut file,
    );

    assert!(state.is_valid());
}
