//! Tests for ordered check application

use super::super::check::Check;
use super::super::pipeline::run_checks;
use crate::app::services::csv_file::{CsvFile, RowErrorCode};

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}

fn full_sequence() -> Vec<Check> {
    vec![
        Check::NotEmpty,
        Check::MediaType {
            allowed: owned(&["text/csv"]),
        },
        Check::UniqueHeaders,
        Check::RequiredHeaders {
            required: owned(&["eventID", "eventDate"]),
        },
        Check::KnownHeaders {
            allowed: owned(&["eventID", "eventDate", "habitat"]),
        },
        Check::RequiredFields {
            columns: owned(&["eventID"]),
        },
    ]
}

#[test]
fn test_valid_file_passes_full_sequence() {
    let mut file = CsvFile::new(
        "event.csv",
        Some("text/csv".to_string()),
        b"eventID,eventDate\nevt-1,2024-05-01\ntrailer,row\n".to_vec(),
    );

    let state = run_checks(&mut file, &full_sequence());

    assert_eq!(state.file_name, "event.csv");
    assert!(state.is_valid());
}

#[test]
fn test_no_short_circuit_on_file_error() {
    // An empty buffer fails the first check, and the header and field checks
    // still run and report against the empty header set.
    let mut file = CsvFile::new("event.csv", Some("text/csv".to_string()), Vec::new());

    let state = run_checks(&mut file, &full_sequence());

    assert_eq!(state.file_errors, vec!["File is null or empty".to_string()]);
    assert_eq!(state.header_errors.len(), 2); // both required headers missing
    assert_eq!(state.row_errors.len(), 1); // required field pinned to row 2
}

#[test]
fn test_parse_errors_are_merged_into_state() {
    let mut file = CsvFile::new(
        "event.csv",
        Some("text/csv".to_string()),
        b"eventID,eventDate\nevt-1\nevt-2,2024-05-02\ntrailer,row\n".to_vec(),
    );

    let state = run_checks(&mut file, &full_sequence());

    let parse_errors: Vec<_> = state
        .row_errors
        .iter()
        .filter(|error| error.code == RowErrorCode::ParseError)
        .collect();
    assert_eq!(parse_errors.len(), 1);
    assert_eq!(parse_errors[0].row, 2);
}

#[test]
fn test_file_level_checks_never_parse() {
    // A descriptor slot is checked at file level only; merging parse errors
    // must not drag an XML buffer through the CSV parser.
    let mut file = CsvFile::new(
        "meta.xml",
        Some("application/xml".to_string()),
        b"<archive xmlns=\"http://rs.tdwg.org/dwc/text/\"/>\n".to_vec(),
    );
    let checks = vec![
        Check::NotEmpty,
        Check::MediaType {
            allowed: owned(&["application/xml", "text/xml"]),
        },
    ];

    let state = run_checks(&mut file, &checks);

    assert!(state.is_valid());
    assert!(!file.is_parsed());
}

#[test]
fn test_empty_check_sequence_yields_clean_state() {
    let mut file = CsvFile::new("event.csv", None, b"eventID\ntrailer\n".to_vec());

    let state = run_checks(&mut file, &[]);

    assert!(state.is_valid());
    assert_eq!(state.file_name, "event.csv");
}
