//! The closed set of checks a submitted file can be subjected to
//!
//! Each check reads the file (parsing it lazily where headers or rows are
//! needed), consumes the accumulated state, and returns it with any new
//! errors appended. Checks are independent: none looks at what another check
//! recorded, and none stops the sequence.

use std::collections::HashSet;

use super::super::csv_file::{
    ColumnRef, CsvFile, CsvState, HeaderError, HeaderErrorCode, HeaderErrorType, RowError,
    RowErrorCode,
};
use crate::constants::FIRST_DATA_ROW_NUMBER;

/// A single validation check
///
/// Allow-list driven checks treat an empty list as "check disabled" so rule
/// tables can opt out of a check without a separate switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Reject absent or zero-length buffers
    NotEmpty,

    /// Reject media types outside the allow-list; an empty list accepts all
    MediaType { allowed: Vec<String> },

    /// Flag every repeated occurrence of a header name
    UniqueHeaders,

    /// Every listed header must be present
    RequiredHeaders { required: Vec<String> },

    /// Every parsed header must appear in the allow-list; an empty list
    /// accepts all
    KnownHeaders { allowed: Vec<String> },

    /// Listed columns must hold a value on every data row
    RequiredFields { columns: Vec<String> },
}

impl Check {
    /// Apply this check to a file, appending any findings to the state
    pub fn apply(&self, file: &mut CsvFile, state: CsvState) -> CsvState {
        match self {
            Check::NotEmpty => check_not_empty(file, state),
            Check::MediaType { allowed } => check_media_type(file, allowed, state),
            Check::UniqueHeaders => check_unique_headers(file, state),
            Check::RequiredHeaders { required } => check_required_headers(file, required, state),
            Check::KnownHeaders { allowed } => check_known_headers(file, allowed, state),
            Check::RequiredFields { columns } => check_required_fields(file, columns, state),
        }
    }
}

fn check_not_empty(file: &CsvFile, mut state: CsvState) -> CsvState {
    if file.is_empty() {
        state.add_file_error("File is null or empty");
    }
    state
}

fn check_media_type(file: &CsvFile, allowed: &[String], mut state: CsvState) -> CsvState {
    if allowed.is_empty() {
        return state;
    }

    let matches = file
        .media_type()
        .map(|media_type| {
            allowed
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(media_type))
        })
        .unwrap_or(false);

    if !matches {
        state.add_file_error(format!(
            "File media type '{}' is not supported, must be one of: {}",
            file.media_type().unwrap_or("unknown"),
            allowed.join(", ")
        ));
    }
    state
}

fn check_unique_headers(file: &mut CsvFile, mut state: CsvState) -> CsvState {
    let mut seen: HashSet<&str> = HashSet::new();

    for header in file.headers() {
        if !seen.insert(header.as_str()) {
            state.add_header_error(HeaderError {
                error_type: HeaderErrorType::Invalid,
                code: HeaderErrorCode::DuplicateHeader,
                message: format!("Duplicate header: '{}'", header),
                col: ColumnRef::Name(header.clone()),
            });
        }
    }
    state
}

fn check_required_headers(file: &mut CsvFile, required: &[String], mut state: CsvState) -> CsvState {
    let headers = file.headers();

    for required_header in required {
        if !headers.iter().any(|header| header == required_header) {
            state.add_header_error(HeaderError {
                error_type: HeaderErrorType::Missing,
                code: HeaderErrorCode::MissingRequiredHeader,
                message: format!("Missing required header: '{}'", required_header),
                col: ColumnRef::Name(required_header.clone()),
            });
        }
    }
    state
}

fn check_known_headers(file: &mut CsvFile, allowed: &[String], mut state: CsvState) -> CsvState {
    if allowed.is_empty() {
        return state;
    }

    for header in file.headers() {
        if !allowed.iter().any(|candidate| candidate == header) {
            state.add_header_error(HeaderError {
                error_type: HeaderErrorType::Invalid,
                code: HeaderErrorCode::UnknownHeader,
                message: format!("Unsupported header: '{}'", header),
                col: ColumnRef::Name(header.clone()),
            });
        }
    }
    state
}

fn check_required_fields(file: &mut CsvFile, columns: &[String], mut state: CsvState) -> CsvState {
    let headers = file.headers().to_vec();
    let rows = file.rows();

    if rows.is_empty() {
        // No data rows at all: every required column is missing, pinned to
        // where the first data row would have been.
        for column in columns {
            state.add_row_error(missing_field_error(column, FIRST_DATA_ROW_NUMBER));
        }
        return state;
    }

    for column in columns {
        let index = headers.iter().position(|header| header == column);

        for (row_index, row) in rows.iter().enumerate() {
            let value = index.and_then(|index| row.get(index));
            if value.is_none_or(|value| value.is_empty()) {
                state.add_row_error(missing_field_error(
                    column,
                    row_index + FIRST_DATA_ROW_NUMBER,
                ));
            }
        }
    }
    state
}

fn missing_field_error(column: &str, row: usize) -> RowError {
    RowError {
        code: RowErrorCode::MissingRequiredField,
        message: format!("Missing required value for column: '{}'", column),
        col: column.to_string(),
        row,
    }
}
