//! Validation state accumulated for a single CSV file
//!
//! One [`CsvState`] belongs to one file. Checks append to its error
//! collections; nothing is ever removed. A file is valid exactly when all
//! three collections are empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column reference carried by a header error
///
/// Header problems are usually reported against the offending header name,
/// but a position is used where no name exists to point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Name(String),
    Index(usize),
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name(name) => write!(f, "{}", name),
            ColumnRef::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

/// Whether a header problem is an invalid header or a missing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderErrorType {
    Invalid,
    Missing,
}

/// Specific header error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderErrorCode {
    DuplicateHeader,
    UnknownHeader,
    MissingRequiredHeader,
}

/// A problem detected in the header row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderError {
    pub error_type: HeaderErrorType,
    pub code: HeaderErrorCode,
    pub message: String,
    pub col: ColumnRef,
}

/// Specific row error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowErrorCode {
    /// The parser could not read the record
    ParseError,
    /// A required column holds no value on this row
    MissingRequiredField,
}

/// A problem detected in a data row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    pub code: RowErrorCode,
    pub message: String,
    pub col: String,
    /// 1-based row number counting the header row, so the first data row is 2
    pub row: usize,
}

/// Accumulated validation outcome for one CSV file
///
/// Checks only ever append to the three error collections; the state for a
/// file lives for the duration of one validation pass and is then read out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvState {
    /// Name of the file this state belongs to
    pub file_name: String,

    /// File-level problems (empty buffer, disallowed media type)
    pub file_errors: Vec<String>,

    /// Header-level problems (duplicate, missing-required, unknown)
    pub header_errors: Vec<HeaderError>,

    /// Row-level problems (parser errors, missing required fields)
    pub row_errors: Vec<RowError>,
}

impl CsvState {
    /// Create an empty state for the named file
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// True when no check has recorded any problem
    pub fn is_valid(&self) -> bool {
        self.file_errors.is_empty() && self.header_errors.is_empty() && self.row_errors.is_empty()
    }

    /// Total number of problems across all three collections
    pub fn error_count(&self) -> usize {
        self.file_errors.len() + self.header_errors.len() + self.row_errors.len()
    }

    /// Record a file-level problem
    pub fn add_file_error(&mut self, message: impl Into<String>) {
        self.file_errors.push(message.into());
    }

    /// Record a header-level problem
    pub fn add_header_error(&mut self, error: HeaderError) {
        self.header_errors.push(error);
    }

    /// Record a row-level problem
    pub fn add_row_error(&mut self, error: RowError) {
        self.row_errors.push(error);
    }

    /// Record a batch of row-level problems
    pub fn add_row_errors(&mut self, errors: impl IntoIterator<Item = RowError>) {
        self.row_errors.extend(errors);
    }
}
