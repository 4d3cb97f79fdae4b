//! CSV file wrapper and validation state for archive submissions
//!
//! This module owns the two leaf types of the validation engine:
//! - [`file`] - Lazy, memoizing CSV parsing over a raw upload buffer
//! - [`state`] - Per-file accumulation of file, header, and row errors
//!
//! ## Usage
//!
//! ```rust
//! use dwca_validator::app::services::csv_file::CsvFile;
//!
//! let buffer = b"eventID,eventDate\nevt-1,2024-05-01\ntrailer,row\n".to_vec();
//! let mut file = CsvFile::new("event.csv", Some("text/csv".to_string()), buffer);
//!
//! assert_eq!(file.headers(), ["eventID", "eventDate"]);
//! ```

pub mod file;
pub mod state;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use file::{CsvFile, ParseOptions};
pub use state::{ColumnRef, CsvState, HeaderError, HeaderErrorCode, HeaderErrorType, RowError,
                RowErrorCode};
