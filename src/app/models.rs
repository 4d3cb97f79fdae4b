//! Report structures for validation outcomes.
//!
//! Wraps the per-file validation states into serializable report records for
//! the JSON and CSV output surfaces, with the validity flag materialized and
//! a generation timestamp attached.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::services::csv_file::{CsvState, HeaderError, RowError};

/// Outcome of validating one file, with validity materialized
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub is_valid: bool,
    pub file_errors: Vec<String>,
    pub header_errors: Vec<HeaderError>,
    pub row_errors: Vec<RowError>,
}

impl From<CsvState> for FileReport {
    fn from(state: CsvState) -> Self {
        let is_valid = state.is_valid();
        Self {
            file_name: state.file_name,
            is_valid,
            file_errors: state.file_errors,
            header_errors: state.header_errors,
            row_errors: state.row_errors,
        }
    }
}

impl FileReport {
    /// Total number of problems across all three collections
    pub fn error_count(&self) -> usize {
        self.file_errors.len() + self.header_errors.len() + self.row_errors.len()
    }
}

/// Outcome of validating one submission (a single file or a whole archive)
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// One entry per checked file, in validation order
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    /// Build a report from the accumulated per-file states
    pub fn from_states(states: Vec<CsvState>) -> Self {
        Self {
            generated_at: Utc::now(),
            files: states.into_iter().map(FileReport::from).collect(),
        }
    }

    /// True when every checked file passed
    pub fn is_valid(&self) -> bool {
        self.files.iter().all(|file| file.is_valid)
    }

    /// Total number of problems across all files
    pub fn error_count(&self) -> usize {
        self.files.iter().map(FileReport::error_count).sum()
    }
}
