//! Darwin Core Archive Validator
//!
//! A Rust library for validating CSV files submitted as part of a Darwin Core
//! (DWC) archive before the data is accepted into a biodiversity data system.
//!
//! This library provides tools for:
//! - Lazily parsing uploaded CSV buffers with memoized header/row access
//! - Running composable structural, header, and field completeness checks
//! - Accumulating a complete per-file diagnosis in a single pass
//! - Class-specific rule tables for the event, occurrence, measurement-or-fact
//!   and resource-relationship record classes
//! - Assembling and validating a full archive submission slot by slot
//!
//! Data-quality problems are never returned as errors: they are reported
//! through [`CsvState`] so a single submission surfaces every problem at once.
//! The [`Error`] type below is reserved for genuinely exceptional conditions
//! such as unreadable paths or invalid configuration.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod checks;
        pub mod csv_file;
        pub mod dwc_archive;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileReport, ValidationReport};
pub use app::services::checks::{Check, run_checks};
pub use app::services::csv_file::{CsvFile, CsvState, ParseOptions};
pub use app::services::dwc_archive::{ArchiveClass, DwcArchive};
pub use config::ValidationConfig;

/// Result type alias for the archive validator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for archive validation operations
///
/// These cover operational failures only. A file that fails its checks is a
/// normal outcome and is reported through [`CsvState`], not through this enum.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// A file name matched no known archive class
    #[error("Unknown archive class for file: {file_name}")]
    UnknownArchiveClass { file_name: String },

    /// An archive directory contained no class files
    #[error("No archive class files found in: {path}")]
    EmptyArchive { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create an unknown archive class error
    pub fn unknown_archive_class(file_name: impl Into<String>) -> Self {
        Self::UnknownArchiveClass {
            file_name: file_name.into(),
        }
    }

    /// Create an empty archive error
    pub fn empty_archive(path: impl Into<String>) -> Self {
        Self::EmptyArchive { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "Report serialization failed".to_string(),
            source: error,
        }
    }
}
