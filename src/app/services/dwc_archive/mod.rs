//! Darwin Core archive assembly and class-specific validation rules
//!
//! A Darwin Core archive is a bundle of class-specific CSV files plus an XML
//! descriptor. This module supplies:
//! - [`terms`] - The Darwin Core term tables each record class accepts
//! - [`classes`] - The closed set of archive classes, each carrying its rules
//! - [`archive`] - The five-slot archive bag and its validation entry point
//!
//! ## Usage
//!
//! ```rust
//! use dwca_validator::app::services::csv_file::CsvFile;
//! use dwca_validator::app::services::dwc_archive::{ArchiveClass, DwcArchive};
//!
//! let buffer = b"eventID,eventDate\nevt-1,2024-05-01\ntrailer,row\n".to_vec();
//! let event = CsvFile::new("event.csv", Some("text/csv".to_string()), buffer);
//!
//! let mut archive = DwcArchive::new();
//! archive.insert(ArchiveClass::Event, event);
//!
//! let states = archive.validate();
//! assert_eq!(states.len(), 1);
//! assert!(states[0].is_valid());
//! ```

pub mod archive;
pub mod classes;
pub mod terms;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use archive::DwcArchive;
pub use classes::{ArchiveClass, ClassRuleSet};
