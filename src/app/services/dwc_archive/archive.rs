//! The five-slot archive bag and its validation entry point
//!
//! A [`DwcArchive`] holds whatever class files the upload layer managed to
//! assemble. Validation walks the populated slots in fixed order and returns
//! one state per populated slot; reporting slots that were never supplied is
//! the caller's concern, not this layer's.

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::classes::ArchiveClass;
use crate::app::services::checks::run_checks;
use crate::app::services::csv_file::{CsvFile, CsvState};
use crate::config::ValidationConfig;
use crate::{Error, Result};

/// A Darwin Core archive assembled from an upload
///
/// Up to five optional class files. Slots share no state: each file carries
/// its own buffer and its own validation outcome.
#[derive(Debug, Clone, Default)]
pub struct DwcArchive {
    pub event: Option<CsvFile>,
    pub occurrence: Option<CsvFile>,
    pub measurement_or_fact: Option<CsvFile>,
    pub resource_relationship: Option<CsvFile>,
    pub meta: Option<CsvFile>,
}

impl DwcArchive {
    /// Create an archive with every slot unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an archive from an extracted directory
    ///
    /// Files are classified by name; files matching no class are skipped with
    /// a warning. Fails only when the directory itself cannot be read.
    pub fn from_dir(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let mut archive = Self::new();

        for entry in WalkDir::new(path).min_depth(1).max_depth(2) {
            let entry = entry.map_err(|e| {
                Error::directory_traversal(
                    format!("Failed to read archive directory {}", path.display()),
                    e,
                )
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            match ArchiveClass::from_path(entry.path()) {
                Some(class) => {
                    debug!("Classified {} as {}", entry.path().display(), class);
                    archive.insert(class, CsvFile::from_path(entry.path())?);
                }
                None => {
                    warn!(
                        "Skipping unrecognized archive member: {}",
                        entry.path().display()
                    );
                }
            }
        }

        Ok(archive)
    }

    /// Place a file into its class slot, replacing any previous occupant
    pub fn insert(&mut self, class: ArchiveClass, file: CsvFile) {
        *self.slot_mut_ref(class) = Some(file);
    }

    /// Borrow the file in a class slot
    pub fn slot(&self, class: ArchiveClass) -> Option<&CsvFile> {
        match class {
            ArchiveClass::Event => self.event.as_ref(),
            ArchiveClass::Occurrence => self.occurrence.as_ref(),
            ArchiveClass::MeasurementOrFact => self.measurement_or_fact.as_ref(),
            ArchiveClass::ResourceRelationship => self.resource_relationship.as_ref(),
            ArchiveClass::Meta => self.meta.as_ref(),
        }
    }

    /// True when no slot holds a file
    pub fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }

    /// The classes whose slots hold a file, in validation order
    pub fn populated(&self) -> Vec<ArchiveClass> {
        ArchiveClass::ALL
            .into_iter()
            .filter(|class| self.slot(*class).is_some())
            .collect()
    }

    /// Validate every populated slot with default configuration
    pub fn validate(&mut self) -> Vec<CsvState> {
        self.validate_with(&ValidationConfig::default())
    }

    /// Validate every populated slot
    ///
    /// Each populated slot runs its class's full check sequence; unset slots
    /// are skipped without comment. Returns one state per populated slot, in
    /// fixed slot order.
    pub fn validate_with(&mut self, config: &ValidationConfig) -> Vec<CsvState> {
        let mut states = Vec::new();

        for class in ArchiveClass::ALL {
            let checks = class.checks_with(config);
            if let Some(file) = self.slot_mut_ref(class).as_mut() {
                states.push(run_checks(file, &checks));
            }
        }

        let invalid = states.iter().filter(|state| !state.is_valid()).count();
        info!(
            "Validated archive: {} slots checked, {} invalid",
            states.len(),
            invalid
        );

        states
    }

    fn slot_mut_ref(&mut self, class: ArchiveClass) -> &mut Option<CsvFile> {
        match class {
            ArchiveClass::Event => &mut self.event,
            ArchiveClass::Occurrence => &mut self.occurrence,
            ArchiveClass::MeasurementOrFact => &mut self.measurement_or_fact,
            ArchiveClass::ResourceRelationship => &mut self.resource_relationship,
            ArchiveClass::Meta => &mut self.meta,
        }
    }
}
