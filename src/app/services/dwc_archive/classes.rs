//! The closed set of archive record classes
//!
//! Each class variant carries its own rule tables, so adding a class means
//! adding a variant and its tables rather than growing a dispatch site. The
//! descriptor slot (`Meta`) is XML and carries no tabular rules: it is
//! checked at file level only.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::terms;
use crate::app::services::checks::Check;
use crate::config::ValidationConfig;
use crate::constants::{CSV_MEDIA_TYPES, META_MEDIA_TYPES};

/// Record classes a Darwin Core archive can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchiveClass {
    Event,
    Occurrence,
    MeasurementOrFact,
    ResourceRelationship,
    Meta,
}

/// Header and field rule tables for one tabular record class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRuleSet {
    /// Headers a file of this class must have
    pub required_headers: &'static [&'static str],

    /// Headers a file of this class may have
    pub known_headers: &'static [&'static str],

    /// Columns that must hold a value on every data row
    pub required_fields: &'static [&'static str],
}

const EVENT_RULES: ClassRuleSet = ClassRuleSet {
    required_headers: terms::EVENT_REQUIRED_HEADERS,
    known_headers: terms::EVENT_KNOWN_HEADERS,
    required_fields: terms::EVENT_REQUIRED_FIELDS,
};

const OCCURRENCE_RULES: ClassRuleSet = ClassRuleSet {
    required_headers: terms::OCCURRENCE_REQUIRED_HEADERS,
    known_headers: terms::OCCURRENCE_KNOWN_HEADERS,
    required_fields: terms::OCCURRENCE_REQUIRED_FIELDS,
};

const MEASUREMENT_OR_FACT_RULES: ClassRuleSet = ClassRuleSet {
    required_headers: terms::MEASUREMENT_OR_FACT_REQUIRED_HEADERS,
    known_headers: terms::MEASUREMENT_OR_FACT_KNOWN_HEADERS,
    required_fields: terms::MEASUREMENT_OR_FACT_REQUIRED_FIELDS,
};

const RESOURCE_RELATIONSHIP_RULES: ClassRuleSet = ClassRuleSet {
    required_headers: terms::RESOURCE_RELATIONSHIP_REQUIRED_HEADERS,
    known_headers: terms::RESOURCE_RELATIONSHIP_KNOWN_HEADERS,
    required_fields: terms::RESOURCE_RELATIONSHIP_REQUIRED_FIELDS,
};

impl ArchiveClass {
    /// All classes, in the order archive slots are validated
    pub const ALL: [ArchiveClass; 5] = [
        ArchiveClass::Event,
        ArchiveClass::Occurrence,
        ArchiveClass::MeasurementOrFact,
        ArchiveClass::ResourceRelationship,
        ArchiveClass::Meta,
    ];

    /// Canonical file stem used for this class inside an archive
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveClass::Event => "event",
            ArchiveClass::Occurrence => "occurrence",
            ArchiveClass::MeasurementOrFact => "measurementorfact",
            ArchiveClass::ResourceRelationship => "resourcerelationship",
            ArchiveClass::Meta => "meta",
        }
    }

    /// Detect the archive class from a file name
    ///
    /// Archives name their members after the record class (`event.csv`,
    /// `occurrence.txt`, `meta.xml`); separators and case vary by producer.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_string_lossy();
        let normalized: String = stem
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|class| class.label() == normalized)
    }

    /// Rule tables for this class; `None` for the non-tabular descriptor
    pub fn rule_set(&self) -> Option<&'static ClassRuleSet> {
        match self {
            ArchiveClass::Event => Some(&EVENT_RULES),
            ArchiveClass::Occurrence => Some(&OCCURRENCE_RULES),
            ArchiveClass::MeasurementOrFact => Some(&MEASUREMENT_OR_FACT_RULES),
            ArchiveClass::ResourceRelationship => Some(&RESOURCE_RELATIONSHIP_RULES),
            ArchiveClass::Meta => None,
        }
    }

    /// Media types accepted for files of this class
    pub fn media_types(&self) -> &'static [&'static str] {
        match self {
            ArchiveClass::Meta => META_MEDIA_TYPES,
            _ => CSV_MEDIA_TYPES,
        }
    }

    /// Assemble the check sequence for this class with default configuration
    pub fn checks(&self) -> Vec<Check> {
        self.checks_with(&ValidationConfig::default())
    }

    /// Assemble the check sequence for this class
    ///
    /// Tabular classes get the full sequence: not-empty, media type,
    /// duplicate headers, required headers, known headers, required fields.
    /// The descriptor gets the file-level checks only.
    pub fn checks_with(&self, config: &ValidationConfig) -> Vec<Check> {
        let media_types = if config.skip_media_type_check {
            Vec::new()
        } else {
            match self {
                ArchiveClass::Meta => config.meta_media_types.clone(),
                _ => config.csv_media_types.clone(),
            }
        };

        let mut checks = vec![Check::NotEmpty, Check::MediaType {
            allowed: media_types,
        }];

        if let Some(rules) = self.rule_set() {
            checks.push(Check::UniqueHeaders);
            checks.push(Check::RequiredHeaders {
                required: to_owned(rules.required_headers),
            });
            checks.push(Check::KnownHeaders {
                allowed: to_owned(rules.known_headers),
            });
            checks.push(Check::RequiredFields {
                columns: to_owned(rules.required_fields),
            });
        }

        checks
    }
}

impl fmt::Display for ArchiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn to_owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|term| term.to_string()).collect()
}
