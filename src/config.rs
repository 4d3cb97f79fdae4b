//! Configuration management and validation.
//!
//! Provides the configuration structure governing how archive submissions
//! are checked, with validation of the media-type allow-lists supplied by
//! callers or CLI flags.

use crate::constants::{CSV_MEDIA_TYPES, META_MEDIA_TYPES};
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern a media-type allow-list entry must match (`type/subtype`)
const MEDIA_TYPE_PATTERN: &str = r"^[a-z0-9][a-z0-9!#$&^_.+-]*/[a-z0-9][a-z0-9!#$&^_.+-]*$";

/// Global configuration for archive validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Media types accepted for tabular class files
    pub csv_media_types: Vec<String>,

    /// Media types accepted for the archive descriptor
    pub meta_media_types: Vec<String>,

    /// Disable the media-type check entirely
    ///
    /// An empty allow-list already disables the check for a single file; this
    /// switch disables it for every slot regardless of the lists above.
    pub skip_media_type_check: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            csv_media_types: CSV_MEDIA_TYPES.iter().map(|s| s.to_string()).collect(),
            meta_media_types: META_MEDIA_TYPES.iter().map(|s| s.to_string()).collect(),
            skip_media_type_check: false,
        }
    }
}

impl ValidationConfig {
    /// Create configuration with a custom CSV media-type allow-list
    pub fn with_csv_media_types(mut self, media_types: Vec<String>) -> Self {
        self.csv_media_types = media_types;
        self
    }

    /// Create configuration with a custom descriptor media-type allow-list
    pub fn with_meta_media_types(mut self, media_types: Vec<String>) -> Self {
        self.meta_media_types = media_types;
        self
    }

    /// Disable the media-type check for every slot
    pub fn without_media_type_check(mut self) -> Self {
        self.skip_media_type_check = true;
        self
    }

    /// Validate the configuration itself
    ///
    /// Rejects allow-list entries that are not well-formed `type/subtype`
    /// media types, before they silently fail every comparison downstream.
    pub fn validate(&self) -> Result<()> {
        let pattern = Regex::new(MEDIA_TYPE_PATTERN)
            .map_err(|e| Error::configuration(format!("Invalid media type pattern: {}", e)))?;

        for media_type in self.csv_media_types.iter().chain(&self.meta_media_types) {
            if !pattern.is_match(&media_type.to_ascii_lowercase()) {
                return Err(Error::configuration(format!(
                    "Invalid media type in allow-list: '{}'",
                    media_type
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ValidationConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.skip_media_type_check);
        assert!(config.csv_media_types.contains(&"text/csv".to_string()));
    }

    #[test]
    fn test_builder_methods() {
        let config = ValidationConfig::default()
            .with_csv_media_types(vec!["text/csv".to_string()])
            .without_media_type_check();

        assert_eq!(config.csv_media_types, vec!["text/csv".to_string()]);
        assert!(config.skip_media_type_check);
    }

    #[test]
    fn test_malformed_media_type_rejected() {
        let config =
            ValidationConfig::default().with_csv_media_types(vec!["not a media type".to_string()]);
        assert!(config.validate().is_err());

        let config = ValidationConfig::default().with_csv_media_types(vec!["csv".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_uppercase_media_type_accepted() {
        let config =
            ValidationConfig::default().with_csv_media_types(vec!["Text/CSV".to_string()]);
        assert!(config.validate().is_ok());
    }
}
