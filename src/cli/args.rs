//! Command-line argument definitions for the archive validator
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary validates either a single class file or a whole extracted archive
//! directory, and reports in human, JSON, or CSV form.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::dwc_archive::ArchiveClass;
use crate::config::ValidationConfig;

/// CLI arguments for the Darwin Core archive validator
///
/// Checks CSV files submitted as part of a Darwin Core archive for
/// structural, header, and field completeness problems, and reports every
/// problem found in a single pass.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dwca-validator",
    version,
    about = "Validate Darwin Core archive CSV submissions",
    long_about = "Validates CSV files submitted as part of a Darwin Core (DWC) archive. \
                  Each file is checked for structural integrity, header problems \
                  (duplicates, missing required headers, unknown headers), and per-row \
                  field completeness. All problems are reported together rather than \
                  one at a time."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the archive validator
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate a single archive class file
    File(FileArgs),
    /// Validate an extracted archive directory
    Archive(ArchiveArgs),
}

/// Arguments for the file command
#[derive(Debug, Clone, Parser)]
pub struct FileArgs {
    /// Path to the file to validate
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Archive class to validate against
    ///
    /// Detected from the file name (event.csv, occurrence.csv, ...) when not
    /// given explicitly.
    #[arg(
        short = 'c',
        long = "class",
        value_enum,
        value_name = "CLASS",
        help = "Archive class to validate against (detected from the file name if omitted)"
    )]
    pub class: Option<ClassArg>,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub output_format: OutputFormat,

    /// Skip the media-type check
    ///
    /// Useful when files arrive without a usable declared media type.
    #[arg(long = "skip-media-type-check", help = "Skip the media-type check")]
    pub skip_media_type_check: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and the final result
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

/// Arguments for the archive command
#[derive(Debug, Clone, Parser)]
pub struct ArchiveArgs {
    /// Path to the extracted archive directory
    #[arg(value_name = "DIR")]
    pub path: PathBuf,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report output format"
    )]
    pub output_format: OutputFormat,

    /// Skip the media-type check
    #[arg(long = "skip-media-type-check", help = "Skip the media-type check")]
    pub skip_media_type_check: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and the final result
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report
    Human,
    /// Machine-readable JSON report
    Json,
    /// One CSV line per problem
    Csv,
}

/// Archive class names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Event,
    Occurrence,
    MeasurementOrFact,
    ResourceRelationship,
    Meta,
}

impl From<ClassArg> for ArchiveClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Event => ArchiveClass::Event,
            ClassArg::Occurrence => ArchiveClass::Occurrence,
            ClassArg::MeasurementOrFact => ArchiveClass::MeasurementOrFact,
            ClassArg::ResourceRelationship => ArchiveClass::ResourceRelationship,
            ClassArg::Meta => ArchiveClass::Meta,
        }
    }
}

/// Map verbosity flags onto a tracing filter level
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl FileArgs {
    /// Build the validation configuration these flags describe
    pub fn to_config(&self) -> ValidationConfig {
        build_config(self.skip_media_type_check)
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ArchiveArgs {
    /// Build the validation configuration these flags describe
    pub fn to_config(&self) -> ValidationConfig {
        build_config(self.skip_media_type_check)
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn build_config(skip_media_type_check: bool) -> ValidationConfig {
    let config = ValidationConfig::default();
    if skip_media_type_check {
        config.without_media_type_check()
    } else {
        config
    }
}
