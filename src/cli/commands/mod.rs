//! Command implementations for the archive validator CLI
//!
//! This module contains the command execution logic, report rendering, and
//! summary statistics for the CLI interface. Each command is implemented in
//! its own module:
//! - `file`: validate a single archive class file
//! - `archive`: validate an extracted archive directory

pub mod archive;
pub mod file;
pub mod shared;

// Re-export the main types for easy access
pub use shared::ValidationSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the archive validator
pub fn run(args: Args) -> Result<ValidationSummary> {
    match args.command {
        Commands::File(file_args) => file::run_file(file_args),
        Commands::Archive(archive_args) => archive::run_archive(archive_args),
    }
}
