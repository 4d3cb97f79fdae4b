//! Archive command implementation
//!
//! Assembles an archive from an extracted directory, validates every
//! populated slot, and renders the combined report.

use std::time::Instant;

use tracing::info;

use super::shared::{ValidationSummary, progress_spinner, render_report, setup_logging};
use crate::app::models::ValidationReport;
use crate::app::services::dwc_archive::DwcArchive;
use crate::cli::args::{ArchiveArgs, OutputFormat};
use crate::{Error, Result};

/// Validate an extracted archive directory and render its report
pub fn run_archive(args: ArchiveArgs) -> Result<ValidationSummary> {
    let start = Instant::now();
    setup_logging(args.get_log_level())?;

    let config = args.to_config();
    config.validate()?;

    info!("Assembling archive from {}", args.path.display());
    let mut archive = DwcArchive::from_dir(&args.path)?;

    if archive.is_empty() {
        return Err(Error::empty_archive(args.path.display().to_string()));
    }

    // The spinner would corrupt piped JSON/CSV output, so it only runs for
    // the terminal report.
    let spinner = (args.output_format == OutputFormat::Human && !args.quiet)
        .then(|| progress_spinner("Validating archive files..."));

    let states = archive.validate_with(&config);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = ValidationReport::from_states(states);
    render_report(&report, args.output_format)?;

    Ok(ValidationSummary::from_report(&report, start.elapsed()))
}
