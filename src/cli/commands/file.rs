//! File command implementation
//!
//! Validates a single archive class file against its class's rule tables and
//! renders the resulting report.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{ValidationSummary, render_report, setup_logging};
use crate::app::models::ValidationReport;
use crate::app::services::checks::run_checks;
use crate::app::services::csv_file::CsvFile;
use crate::app::services::dwc_archive::ArchiveClass;
use crate::cli::args::FileArgs;
use crate::{Error, Result};

/// Validate one file and render its report
pub fn run_file(args: FileArgs) -> Result<ValidationSummary> {
    let start = Instant::now();
    setup_logging(args.get_log_level())?;

    let config = args.to_config();
    config.validate()?;

    let mut file = CsvFile::from_path(&args.path)?;

    let class = match args.class {
        Some(class) => class.into(),
        None => ArchiveClass::from_path(&args.path)
            .ok_or_else(|| Error::unknown_archive_class(file.file_name()))?,
    };

    info!("Validating {} as {} class", file.file_name(), class);
    let checks = class.checks_with(&config);
    debug!("Running {} checks", checks.len());

    let state = run_checks(&mut file, &checks);
    let report = ValidationReport::from_states(vec![state]);

    render_report(&report, args.output_format)?;

    Ok(ValidationSummary::from_report(&report, start.elapsed()))
}
