//! Shared components for CLI commands
//!
//! Common summary statistics, logging setup, progress reporting, and report
//! rendering used by both commands.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::app::models::ValidationReport;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};

/// Row problems shown per file in the human report before truncating
const MAX_DISPLAYED_ROW_ERRORS: usize = 20;

/// Summary statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    /// Number of files checked
    pub files_checked: usize,
    /// Number of files that passed every check
    pub files_valid: usize,
    /// Total problems found across all files
    pub errors_found: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl ValidationSummary {
    /// Build a summary from a finished report
    pub fn from_report(report: &ValidationReport, processing_time: Duration) -> Self {
        Self {
            files_checked: report.files.len(),
            files_valid: report.files.iter().filter(|file| file.is_valid).count(),
            errors_found: report.error_count(),
            processing_time,
        }
    }

    /// True when every checked file passed
    pub fn all_valid(&self) -> bool {
        self.files_valid == self.files_checked
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dwca_validator={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create the spinner shown while an archive is being validated
pub fn progress_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render a finished report in the requested format
pub fn render_report(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => render_human_report(report),
        OutputFormat::Json => render_json_report(report),
        OutputFormat::Csv => render_csv_report(report),
    }
}

/// Render a colored per-file report for terminals
fn render_human_report(report: &ValidationReport) -> Result<()> {
    for file in &report.files {
        if file.is_valid {
            println!("{} {}", "PASS".green().bold(), file.file_name);
            continue;
        }

        println!(
            "{} {} ({} problems)",
            "FAIL".red().bold(),
            file.file_name,
            file.error_count()
        );

        for message in &file.file_errors {
            println!("  file: {}", message);
        }
        for error in &file.header_errors {
            println!("  header [{}]: {}", error.col, error.message);
        }
        for error in file.row_errors.iter().take(MAX_DISPLAYED_ROW_ERRORS) {
            println!("  row {}: {}", error.row, error.message);
        }
        if file.row_errors.len() > MAX_DISPLAYED_ROW_ERRORS {
            println!(
                "  ... and {} more row problems",
                file.row_errors.len() - MAX_DISPLAYED_ROW_ERRORS
            );
        }
    }

    println!();
    if report.is_valid() {
        println!("{}", "All files passed validation".green());
    } else {
        let failed = report.files.iter().filter(|file| !file.is_valid).count();
        println!(
            "{}",
            format!(
                "{} of {} files failed validation ({} problems)",
                failed,
                report.files.len(),
                report.error_count()
            )
            .red()
        );
    }

    Ok(())
}

/// Render the report as pretty-printed JSON
fn render_json_report(report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::report_serialization("Failed to serialize report", e))?;
    println!("{}", json);
    Ok(())
}

/// Render the report as one CSV line per problem
fn render_csv_report(report: &ValidationReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());

    writer
        .write_record(["file", "level", "code", "col", "row", "message"])
        .map_err(csv_write_error)?;

    for file in &report.files {
        for message in &file.file_errors {
            writer
                .write_record([
                    file.file_name.clone(),
                    "file".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    message.clone(),
                ])
                .map_err(csv_write_error)?;
        }
        for error in &file.header_errors {
            writer
                .write_record([
                    file.file_name.clone(),
                    "header".to_string(),
                    format!("{:?}", error.code),
                    error.col.to_string(),
                    String::new(),
                    error.message.clone(),
                ])
                .map_err(csv_write_error)?;
        }
        for error in &file.row_errors {
            writer
                .write_record([
                    file.file_name.clone(),
                    "row".to_string(),
                    format!("{:?}", error.code),
                    error.col.clone(),
                    error.row.to_string(),
                    error.message.clone(),
                ])
                .map_err(csv_write_error)?;
        }
    }

    writer.flush().map_err(|e| Error::io("Failed to flush CSV report", e))?;
    Ok(())
}

fn csv_write_error(error: csv::Error) -> Error {
    Error::io("Failed to write CSV report", std::io::Error::other(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::csv_file::CsvState;

    #[test]
    fn test_summary_from_report() {
        let mut failing = CsvState::new("event.csv");
        failing.add_file_error("File is null or empty");
        let passing = CsvState::new("occurrence.csv");

        let report = ValidationReport::from_states(vec![failing, passing]);
        let summary = ValidationSummary::from_report(&report, Duration::from_millis(5));

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_valid, 1);
        assert_eq!(summary.errors_found, 1);
        assert!(!summary.all_valid());
    }

    #[test]
    fn test_empty_summary_is_all_valid() {
        let summary = ValidationSummary::default();
        assert!(summary.all_valid());
    }
}
