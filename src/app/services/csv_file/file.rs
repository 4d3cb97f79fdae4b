//! Lazy CSV parsing over a raw upload buffer
//!
//! [`CsvFile`] wraps the byte buffer handed over by the upload layer together
//! with the file name and the declared media type. Parsing happens on first
//! header or row access and the result is memoized; supplying custom
//! [`ParseOptions`] forces a re-parse. Parser-level record errors are kept
//! alongside the parsed content so the pipeline can surface them.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use super::state::{RowError, RowErrorCode};
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_QUOTE, media_type_for_extension};
use crate::{Error, Result};

/// Options controlling how a raw buffer is split into records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field delimiter
    pub delimiter: u8,

    /// Quote character
    pub quote: u8,

    /// Trim whitespace around fields
    pub trim: bool,

    /// Accept records whose field count differs from the header row
    ///
    /// When false, ragged records are reported as row parse errors instead of
    /// being passed through.
    pub flexible: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            trim: false,
            flexible: false,
        }
    }
}

/// Memoized output of one parse run
#[derive(Debug, Clone)]
struct ParsedContent {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    parse_errors: Vec<RowError>,
}

/// A CSV file received from the upload layer
///
/// The buffer is owned; headers and rows are derived lazily. The header row
/// is the positional schema of every data row: column index `i` in each row
/// corresponds to `headers[i]`.
#[derive(Debug, Clone)]
pub struct CsvFile {
    file_name: String,
    media_type: Option<String>,
    buffer: Vec<u8>,
    parsed: Option<ParsedContent>,
}

impl CsvFile {
    /// Wrap an upload buffer with its name and declared media type
    pub fn new(
        file_name: impl Into<String>,
        media_type: Option<String>,
        buffer: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            buffer,
            parsed: None,
        }
    }

    /// Read a file from disk, deriving the media type from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let buffer = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let media_type = path
            .extension()
            .and_then(|ext| media_type_for_extension(&ext.to_string_lossy()))
            .map(|media_type| media_type.to_string());

        debug!(
            "Loaded {} ({} bytes, media type {:?})",
            file_name,
            buffer.len(),
            media_type
        );

        Ok(Self::new(file_name, media_type, buffer))
    }

    /// Name of the file as submitted
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Media type declared or sniffed by the upload layer
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Raw byte buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// True when the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True once header or row access has parsed the buffer
    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    /// Header row of the file
    ///
    /// Triggers a parse with default options on first access; subsequent
    /// calls return the memoized result.
    pub fn headers(&mut self) -> &[String] {
        self.ensure_parsed();
        match &self.parsed {
            Some(content) => &content.headers,
            None => &[],
        }
    }

    /// Data rows of the file
    ///
    /// Triggers a parse with default options on first access. The final
    /// physical record of the parsed output is withheld: callers never see
    /// the last row of the file through this accessor. Carried over from the
    /// source system's contract; see DESIGN.md.
    pub fn rows(&mut self) -> &[Vec<String>] {
        self.ensure_parsed();
        match &self.parsed {
            Some(content) => &content.rows,
            None => &[],
        }
    }

    /// Errors reported by the parser during the most recent parse
    ///
    /// Does not force a parse: before any header or row access this is empty.
    pub fn parse_errors(&self) -> &[RowError] {
        match &self.parsed {
            Some(content) => &content.parse_errors,
            None => &[],
        }
    }

    /// Re-parse the buffer with custom options, replacing the memoized result
    pub fn parse_with(&mut self, options: ParseOptions) {
        self.parsed = Some(Self::parse(&self.buffer, &self.file_name, &options));
    }

    fn ensure_parsed(&mut self) {
        if self.parsed.is_none() {
            self.parsed = Some(Self::parse(
                &self.buffer,
                &self.file_name,
                &ParseOptions::default(),
            ));
        }
    }

    /// Split the buffer into a header row and data rows
    ///
    /// Blank and whitespace-only lines are skipped. Records the parser
    /// rejects become row parse errors rather than aborting the run.
    fn parse(buffer: &[u8], file_name: &str, options: &ParseOptions) -> ParsedContent {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(options.delimiter)
            .quote(options.quote)
            .flexible(options.flexible)
            .trim(if options.trim { Trim::All } else { Trim::None })
            .from_reader(buffer);

        let mut records: Vec<Vec<String>> = Vec::new();
        let mut parse_errors = Vec::new();
        let mut line = 0usize;

        for result in reader.records() {
            line += 1;
            match result {
                Ok(record) => {
                    // A stray whitespace-only line parses as one empty field;
                    // a record of several empty fields is real data.
                    if record.len() <= 1
                        && record.iter().all(|field| field.trim().is_empty())
                    {
                        continue;
                    }
                    records.push(record.iter().map(|field| field.to_string()).collect());
                }
                Err(e) => {
                    let row = e
                        .position()
                        .map(|position| position.line() as usize)
                        .unwrap_or(line);
                    parse_errors.push(RowError {
                        code: RowErrorCode::ParseError,
                        message: format!("Unable to parse record: {}", e),
                        col: String::new(),
                        row,
                    });
                }
            }
        }

        let headers = if records.is_empty() {
            Vec::new()
        } else {
            records.remove(0)
        };

        // The final record is withheld from the row set.
        records.pop();

        debug!(
            "Parsed {}: {} headers, {} rows, {} parse errors",
            file_name,
            headers.len(),
            records.len(),
            parse_errors.len()
        );

        ParsedContent {
            headers,
            rows: records,
            parse_errors,
        }
    }
}
