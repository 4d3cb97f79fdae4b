//! Ordered application of a check sequence to one file
//!
//! The runner folds the checks over an empty [`CsvState`], then merges any
//! record errors the parser reported while headers and rows were being read.
//! Order only matters in that later checks reuse the parse triggered by
//! earlier ones; every check appends to its own collection, so reordering
//! checks never changes the outcome.

use tracing::debug;

use super::super::csv_file::{CsvFile, CsvState};
use super::check::Check;

/// Run every check in sequence and return the accumulated state
///
/// There is no short-circuiting: a file that fails its first check is still
/// run through the rest so the caller gets the complete diagnosis at once.
/// Merging parser errors does not force a parse; a file no check ever parsed
/// (a descriptor checked only at file level) contributes none.
pub fn run_checks(file: &mut CsvFile, checks: &[Check]) -> CsvState {
    let initial = CsvState::new(file.file_name());

    let mut state = checks
        .iter()
        .fold(initial, |state, check| check.apply(file, state));

    state.add_row_errors(file.parse_errors().iter().cloned());

    debug!(
        "Checked {}: {} checks, {} errors",
        state.file_name,
        checks.len(),
        state.error_count()
    );

    state
}
