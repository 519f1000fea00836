//! The search operation: filter, then sort.
//!
//! `search` is a pure function over an already-fetched collection. It never
//! touches the input and never fails: malformed optional fields only ever
//! exclude a record or place it at the end of the order.

use crate::filter::matches;
use crate::sort::compare;
use crate::spec::QuerySpec;
use catalog::FilmRecord;
use tracing::debug;

/// Run one search over the full collection.
///
/// Returns a new vector holding the matching records in the order selected
/// by `spec.sort`. The sort is stable, so records with equal keys keep
/// their source order and repeated searches over the same input yield
/// identical output.
pub fn search(records: &[FilmRecord], spec: &QuerySpec) -> Vec<FilmRecord> {
    let mut results: Vec<FilmRecord> = records
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect();

    results.sort_by(|a, b| compare(a, b, spec.sort));

    debug!(
        input = records.len(),
        output = results.len(),
        sort = ?spec.sort,
        "search complete"
    );
    results
}
