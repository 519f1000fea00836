//! The filtering predicate: which records a QuerySpec keeps.
//!
//! A record is included iff every active constraint matches; a constraint
//! left empty or unset always passes. Malformed optional fields only ever
//! cause exclusion, never an error.

use crate::spec::QuerySpec;
use catalog::FilmRecord;

/// Returns true when `record` satisfies every constraint in `spec`.
pub fn matches(record: &FilmRecord, spec: &QuerySpec) -> bool {
    title_matches(record, &spec.title)
        && director_matches(record, &spec.director)
        && year_within(record, spec.start_year, spec.end_year)
}

/// Case-insensitive substring match against the Korean title.
///
/// A record without a Korean title fails whenever a title query is given;
/// it is never silently skipped.
fn title_matches(record: &FilmRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    match record.title_korean.as_deref() {
        Some(title) => contains_ignore_case(title, query),
        None => false,
    }
}

/// Case-insensitive substring match against any director name.
///
/// The query is trimmed first. Records with no directors (absent or
/// malformed on the wire, both normalize to an empty list) are excluded
/// when a director query is active.
fn director_matches(record: &FilmRecord, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    record
        .directors
        .iter()
        .any(|name| contains_ignore_case(name, query))
}

/// Inclusive production-year range check.
///
/// Bounds only apply when the year parses to an integer: a record with an
/// absent or unparseable year passes active bounds, mirroring the
/// reference catalog's behavior. See the explicit test below.
fn year_within(record: &FilmRecord, start: Option<i32>, end: Option<i32>) -> bool {
    let Some(year) = record.production_year() else {
        return true;
    };
    if start.is_some_and(|bound| year < bound) {
        return false;
    }
    if end.is_some_and(|bound| year > bound) {
        return false;
    }
    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
