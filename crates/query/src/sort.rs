//! The comparator set: one ordering per SortKey.
//!
//! Placement rule for records whose sort key is absent or unparseable:
//! they sort last in every order, ascending or descending. Combined with a
//! stable sort this keeps repeated searches deterministic.

use crate::spec::SortKey;
use catalog::FilmRecord;
use std::cmp::Ordering;

/// Compare two records under the given sort key.
pub fn compare(a: &FilmRecord, b: &FilmRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::LatestUpdate => descending(a.update_date(), b.update_date()),
        SortKey::ProductionYear => descending(a.production_year(), b.production_year()),
        SortKey::Title => ascending(a.title_korean.as_deref(), b.title_korean.as_deref()),
        SortKey::ReleaseDate => ascending(a.release_date(), b.release_date()),
    }
}

/// Ascending order with missing keys last.
fn ascending<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending order, still with missing keys last.
fn descending<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
