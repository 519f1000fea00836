//! Query parameters for one search invocation.
//!
//! A QuerySpec is built from whatever the caller's input surface looks
//! like, handed to the engine once, and discarded. Empty or unset fields
//! mean "no constraint".

use std::str::FromStr;

/// The user-supplied filter and sort parameters for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    /// Substring to match against the Korean title; empty = no constraint.
    pub title: String,
    /// Substring to match against any director name; trimmed before use,
    /// empty after trimming = no constraint.
    pub director: String,
    /// Inclusive lower bound on the production year.
    pub start_year: Option<i32>,
    /// Inclusive upper bound on the production year.
    pub end_year: Option<i32>,
    pub sort: SortKey,
}

/// The comparator applied to the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently updated records first (the default).
    #[default]
    LatestUpdate,
    /// Newest production year first.
    ProductionYear,
    /// Korean title, ascending.
    Title,
    /// Earliest release date first.
    ReleaseDate,
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts both kebab-case ("latest-update") and the wire's camelCase
    /// ("latestUpdate").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latest-update" | "latestupdate" => Ok(SortKey::LatestUpdate),
            "production-year" | "productionyear" => Ok(SortKey::ProductionYear),
            "title" => Ok(SortKey::Title),
            "release-date" | "releasedate" => Ok(SortKey::ReleaseDate),
            other => Err(format!(
                "unknown sort key '{other}' (expected latest-update, production-year, title or release-date)"
            )),
        }
    }
}
