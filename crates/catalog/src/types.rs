//! Core domain types for the film catalog.
//!
//! This module defines the FilmRecord struct that the rest of the system
//! operates on. Records arrive as JSON objects from the record source and
//! are normalized once here; everything downstream (matching, sorting,
//! display) works on the normalized shape.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One cataloged film, as returned by the record source.
///
/// Every descriptive field is optional: the upstream catalog joins several
/// tables and routinely leaves holes. A record is immutable once fetched;
/// the engine only ever produces new filtered/sorted views of it.
///
/// The `directors` field is polymorphic on the wire (a single name, a list
/// of names, or absent) and is normalized to a list at deserialization time
/// so matching and display never branch on shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRecord {
    #[serde(default)]
    pub title_korean: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    /// Normalized director names. Empty when the wire value is absent,
    /// null, or has an unexpected shape.
    #[serde(default, alias = "director", deserialize_with = "deserialize_directors")]
    pub directors: Vec<String>,
    /// Year as the catalog stores it. May be non-numeric; use
    /// [`FilmRecord::production_year`] for comparisons.
    #[serde(default)]
    pub production_year: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
    #[serde(default)]
    pub production_country: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub production_status: Option<String>,
    #[serde(default)]
    pub production_company: Option<String>,
}

impl FilmRecord {
    /// Parse the production year as an integer.
    ///
    /// Returns `None` when the field is absent or not a number
    /// ("unknown", "미상", ...). Callers decide what a missing year means;
    /// this helper never fails.
    pub fn production_year(&self) -> Option<i32> {
        self.production_year
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }

    /// Parse the update date, `None` when absent or unparseable.
    pub fn update_date(&self) -> Option<NaiveDate> {
        self.update_date.as_deref().and_then(parse_iso_date)
    }

    /// Parse the release date, `None` when absent or unparseable.
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(parse_iso_date)
    }

    /// Director names joined for display, empty string when none.
    pub fn directors_display(&self) -> String {
        self.directors.join(", ")
    }
}

/// Parse an ISO-ish date string as emitted by the record source.
///
/// Accepts full RFC 3339 timestamps (what MySQL DATE columns become after
/// JSON serialization) as well as plain `YYYY-MM-DD`, with or without a
/// trailing time component.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Normalize the polymorphic director field.
///
/// The wire value may be a string, an array of strings, null, or missing
/// entirely. Anything else is a malformed record: it normalizes to the
/// empty list rather than failing the whole fetch, so the record still
/// displays with an empty director column.
fn deserialize_directors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(normalize_directors(value))
}

fn normalize_directors(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(name)) => vec![name],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(json: &str) -> FilmRecord {
        serde_json::from_str(json).expect("record should deserialize")
    }

    #[test]
    fn test_single_director_string() {
        let record = record_from(r#"{"titleKorean": "기생충", "director": "봉준호"}"#);
        assert_eq!(record.directors, vec!["봉준호"]);
    }

    #[test]
    fn test_director_list() {
        let record = record_from(
            r#"{"titleKorean": "기생충", "directors": ["Bong Joon-ho", "Han Jin-won"]}"#,
        );
        assert_eq!(record.directors.len(), 2);
        assert_eq!(record.directors_display(), "Bong Joon-ho, Han Jin-won");
    }

    #[test]
    fn test_absent_and_null_directors() {
        let absent = record_from(r#"{"titleKorean": "살인의 추억"}"#);
        assert!(absent.directors.is_empty());

        let null = record_from(r#"{"titleKorean": "살인의 추억", "directors": null}"#);
        assert!(null.directors.is_empty());
    }

    #[test]
    fn test_malformed_directors_shape_is_tolerated() {
        // A number is neither a string nor a list; the record still loads.
        let record = record_from(r#"{"titleKorean": "옥자", "directors": 42}"#);
        assert!(record.directors.is_empty());

        // Non-string entries inside a list are dropped, not fatal.
        let mixed = record_from(r#"{"titleKorean": "옥자", "directors": ["봉준호", 7]}"#);
        assert_eq!(mixed.directors, vec!["봉준호"]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record = record_from(r#"{"titleKorean": "괴물", "boxOffice": 13019740}"#);
        assert_eq!(record.title_korean.as_deref(), Some("괴물"));
    }

    #[test]
    fn test_production_year_parsing() {
        let numeric = record_from(r#"{"productionYear": "2019"}"#);
        assert_eq!(numeric.production_year(), Some(2019));

        let padded = record_from(r#"{"productionYear": " 2019 "}"#);
        assert_eq!(padded.production_year(), Some(2019));

        let unknown = record_from(r#"{"productionYear": "unknown"}"#);
        assert_eq!(unknown.production_year(), None);

        let absent = record_from(r#"{}"#);
        assert_eq!(absent.production_year(), None);
    }

    #[test]
    fn test_date_parsing() {
        let plain = record_from(r#"{"updateDate": "2023-05-05"}"#);
        assert_eq!(
            plain.update_date(),
            NaiveDate::from_ymd_opt(2023, 5, 5)
        );

        let rfc3339 = record_from(r#"{"releaseDate": "2019-05-30T00:00:00.000Z"}"#);
        assert_eq!(
            rfc3339.release_date(),
            NaiveDate::from_ymd_opt(2019, 5, 30)
        );

        let garbage = record_from(r#"{"updateDate": "soon"}"#);
        assert_eq!(garbage.update_date(), None);
    }
}
