//! Error types for the catalog crate.
//!
//! Every variant here means the record source could not deliver the
//! collection; individual malformed records are handled during
//! normalization and never surface as errors.

use thiserror::Error;

/// Errors raised while fetching the film collection.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error reading a local catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP record source was unreachable or answered with an error
    #[error("record source request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The payload was not a JSON array of film records
    #[error("malformed catalog payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
