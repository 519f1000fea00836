//! # Catalog Crate
//!
//! This crate handles the film catalog's domain types and record sources.
//!
//! ## Main Components
//!
//! - **types**: FilmRecord and its normalization (polymorphic director
//!   field, tolerant year/date parsing)
//! - **source**: RecordSource trait plus HTTP, file and in-memory sources
//! - **error**: Error types for fetching
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{JsonFileSource, RecordSource};
//!
//! let source = JsonFileSource::new("data/movies.json");
//! let records = source.fetch_all().await?;
//!
//! println!("Catalog holds {} films", records.len());
//! ```

// Public modules
pub mod error;
pub mod source;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use source::{HttpSource, JsonFileSource, RecordSource, StaticSource};
pub use types::FilmRecord;
