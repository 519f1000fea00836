//! Browser crate for the film catalog search engine.
//!
//! This crate contains the state container that composes the record
//! source, the query engine and the paginator into the caller-facing
//! search/reset/page operations.

pub mod state;

pub use state::CatalogBrowser;
