//! Query engine and paginator for the film catalog.
//!
//! This crate provides:
//! - QuerySpec and SortKey for describing one search
//! - The filtering predicate and comparator set
//! - `search`, the pure filter-then-sort operation
//! - Pagination: windowing, page counts and the PageState cursor
//!
//! ## Architecture
//! One search runs in stages over an already-fetched collection:
//! 1. The predicate keeps records matching every active constraint
//! 2. The comparator for the chosen SortKey orders them (stable)
//! 3. The paginator slices the visible window out of the result
//!
//! ## Example Usage
//! ```ignore
//! use query::{search, window_of, page_count, QuerySpec, SortKey};
//!
//! let spec = QuerySpec {
//!     director: "봉준호".to_string(),
//!     sort: SortKey::ProductionYear,
//!     ..QuerySpec::default()
//! };
//!
//! let results = search(&records, &spec);
//! let window = window_of(&results, 0, 10);
//! let pages = page_count(results.len(), 10);
//! ```

pub mod engine;
pub mod filter;
pub mod page;
pub mod sort;
pub mod spec;

// Re-export main types
pub use engine::search;
pub use page::{PageState, page_count, window_of};
pub use spec::{QuerySpec, SortKey};
