//! # Catalog Browser
//!
//! The explicit state container over `(spec, results, page)`:
//! 1. Fetch the full collection from the record source
//! 2. Filter and sort it with the query engine
//! 3. Hand out one page window at a time
//!
//! Each operation is a well-defined transition; the engine and paginator
//! stay pure functions underneath. A failed fetch leaves the previous
//! results and page untouched, so the caller always has a usable
//! last-known-good view to render.

use anyhow::{Context, Result};
use catalog::{FilmRecord, RecordSource};
use query::{PageState, QuerySpec, page_count, search};
use tracing::{info, warn};

/// Owns the single `(results, page)` pair visible to the caller.
///
/// One consumer at a time: every transition takes `&mut self`, and the
/// only await point is the fetch. When two searches race at the caller's
/// level, the last one to complete its transition wins.
pub struct CatalogBrowser<S> {
    source: S,
    spec: QuerySpec,
    results: Vec<FilmRecord>,
    page: PageState,
}

impl<S: RecordSource> CatalogBrowser<S> {
    /// Create a browser with an empty result set on page 0.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            spec: QuerySpec::default(),
            results: Vec::new(),
            page: PageState::new(page_size),
        }
    }

    /// Run one search: re-fetch, filter, sort, reset to page 0.
    ///
    /// On fetch failure the previous `(spec, results, page)` survive
    /// unchanged and the error is surfaced to the caller.
    pub async fn search(&mut self, spec: QuerySpec) -> Result<&[FilmRecord]> {
        let records = self.fetch().await?;

        self.results = search(&records, &spec);
        self.spec = spec;
        self.page.go_to_first();

        info!(
            fetched = records.len(),
            matched = self.results.len(),
            pages = self.page_count(),
            "search applied"
        );
        Ok(self.window())
    }

    /// Clear the spec back to defaults and show the full collection.
    ///
    /// The collection is presented in record-source order; no sort is
    /// applied until the next search. Same last-known-good policy as
    /// [`CatalogBrowser::search`].
    pub async fn reset(&mut self) -> Result<&[FilmRecord]> {
        let records = self.fetch().await?;

        self.spec = QuerySpec::default();
        self.results = records;
        self.page.go_to_first();

        info!(total = self.results.len(), "browser reset");
        Ok(self.window())
    }

    /// Move to page `index` of the current results. Pure windowing, no
    /// re-fetch; an out-of-range index is a no-op.
    pub fn page(&mut self, index: usize) -> &[FilmRecord] {
        self.page.go_to(index, self.results.len());
        self.window()
    }

    /// Jump to the first page of the current results.
    pub fn first_page(&mut self) -> &[FilmRecord] {
        self.page.go_to_first();
        self.window()
    }

    /// Jump to the last page of the current results.
    pub fn last_page(&mut self) -> &[FilmRecord] {
        self.page.go_to_last(self.results.len());
        self.window()
    }

    /// The window of results for the current page.
    pub fn window(&self) -> &[FilmRecord] {
        self.page.window(&self.results)
    }

    /// All records matching the current spec, sorted.
    pub fn results(&self) -> &[FilmRecord] {
        &self.results
    }

    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    pub fn page_index(&self) -> usize {
        self.page.index()
    }

    pub fn page_size(&self) -> usize {
        self.page.size()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.results.len(), self.page.size())
    }

    async fn fetch(&self) -> Result<Vec<FilmRecord>> {
        match self.source.fetch_all().await {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(error = %err, "record source unavailable, keeping previous results");
                Err(err).context("failed to fetch the film collection")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog::StaticSource;
    use query::SortKey;

    fn fixture() -> Vec<FilmRecord> {
        let rows: Vec<String> = (0..23)
            .map(|i| {
                format!(
                    r#"{{"titleKorean": "영화 {i}",
                         "director": "{dir}",
                         "productionYear": "{year}",
                         "updateDate": "2023-01-{day:02}"}}"#,
                    dir = if i % 2 == 0 { "봉준호" } else { "박찬욱" },
                    year = 2000 + i,
                    day = i + 1,
                )
            })
            .collect();
        serde_json::from_str(&format!("[{}]", rows.join(","))).unwrap()
    }

    fn browser() -> CatalogBrowser<StaticSource> {
        CatalogBrowser::new(StaticSource::new(fixture()), 10)
    }

    /// Source that always fails, for last-known-good tests.
    struct BrokenSource;

    #[async_trait]
    impl RecordSource for BrokenSource {
        async fn fetch_all(&self) -> catalog::Result<Vec<FilmRecord>> {
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "down").into())
        }
    }

    /// Source that can be switched off mid-test.
    struct FlakySource {
        records: Vec<FilmRecord>,
        healthy: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl RecordSource for FlakySource {
        async fn fetch_all(&self) -> catalog::Result<Vec<FilmRecord>> {
            if self.healthy.load(std::sync::atomic::Ordering::SeqCst) {
                Ok(self.records.clone())
            } else {
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "down").into())
            }
        }
    }

    #[tokio::test]
    async fn test_reset_shows_full_collection() {
        let mut browser = browser();
        let window = browser.reset().await.unwrap();

        assert_eq!(window.len(), 10);
        assert_eq!(browser.results().len(), 23);
        assert_eq!(browser.page_count(), 3);
        assert_eq!(browser.page_index(), 0);
    }

    #[tokio::test]
    async fn test_search_filters_and_resets_page() {
        let mut browser = browser();
        browser.reset().await.unwrap();
        browser.page(2);
        assert_eq!(browser.page_index(), 2);

        let spec = QuerySpec {
            director: "봉준호".to_string(),
            ..QuerySpec::default()
        };
        browser.search(spec).await.unwrap();

        // 12 of 23 records have an even index.
        assert_eq!(browser.results().len(), 12);
        assert_eq!(browser.page_index(), 0, "new results must start on page 0");
    }

    #[tokio::test]
    async fn test_search_sorts_by_spec() {
        let mut browser = browser();
        let spec = QuerySpec {
            sort: SortKey::ProductionYear,
            ..QuerySpec::default()
        };
        let window = browser.search(spec).await.unwrap();

        assert_eq!(window[0].production_year(), Some(2022));
    }

    #[tokio::test]
    async fn test_page_navigation_clamps() {
        let mut browser = browser();
        browser.reset().await.unwrap();

        let last = browser.last_page();
        assert_eq!(last.len(), 3); // 23 records, page size 10
        assert_eq!(browser.page_index(), 2);

        // Out of range: no-op, window unchanged.
        browser.page(7);
        assert_eq!(browser.page_index(), 2);

        let first = browser.first_page();
        assert_eq!(first.len(), 10);
        assert_eq!(browser.page_index(), 0);
    }

    #[tokio::test]
    async fn test_reset_after_narrowing_restores_everything() {
        let mut browser = browser();
        let spec = QuerySpec {
            director: "박찬욱".to_string(),
            ..QuerySpec::default()
        };
        browser.search(spec).await.unwrap();
        browser.last_page();
        assert!(browser.results().len() < 23);

        browser.reset().await.unwrap();
        assert_eq!(browser.results().len(), 23);
        assert_eq!(browser.page_index(), 0);
        assert_eq!(browser.spec(), &QuerySpec::default());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_last_known_good() {
        let flaky = FlakySource {
            records: fixture(),
            healthy: std::sync::atomic::AtomicBool::new(true),
        };
        let mut browser = CatalogBrowser::new(flaky, 10);

        browser.reset().await.unwrap();
        browser.page(2);
        let before: Vec<FilmRecord> = browser.results().to_vec();

        // Take the source down; the next search must fail without
        // clearing anything.
        browser
            .source
            .healthy
            .store(false, std::sync::atomic::Ordering::SeqCst);

        let spec = QuerySpec {
            title: "영화".to_string(),
            ..QuerySpec::default()
        };
        assert!(browser.search(spec).await.is_err());

        assert_eq!(browser.results(), before.as_slice());
        assert_eq!(browser.page_index(), 2);
        assert!(browser.reset().await.is_err());
        assert_eq!(browser.results().len(), 23);
    }

    #[tokio::test]
    async fn test_fresh_browser_with_dead_source_stays_empty() {
        let mut browser = CatalogBrowser::new(BrokenSource, 10);
        assert!(browser.reset().await.is_err());
        assert!(browser.results().is_empty());
        assert_eq!(browser.page_count(), 0);
        assert!(browser.window().is_empty());
    }
}
