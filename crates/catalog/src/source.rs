//! Record sources: where the full film collection comes from.
//!
//! The engine is deliberately ignorant of transport. A source returns the
//! complete, unfiltered collection in one call; filtering, sorting and
//! paging all happen after the fetch, so a source never receives query
//! parameters.

use crate::error::Result;
use crate::types::FilmRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Supplier of the full film collection.
///
/// Implementations must return every record the catalog holds; a failed
/// fetch returns an error and the caller keeps whatever it had before.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the complete collection.
    async fn fetch_all(&self) -> Result<Vec<FilmRecord>>;
}

#[async_trait]
impl RecordSource for Box<dyn RecordSource> {
    async fn fetch_all(&self) -> Result<Vec<FilmRecord>> {
        (**self).fetch_all().await
    }
}

/// HTTP record source: a single GET returning a JSON array of records.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<FilmRecord>> {
        let records: Vec<FilmRecord> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(url = %self.url, count = records.len(), "fetched catalog over HTTP");
        Ok(records)
    }
}

/// Local file source: a JSON array of records on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<FilmRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<FilmRecord> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded catalog from file");
        Ok(records)
    }
}

/// In-memory source for tests and benchmarks.
pub struct StaticSource {
    records: Vec<FilmRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<FilmRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<FilmRecord>> {
        Ok(self.records.clone())
    }
}
