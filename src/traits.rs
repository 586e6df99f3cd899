//! Core MediaSource trait

use async_trait::async_trait;

use crate::types::{FetchOutcome, MediaCategory, RequestOptions};

/// The gateway surface the UI/IPC layers consume.
///
/// Every operation resolves with a [`FetchOutcome`] — a success payload or
/// the uniform `{error: true, message}` shape. Implementations never
/// return `Err` and never panic; callers branch on the outcome variant,
/// not on caught exceptions.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Fetch an arbitrary pre-built provider URL through the
    /// cache/queue/normalization pipeline.
    async fn fetch(&self, url: &str, options: RequestOptions, bypass_cache: bool) -> FetchOutcome;

    /// Free-text search within a category.
    async fn search(&self, category: MediaCategory, term: &str) -> FetchOutcome;

    /// Details for one item. The id format is per-category (numeric ids,
    /// Giant Bomb guids, Open Library paths).
    async fn details(&self, category: MediaCategory, id: &str) -> FetchOutcome;

    /// Details for a TMDB movie collection (franchise grouping).
    async fn collection_details(&self, id: &str) -> FetchOutcome;

    /// The category's trending/top surface.
    async fn trending(&self, category: MediaCategory) -> FetchOutcome;

    /// One random item from the category.
    async fn random(&self, category: MediaCategory) -> FetchOutcome;
}
