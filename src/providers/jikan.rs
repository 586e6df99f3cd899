//! Jikan (MyAnimeList) URL builders for anime and manga.
//!
//! Jikan enforces an approximate 1 request/second ceiling; every URL built
//! here is routed through the gateway's dispatch queue. No API key.
//! See: <https://docs.api.jikan.moe/>

use super::encode;
use crate::types::PlannedRequest;

/// Default base URL for the Jikan v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// The two MyAnimeList catalogs Jikan serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Anime,
    Manga,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Anime => "anime",
            Kind::Manga => "manga",
        }
    }
}

/// Free-text search within a catalog.
pub fn search(base: &str, kind: Kind, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}/{}?q={}", kind.as_str(), encode(term)))
}

/// Full details for one entry (the `/full` variant includes relations,
/// external links, and streaming info).
pub fn details(base: &str, kind: Kind, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}/{}/{id}/full", kind.as_str()))
}

/// The top-ranked list for a catalog.
pub fn top(base: &str, kind: Kind) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}/top/{}", kind.as_str()))
}

/// One random entry. Always bypasses the cache: the URL is constant, so a
/// cached response would pin the "random" result for the TTL window.
pub fn random(base: &str, kind: Kind) -> PlannedRequest {
    PlannedRequest::uncached(format!("{base}/random/{}", kind.as_str()))
}
