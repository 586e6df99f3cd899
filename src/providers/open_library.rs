//! Open Library URL builders for books.
//!
//! No API key. Item identifiers are Open Library paths (e.g.
//! `/works/OL45883W`), appended to the base URL as-is.
//! See: <https://openlibrary.org/developers/api>

use super::encode;
use crate::types::PlannedRequest;

/// Default base URL for Open Library.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Number of books drawn per random request; one page gives the UI a pool
/// to pick from.
const RANDOM_PAGE_SIZE: u32 = 50;

/// Free-text book search.
pub fn search(base: &str, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}/search.json?q={}", encode(term)))
}

/// Details for one work/edition. `id` is the Open Library path including
/// its leading slash.
pub fn details(base: &str, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}{id}.json"))
}

/// A page of the fiction subject, used as the trending surface for books.
pub fn trending(base: &str) -> PlannedRequest {
    PlannedRequest::cached(format!("{base}/subjects/fiction.json?limit=20"))
}

/// A page of the love subject at a random offset, used for random books.
pub fn random(base: &str, offset: u64) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/subjects/love.json?limit={RANDOM_PAGE_SIZE}&offset={offset}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url() {
        let planned = search(DEFAULT_BASE_URL, "dom casmurro");
        assert_eq!(
            planned.url,
            "https://openlibrary.org/search.json?q=dom+casmurro"
        );
    }

    #[test]
    fn details_appends_path_id() {
        let planned = details(DEFAULT_BASE_URL, "/works/OL45883W");
        assert_eq!(planned.url, "https://openlibrary.org/works/OL45883W.json");
    }

    #[test]
    fn random_carries_offset() {
        let planned = random(DEFAULT_BASE_URL, 731);
        assert_eq!(
            planned.url,
            "https://openlibrary.org/subjects/love.json?limit=50&offset=731"
        );
    }
}
