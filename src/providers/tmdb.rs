//! TMDB (The Movie Database) URL builders for movies, series, and movie
//! collections.
//!
//! Every endpoint takes the API key and a response language
//! (e.g. `pt-BR`, `en-US`) as query parameters.
//! See: <https://developer.themoviedb.org/docs>

use super::encode;
use crate::types::PlannedRequest;

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Movie search. Uses multi-search, as movie lookups in the original app
/// also surface people/collections the UI filters client-side.
pub fn search_movies(base: &str, api_key: &str, language: &str, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/search/multi?api_key={api_key}&query={}&language={language}",
        encode(term)
    ))
}

/// TV series search.
pub fn search_series(base: &str, api_key: &str, language: &str, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/search/tv?api_key={api_key}&query={}&language={language}",
        encode(term)
    ))
}

/// Details for one movie.
pub fn movie_details(base: &str, api_key: &str, language: &str, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/movie/{id}?api_key={api_key}&language={language}"
    ))
}

/// Details for a movie collection (franchise grouping).
pub fn collection_details(base: &str, api_key: &str, language: &str, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/collection/{id}?api_key={api_key}&language={language}"
    ))
}

/// Details for one TV series.
pub fn series_details(base: &str, api_key: &str, language: &str, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/tv/{id}?api_key={api_key}&language={language}"
    ))
}

/// Movies trending this week.
pub fn trending_movies(base: &str, api_key: &str, language: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/trending/movie/week?api_key={api_key}&language={language}"
    ))
}

/// Series trending this week.
pub fn trending_series(base: &str, api_key: &str, language: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/trending/tv/week?api_key={api_key}&language={language}"
    ))
}

/// One page of popular movies; the random-movie operation draws a page at
/// random. Cached deliberately — the page number varies per draw.
pub fn discover_movies(base: &str, api_key: &str, language: &str, page: u32) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/discover/movie?api_key={api_key}&language={language}&sort_by=popularity.desc&page={page}"
    ))
}

/// One page of popular series.
pub fn discover_series(base: &str, api_key: &str, language: &str, page: u32) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/discover/tv?api_key={api_key}&language={language}&sort_by=popularity.desc&page={page}"
    ))
}
