//! Provider URL builders.
//!
//! One module per metadata provider, each a family of pure functions
//! mapping operation parameters to a fully qualified request URL
//! ([`PlannedRequest`](crate::types::PlannedRequest)). No I/O happens here;
//! the gateway hands the planned URL to its transport/queue.
//!
//! Category coverage:
//!
//! | Provider | Categories |
//! |---|---|
//! | Jikan | anime, manga (rate limited — see the dispatch queue) |
//! | TMDB | movies, series, movie collections |
//! | Comic Vine | comics |
//! | Open Library | books |
//! | Giant Bomb | games |

pub mod comic_vine;
pub mod giant_bomb;
pub mod jikan;
pub mod open_library;
pub mod tmdb;

/// API keys for the providers that require one.
///
/// A missing key is kept as an empty string: the request is still issued
/// and the provider's authentication failure surfaces through the normal
/// uniform error path.
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub tmdb: String,
    pub comic_vine: String,
    pub giant_bomb: String,
}

impl ProviderKeys {
    /// Read keys from the environment (`TMDB_API_KEY`,
    /// `COMIC_VINE_API_KEY`, `GIANT_BOMB_API_KEY`), read once at startup.
    pub fn from_env() -> Self {
        Self {
            tmdb: std::env::var("TMDB_API_KEY").unwrap_or_default(),
            comic_vine: std::env::var("COMIC_VINE_API_KEY").unwrap_or_default(),
            giant_bomb: std::env::var("GIANT_BOMB_API_KEY").unwrap_or_default(),
        }
    }
}

/// Base URLs for every provider.
///
/// Defaults point at the production services; tests override individual
/// entries to aim at a local mock server.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub jikan: String,
    pub tmdb: String,
    pub comic_vine: String,
    pub open_library: String,
    pub giant_bomb: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            jikan: jikan::DEFAULT_BASE_URL.to_owned(),
            tmdb: tmdb::DEFAULT_BASE_URL.to_owned(),
            comic_vine: comic_vine::DEFAULT_BASE_URL.to_owned(),
            open_library: open_library::DEFAULT_BASE_URL.to_owned(),
            giant_bomb: giant_bomb::DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl ProviderEndpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jikan(mut self, base: impl Into<String>) -> Self {
        self.jikan = trim_base(base.into());
        self
    }

    pub fn tmdb(mut self, base: impl Into<String>) -> Self {
        self.tmdb = trim_base(base.into());
        self
    }

    pub fn comic_vine(mut self, base: impl Into<String>) -> Self {
        self.comic_vine = trim_base(base.into());
        self
    }

    pub fn open_library(mut self, base: impl Into<String>) -> Self {
        self.open_library = trim_base(base.into());
        self
    }

    pub fn giant_bomb(mut self, base: impl Into<String>) -> Self {
        self.giant_bomb = trim_base(base.into());
        self
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

/// Percent-encode a free-text query value.
pub(crate) fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_escapes_query_text() {
        assert_eq!(encode("one piece"), "one+piece");
        assert_eq!(encode("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn endpoint_overrides_strip_trailing_slash() {
        let endpoints = ProviderEndpoints::new().jikan("http://127.0.0.1:9000/");
        assert_eq!(endpoints.jikan, "http://127.0.0.1:9000");
    }

    #[test]
    fn default_endpoints_are_production() {
        let endpoints = ProviderEndpoints::default();
        assert_eq!(endpoints.jikan, "https://api.jikan.moe/v4");
        assert_eq!(endpoints.open_library, "https://openlibrary.org");
    }
}
