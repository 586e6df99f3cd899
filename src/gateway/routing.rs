//! Origin-based routing between the direct path and the dispatch queue.
//!
//! Intentionally simple — a request is rate limited iff its URL origin
//! (scheme, host, port) matches one of the configured rate-limited
//! origins, which the builder derives from the Jikan endpoint.

use url::{Origin, Url};

use crate::{FetchError, Result};

/// Decides which requests must go through the dispatch queue.
#[derive(Debug, Clone)]
pub struct RateLimitPolicy {
    origins: Vec<Origin>,
}

impl RateLimitPolicy {
    /// Build a policy from the base URLs of the rate-limited providers.
    pub fn from_bases<S: AsRef<str>>(bases: &[S]) -> Result<Self> {
        let mut origins = Vec::with_capacity(bases.len());
        for base in bases {
            let url = Url::parse(base.as_ref()).map_err(|e| {
                FetchError::Configuration(format!(
                    "invalid rate-limited base URL {:?}: {e}",
                    base.as_ref()
                ))
            })?;
            origins.push(url.origin());
        }
        Ok(Self { origins })
    }

    /// Whether a request URL targets a rate-limited origin.
    ///
    /// Unparseable URLs are not rate limited; they fail in the transport
    /// with a normal error.
    pub fn is_rate_limited(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.origins.contains(&parsed.origin()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_same_origin_any_path() {
        let policy = RateLimitPolicy::from_bases(&["https://api.jikan.moe/v4"]).unwrap();
        assert!(policy.is_rate_limited("https://api.jikan.moe/v4/anime?q=naruto"));
        assert!(policy.is_rate_limited("https://api.jikan.moe/v4/random/manga"));
    }

    #[test]
    fn other_hosts_pass() {
        let policy = RateLimitPolicy::from_bases(&["https://api.jikan.moe/v4"]).unwrap();
        assert!(!policy.is_rate_limited("https://api.themoviedb.org/3/trending/movie/week"));
        assert!(!policy.is_rate_limited("https://openlibrary.org/search.json?q=x"));
    }

    #[test]
    fn port_distinguishes_origins() {
        let policy = RateLimitPolicy::from_bases(&["http://127.0.0.1:4001"]).unwrap();
        assert!(policy.is_rate_limited("http://127.0.0.1:4001/v4/top/anime"));
        assert!(!policy.is_rate_limited("http://127.0.0.1:4002/v4/top/anime"));
    }

    #[test]
    fn invalid_base_is_configuration_error() {
        assert!(RateLimitPolicy::from_bases(&["not a url"]).is_err());
    }

    #[test]
    fn unparseable_request_url_is_not_rate_limited() {
        let policy = RateLimitPolicy::from_bases(&["https://api.jikan.moe/v4"]).unwrap();
        assert!(!policy.is_rate_limited("::::"));
    }
}
