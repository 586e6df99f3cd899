//! Metafetch - metadata-fetch gateway for media tracking apps
//!
//! This crate is the fetch core of a desktop media tracker: it turns
//! (category, operation) requests into provider URLs, caches responses,
//! serializes calls to the one rate-limited provider, and collapses every
//! kind of failure into a single error-as-value shape the UI can render
//! without try/catch.
//!
//! # Example
//!
//! ```rust,no_run
//! use metafetch::{MediaCategory, MediaSource, Metafetch};
//!
//! #[tokio::main]
//! async fn main() -> metafetch::Result<()> {
//!     let gateway = Metafetch::builder()
//!         .keys_from_env()
//!         .language("pt-BR")
//!         .build()?;
//!
//!     let outcome = gateway.search(MediaCategory::Anime, "one piece").await;
//!     match outcome.payload() {
//!         Some(payload) => println!("{payload}"),
//!         None => eprintln!("{}", outcome.error_message().unwrap_or("unknown")),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Guarantees
//!
//! - **Never throws**: every gateway operation resolves with a
//!   [`FetchOutcome`]; no `Err` and no panic reaches the caller.
//! - **Cache**: successful responses are served from a 10-minute TTL cache
//!   keyed by URL, unless the call bypasses it (random-item endpoints).
//! - **Rate limiting**: requests to the Jikan origin are strictly FIFO
//!   with a 1100 ms gap between one completion and the next start; all
//!   other providers run concurrently.

pub mod cache;
pub mod error;
pub mod gateway;
pub mod providers;
pub mod settings;
pub mod telemetry;
pub mod traits;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use error::{FetchError, Result};
pub use gateway::{DEFAULT_REQUEST_SPACING, FetchGateway, Metafetch, MetafetchBuilder};
pub use traits::MediaSource;

pub use cache::{CacheConfig, ResponseCache};
pub use providers::{ProviderEndpoints, ProviderKeys};
pub use settings::{Settings, SettingsStore};
pub use transport::{HttpTransport, Transport};
pub use types::{FetchOutcome, MediaCategory, PlannedRequest, RequestOptions, RequestSpec};
