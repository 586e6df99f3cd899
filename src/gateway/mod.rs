//! Fetch gateway: cache/queue/routing pipeline and the media operations.

mod builder;
mod fetch;
mod media;
mod queue;
mod routing;

pub use builder::{Metafetch, MetafetchBuilder};
pub use fetch::FetchGateway;
pub use queue::{DEFAULT_REQUEST_SPACING, DispatchQueue};
pub use routing::RateLimitPolicy;
