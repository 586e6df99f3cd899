//! Caching subsystem.
//!
//! A single cache lives here: [`response::ResponseCache`], the TTL cache of
//! decoded provider responses keyed by request URL. It is consulted and
//! populated by [`FetchGateway::fetch`](crate::FetchGateway::fetch) for
//! every non-bypassed request. See [`response`] module docs for semantics.

pub mod response;

pub use response::{CacheConfig, ResponseCache};
