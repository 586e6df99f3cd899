//! Public types for the Metafetch API.

mod category;
mod outcome;
mod request;

pub use category::MediaCategory;
pub use outcome::FetchOutcome;
pub use request::{PlannedRequest, RequestOptions, RequestSpec};
