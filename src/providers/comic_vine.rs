//! Comic Vine URL builders for comics (volumes).
//!
//! Comic Vine's search resource distinguishes issues from volumes; the
//! application tracks volumes only, so every builder pins `resources` or
//! the `/volumes/` listing and requests a fixed field list to keep
//! responses small.
//! See: <https://comicvine.gamespot.com/api/documentation>

use super::encode;
use crate::types::PlannedRequest;

/// Default base URL for the Comic Vine API.
pub const DEFAULT_BASE_URL: &str = "https://comicvine.gamespot.com/api";

/// Fields requested for volume listings and search results.
const LIST_FIELDS: &str = "id,name,image,publisher,start_year";

/// Volume search.
pub fn search(base: &str, api_key: &str, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/search/?api_key={api_key}&format=json&resources=volume&query={}&field_list={LIST_FIELDS}",
        encode(term)
    ))
}

/// Details for one volume. Comic Vine prefixes volume ids with the `4050-`
/// resource type on the details endpoint.
pub fn volume_details(base: &str, api_key: &str, id: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/volume/4050-{id}/?api_key={api_key}&format=json&field_list=id,name,image,publisher,description,issues,start_year"
    ))
}

/// The most recently added volumes (the "trending" surface for comics).
pub fn recent_volumes(base: &str, api_key: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/volumes/?api_key={api_key}&format=json&sort=date_added:desc&limit=20&field_list={LIST_FIELDS}"
    ))
}

/// A minimal listing used only for its `number_of_total_results` field,
/// the first step of the two-step random-volume flow.
pub fn volume_count(base: &str, api_key: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/volumes/?api_key={api_key}&format=json&limit=1"
    ))
}

/// One volume at a given offset, the second step of the random-volume flow.
pub fn volume_at_offset(base: &str, api_key: &str, offset: u64) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/volumes/?api_key={api_key}&format=json&limit=1&offset={offset}&field_list={LIST_FIELDS}"
    ))
}
