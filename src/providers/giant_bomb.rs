//! Giant Bomb URL builders for games.
//!
//! Game identifiers are Giant Bomb guids (e.g. `3030-4725`). The trending
//! surface is a release-date window sorted by review count; randomness is
//! count-then-offset, orchestrated by the gateway.
//! See: <https://www.giantbomb.com/api/documentation/>

use chrono::NaiveDate;

use super::encode;
use crate::types::PlannedRequest;

/// Default base URL for the Giant Bomb API.
pub const DEFAULT_BASE_URL: &str = "https://www.giantbomb.com/api";

/// Game search.
pub fn search(base: &str, api_key: &str, term: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/search/?api_key={api_key}&format=json&query={}&resources=game&field_list=guid,name,image",
        encode(term)
    ))
}

/// Details for one game.
pub fn game_details(base: &str, api_key: &str, guid: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/game/{guid}/?api_key={api_key}&format=json&field_list=guid,name,image,platforms,deck,original_release_date,genres"
    ))
}

/// Games released within `[from, to]`, most-reviewed first — the trending
/// surface for games.
pub fn recent_games(base: &str, api_key: &str, from: NaiveDate, to: NaiveDate) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/games/?api_key={api_key}&format=json&filter=original_release_date:{from}|{to}&sort=number_of_user_reviews:desc&limit=20&field_list=guid,name,image"
    ))
}

/// A minimal listing used only for `number_of_total_results`, the first
/// step of the random-game flow.
pub fn game_count(base: &str, api_key: &str) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/games/?api_key={api_key}&format=json&limit=1&field_list=id"
    ))
}

/// One game at a given offset, fetched with the full field list the UI
/// needs to validate and display a random pick.
pub fn game_at_offset(base: &str, api_key: &str, offset: u64) -> PlannedRequest {
    PlannedRequest::cached(format!(
        "{base}/games/?api_key={api_key}&format=json&limit=1&offset={offset}&field_list=guid,name,image,deck,original_release_date,platforms,genres"
    ))
}
