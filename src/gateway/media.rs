//! Media operations: search, details, trending, random — per category.
//!
//! These map a (category, operation) pair onto the right provider URL
//! builder and run the result through [`FetchGateway::fetch`]'s pipeline.
//! The random operations for comics and games are multi-step: a count
//! lookup followed by an offset draw (bounded retries for games). The
//! orchestration is a thin wrapper over the fetch pipeline and keeps no
//! state of its own.

use async_trait::async_trait;
use chrono::{Months, Utc};
use rand::Rng;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::providers::{comic_vine, giant_bomb, jikan, open_library, tmdb};
use crate::traits::MediaSource;
use crate::types::{FetchOutcome, MediaCategory, PlannedRequest, RequestOptions, RequestSpec};
use crate::{FetchError, Result};

use super::fetch::FetchGateway;

/// Bound on random-game draws before the operation gives up.
const RANDOM_GAME_ATTEMPTS: u32 = 5;

/// Random TMDB discover pages are drawn from `1..=RANDOM_PAGE_CEILING`.
const RANDOM_PAGE_CEILING: u32 = 100;

/// Random book offsets are drawn from `0..RANDOM_BOOK_OFFSET_CEILING`.
const RANDOM_BOOK_OFFSET_CEILING: u64 = 1000;

#[async_trait]
impl MediaSource for FetchGateway {
    async fn fetch(&self, url: &str, options: RequestOptions, bypass_cache: bool) -> FetchOutcome {
        FetchGateway::fetch(self, url, options, bypass_cache).await
    }

    async fn search(&self, category: MediaCategory, term: &str) -> FetchOutcome {
        let planned = match category {
            MediaCategory::Anime => jikan::search(&self.endpoints.jikan, jikan::Kind::Anime, term),
            MediaCategory::Manga => jikan::search(&self.endpoints.jikan, jikan::Kind::Manga, term),
            MediaCategory::Movies => tmdb::search_movies(
                &self.endpoints.tmdb,
                &self.keys.tmdb,
                &self.language,
                term,
            ),
            MediaCategory::Series => tmdb::search_series(
                &self.endpoints.tmdb,
                &self.keys.tmdb,
                &self.language,
                term,
            ),
            MediaCategory::Comics => {
                comic_vine::search(&self.endpoints.comic_vine, &self.keys.comic_vine, term)
            }
            MediaCategory::Books => open_library::search(&self.endpoints.open_library, term),
            MediaCategory::Games => {
                giant_bomb::search(&self.endpoints.giant_bomb, &self.keys.giant_bomb, term)
            }
        };
        self.fetch_planned(planned).await.into()
    }

    async fn details(&self, category: MediaCategory, id: &str) -> FetchOutcome {
        let planned = match category {
            MediaCategory::Anime => jikan::details(&self.endpoints.jikan, jikan::Kind::Anime, id),
            MediaCategory::Manga => jikan::details(&self.endpoints.jikan, jikan::Kind::Manga, id),
            MediaCategory::Movies => {
                tmdb::movie_details(&self.endpoints.tmdb, &self.keys.tmdb, &self.language, id)
            }
            MediaCategory::Series => {
                tmdb::series_details(&self.endpoints.tmdb, &self.keys.tmdb, &self.language, id)
            }
            MediaCategory::Comics => {
                comic_vine::volume_details(&self.endpoints.comic_vine, &self.keys.comic_vine, id)
            }
            MediaCategory::Books => open_library::details(&self.endpoints.open_library, id),
            MediaCategory::Games => {
                giant_bomb::game_details(&self.endpoints.giant_bomb, &self.keys.giant_bomb, id)
            }
        };
        self.fetch_planned(planned).await.into()
    }

    async fn collection_details(&self, id: &str) -> FetchOutcome {
        let planned =
            tmdb::collection_details(&self.endpoints.tmdb, &self.keys.tmdb, &self.language, id);
        self.fetch_planned(planned).await.into()
    }

    async fn trending(&self, category: MediaCategory) -> FetchOutcome {
        match category {
            MediaCategory::Anime => {
                let planned = jikan::top(&self.endpoints.jikan, jikan::Kind::Anime);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Manga => {
                let planned = jikan::top(&self.endpoints.jikan, jikan::Kind::Manga);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Movies => {
                let planned =
                    tmdb::trending_movies(&self.endpoints.tmdb, &self.keys.tmdb, &self.language);
                self.fetch_tagged(planned, "movie").await
            }
            MediaCategory::Series => {
                let planned =
                    tmdb::trending_series(&self.endpoints.tmdb, &self.keys.tmdb, &self.language);
                self.fetch_tagged(planned, "series").await
            }
            MediaCategory::Comics => {
                let planned =
                    comic_vine::recent_volumes(&self.endpoints.comic_vine, &self.keys.comic_vine);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Books => {
                let planned = open_library::trending(&self.endpoints.open_library);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Games => {
                let to = Utc::now().date_naive();
                let from = to.checked_sub_months(Months::new(12)).unwrap_or(to);
                let planned = giant_bomb::recent_games(
                    &self.endpoints.giant_bomb,
                    &self.keys.giant_bomb,
                    from,
                    to,
                );
                self.fetch_planned(planned).await.into()
            }
        }
    }

    async fn random(&self, category: MediaCategory) -> FetchOutcome {
        match category {
            MediaCategory::Anime => {
                let planned = jikan::random(&self.endpoints.jikan, jikan::Kind::Anime);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Manga => {
                let planned = jikan::random(&self.endpoints.jikan, jikan::Kind::Manga);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Movies => {
                let planned = tmdb::discover_movies(
                    &self.endpoints.tmdb,
                    &self.keys.tmdb,
                    &self.language,
                    random_page(),
                );
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Series => {
                let planned = tmdb::discover_series(
                    &self.endpoints.tmdb,
                    &self.keys.tmdb,
                    &self.language,
                    random_page(),
                );
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Comics => self.random_comic().await.into(),
            MediaCategory::Books => {
                let offset = random_below(RANDOM_BOOK_OFFSET_CEILING);
                let planned = open_library::random(&self.endpoints.open_library, offset);
                self.fetch_planned(planned).await.into()
            }
            MediaCategory::Games => self.random_game().await.into(),
        }
    }
}

impl FetchGateway {
    async fn fetch_planned(&self, planned: PlannedRequest) -> Result<Value> {
        self.fetch_value(RequestSpec {
            url: planned.url,
            options: RequestOptions::default(),
            bypass_cache: planned.bypass_cache,
        })
        .await
    }

    /// Fetch a trending list and stamp each result item with the media
    /// type; TMDB's movie and TV payloads are otherwise indistinguishable
    /// to the list UI.
    async fn fetch_tagged(&self, planned: PlannedRequest, media_type: &str) -> FetchOutcome {
        match self.fetch_planned(planned).await {
            Ok(mut value) => {
                tag_results(&mut value, media_type);
                FetchOutcome::Success(value)
            }
            Err(err) => err.into(),
        }
    }

    /// Two-step random comic volume: learn the catalog size, then draw one
    /// volume at a uniform offset.
    async fn random_comic(&self) -> Result<Value> {
        let count_planned =
            comic_vine::volume_count(&self.endpoints.comic_vine, &self.keys.comic_vine);
        let count = self.fetch_planned(count_planned).await?;
        let total = total_results(&count).ok_or(FetchError::MissingCount("comic volume"))?;

        let offset = random_below(total);
        let planned =
            comic_vine::volume_at_offset(&self.endpoints.comic_vine, &self.keys.comic_vine, offset);
        let drawn = self.fetch_planned(planned).await?;

        match drawn.get("results") {
            Some(results) if !results.is_null() => Ok(json!({ "data": results })),
            _ => Ok(drawn),
        }
    }

    /// Random game: learn the catalog size, then draw until a game with
    /// the fields the UI needs comes up, bounded at
    /// [`RANDOM_GAME_ATTEMPTS`]. Transient provider failures during the
    /// loop are swallowed and count as a spent attempt.
    async fn random_game(&self) -> Result<Value> {
        let count_planned = giant_bomb::game_count(&self.endpoints.giant_bomb, &self.keys.giant_bomb);
        let count = self.fetch_planned(count_planned).await.map_err(|err| {
            error!(error = %err, "failed to obtain the total game count");
            err
        })?;
        let total = total_results(&count).ok_or(FetchError::MissingCount("game"))?;

        for attempt in 1..=RANDOM_GAME_ATTEMPTS {
            let offset = random_below(total);
            let planned = giant_bomb::game_at_offset(
                &self.endpoints.giant_bomb,
                &self.keys.giant_bomb,
                offset,
            );
            let drawn = match self.fetch_planned(planned).await {
                Ok(value) => value,
                Err(err) => {
                    warn!(attempt, error = %err, "random game draw failed, retrying");
                    continue;
                }
            };

            let Some(game) = drawn
                .get("results")
                .and_then(Value::as_array)
                .and_then(|results| results.first())
            else {
                warn!(attempt, "random game draw returned no results, retrying");
                continue;
            };

            if is_presentable_game(game) {
                return Ok(json!({ "results": [game] }));
            }
            warn!(attempt, "random game draw missing display fields, retrying");
        }

        error!(
            attempts = RANDOM_GAME_ATTEMPTS,
            "could not find a presentable random game"
        );
        Err(FetchError::RetriesExhausted {
            kind: "game",
            attempts: RANDOM_GAME_ATTEMPTS,
        })
    }
}

/// Extract a positive `number_of_total_results` from a listing payload.
fn total_results(payload: &Value) -> Option<u64> {
    payload
        .get("number_of_total_results")
        .and_then(Value::as_u64)
        .filter(|total| *total > 0)
}

/// A game the UI can actually render: guid, name, and image all present.
fn is_presentable_game(game: &Value) -> bool {
    ["guid", "name", "image"]
        .iter()
        .all(|field| game.get(*field).is_some_and(|v| !v.is_null()))
}

fn tag_results(value: &mut Value, media_type: &str) {
    if let Some(results) = value.get_mut("results").and_then(Value::as_array_mut) {
        for item in results {
            if let Some(object) = item.as_object_mut() {
                object.insert("type".to_owned(), Value::String(media_type.to_owned()));
            }
        }
    }
}

fn random_page() -> u32 {
    rand::thread_rng().gen_range(1..=RANDOM_PAGE_CEILING)
}

fn random_below(ceiling: u64) -> u64 {
    rand::thread_rng().gen_range(0..ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_results_stamps_every_item() {
        let mut value = json!({"results": [{"id": 1}, {"id": 2}]});
        tag_results(&mut value, "movie");
        assert_eq!(value["results"][0]["type"], "movie");
        assert_eq!(value["results"][1]["type"], "movie");
    }

    #[test]
    fn tag_results_leaves_other_shapes_alone() {
        let mut value = json!({"data": [1, 2]});
        tag_results(&mut value, "movie");
        assert_eq!(value, json!({"data": [1, 2]}));
    }

    #[test]
    fn total_results_requires_positive_count() {
        assert_eq!(
            total_results(&json!({"number_of_total_results": 812})),
            Some(812)
        );
        assert_eq!(total_results(&json!({"number_of_total_results": 0})), None);
        assert_eq!(total_results(&json!({"results": []})), None);
    }

    #[test]
    fn presentable_game_needs_all_display_fields() {
        let good = json!({"guid": "3030-1", "name": "Okami", "image": {"icon_url": "x"}});
        assert!(is_presentable_game(&good));

        let missing_image = json!({"guid": "3030-1", "name": "Okami"});
        assert!(!is_presentable_game(&missing_image));

        let null_name = json!({"guid": "3030-1", "name": null, "image": {}});
        assert!(!is_presentable_game(&null_name));
    }

    #[test]
    fn random_draws_stay_in_bounds() {
        for _ in 0..200 {
            let page = random_page();
            assert!((1..=RANDOM_PAGE_CEILING).contains(&page));
            assert!(random_below(10) < 10);
        }
    }
}
