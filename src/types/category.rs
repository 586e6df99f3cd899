//! Media categories tracked by the application.

use serde::{Deserialize, Serialize};

/// One of the seven media kinds the application tracks.
///
/// Serialized with the wire names the UI/IPC layers use (`"anime"`,
/// `"movies"`, ...), so a category received over IPC deserializes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Anime,
    Manga,
    Movies,
    Series,
    Comics,
    Books,
    Games,
}

impl MediaCategory {
    /// All categories, in the application's canonical hub order.
    pub const ALL: [MediaCategory; 7] = [
        MediaCategory::Anime,
        MediaCategory::Manga,
        MediaCategory::Movies,
        MediaCategory::Series,
        MediaCategory::Comics,
        MediaCategory::Books,
        MediaCategory::Games,
    ];

    /// The wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Anime => "anime",
            MediaCategory::Manga => "manga",
            MediaCategory::Movies => "movies",
            MediaCategory::Series => "series",
            MediaCategory::Comics => "comics",
            MediaCategory::Books => "books",
            MediaCategory::Games => "games",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = crate::FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anime" => Ok(MediaCategory::Anime),
            "manga" => Ok(MediaCategory::Manga),
            "movies" => Ok(MediaCategory::Movies),
            "series" => Ok(MediaCategory::Series),
            "comics" => Ok(MediaCategory::Comics),
            "books" => Ok(MediaCategory::Books),
            "games" => Ok(MediaCategory::Games),
            other => Err(crate::FetchError::Configuration(format!(
                "unknown media category: {other}"
            ))),
        }
    }
}
