use serde::{Deserialize, Serialize};

/// Kind of catalog entry. Stored as its lowercase code; the Chinese display
/// name is what dashboards group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Series,
    Movie,
    Anime,
}

impl MediaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Movie => "movie",
            Self::Anime => "anime",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Series => "电视剧",
            Self::Movie => "电影",
            Self::Anime => "动漫",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "series" => Some(Self::Series),
            "movie" => Some(Self::Movie),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }
}

/// Watch-progress state of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    #[default]
    Watching,
    Completed,
    Planned,
}

impl WatchStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Watching => "watching",
            Self::Completed => "completed",
            Self::Planned => "planned",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "watching" => Some(Self::Watching),
            "completed" => Some(Self::Completed),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }
}

/// Fields accepted when creating or updating a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInput {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default = "default_episode")]
    pub episodes: i32,
    #[serde(default = "default_episode")]
    pub current_episode: i32,
    #[serde(default)]
    pub status: WatchStatus,
}

const fn default_episode() -> i32 {
    1
}

/// A transient search-result projection. Distinct from a catalog entry:
/// produced per search call from whichever source backs the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub genre_name: String,
    pub year: i32,
    pub rating: f32,
    pub views: i64,
    pub duration: String,
    pub description: String,
    pub thumbnail: String,
    pub play_url: String,
}

/// Descriptive metadata for a single video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub director: String,
    pub actors: String,
    pub rating: f32,
    pub year: i32,
    pub duration: String,
    pub thumbnail: String,
    pub play_url: String,
}

/// Playback link plus fallback mirrors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayInfo {
    pub play_url: String,
    pub backup_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    Newest,
    Rating,
    #[default]
    Relevance,
}

impl SortMode {
    /// Unknown or missing values fall back to relevance.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("newest") => Self::Newest,
            Some("rating") => Self::Rating,
            _ => Self::Relevance,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Rating => "rating",
            Self::Relevance => "relevance",
        }
    }
}

/// A fully-coerced search request, ready for a provider.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sort: SortMode,
}

/// One page of search results together with the pre-pagination total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub videos: Vec<ResultItem>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Aggregate watch-list counters for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct WatchStats {
    pub total: u64,
    pub watching: u64,
    pub completed: u64,
    pub planned: u64,
    pub by_type: std::collections::BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_round_trip() {
        for t in [MediaType::Series, MediaType::Movie, MediaType::Anime] {
            assert_eq!(MediaType::from_code(t.as_str()), Some(t));
        }
        assert_eq!(MediaType::from_code("电视剧"), None);
    }

    #[test]
    fn test_media_type_rejects_unknown_strings() {
        let parsed: Result<MediaType, _> = serde_json::from_str("\"documentary\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_watch_status_default_is_watching() {
        assert_eq!(WatchStatus::default(), WatchStatus::Watching);
        assert_eq!(WatchStatus::from_code("planned"), Some(WatchStatus::Planned));
        assert_eq!(WatchStatus::from_code("dropped"), None);
    }

    #[test]
    fn test_sort_mode_falls_back_to_relevance() {
        assert_eq!(SortMode::from_param(Some("newest")), SortMode::Newest);
        assert_eq!(SortMode::from_param(Some("rating")), SortMode::Rating);
        assert_eq!(SortMode::from_param(Some("bogus")), SortMode::Relevance);
        assert_eq!(SortMode::from_param(None), SortMode::Relevance);
    }

    #[test]
    fn test_video_input_defaults() {
        let input: VideoInput =
            serde_json::from_str(r#"{"title": "三体", "type": "series"}"#).unwrap();
        assert_eq!(input.episodes, 1);
        assert_eq!(input.current_episode, 1);
        assert_eq!(input.status, WatchStatus::Watching);
        assert!((input.rating - 0.0).abs() < f32::EPSILON);
    }
}
