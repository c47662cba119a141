use serde::Serialize;

use crate::entities::videos;
use crate::models::video::SearchPage;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Search responses echo the coerced query parameters next to the envelope.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: SearchPage,
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

impl SearchResponse {
    #[must_use]
    pub fn new(data: SearchPage, query: String) -> Self {
        let page = data.page;
        let page_size = data.page_size;
        Self {
            success: true,
            data,
            query,
            page,
            page_size,
        }
    }
}

/// A watch-list entry with every field surfaced verbatim; timestamps render
/// as ISO-8601 or null.
#[derive(Debug, Serialize)]
pub struct VideoDto {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
    pub rating: f32,
    pub episodes: i32,
    pub current_episode: i32,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<videos::Model> for VideoDto {
    fn from(row: videos::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            media_type: row.media_type,
            genre: row.genre,
            year: row.year,
            director: row.director,
            actors: row.actors,
            description: row.description,
            poster_url: row.poster_url,
            video_url: row.video_url,
            rating: row.rating,
            episodes: row.episodes,
            current_episode: row.current_episode,
            status: row.status,
            created_at: row.created_at.map(|t| t.to_rfc3339()),
            updated_at: row.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
