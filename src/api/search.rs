use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, SearchResponse};
use crate::models::video::{SearchRequest, SortMode};

/// Raw query parameters. Numeric fields arrive as strings so a bad value
/// surfaces as a coercion failure instead of a silent reject.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sort: Option<String>,
}

pub async fn search_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::validation("请输入搜索关键词"));
    }

    let page = coerce_number(params.page, 1)?;
    let page_size = coerce_number(params.page_size, 20)?;

    let request = SearchRequest {
        query: query.clone(),
        page,
        page_size,
        genre: params.genre.filter(|g| !g.is_empty()),
        year: params.year.filter(|y| !y.is_empty()),
        sort: SortMode::from_param(params.sort.as_deref()),
    };

    let data = state.provider.search(&request).await?;

    Ok(Json(SearchResponse::new(data, query)))
}

/// Missing parameters take the default; present but non-numeric values are
/// an internal failure, not a validation one.
fn coerce_number(raw: Option<String>, default: u32) -> Result<u32, ApiError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<u32>()
            .map_err(|e| ApiError::internal(format!("invalid number '{value}': {e}"))),
    }
}
