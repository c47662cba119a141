use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::info;

use super::{ApiError, ApiResponse, AppState, VideoDto};
use crate::models::video::{VideoInput, WatchStats};

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<VideoDto>>>, ApiError> {
    let rows = state.store.list_videos().await?;
    let videos: Vec<VideoDto> = rows.into_iter().map(VideoDto::from).collect();

    Ok(Json(ApiResponse::success(videos)))
}

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    Json(input): Json<VideoInput>,
) -> Result<Json<ApiResponse<VideoDto>>, ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::validation("请输入视频标题"));
    }

    let created = state.store.create_video(&input).await?;
    info!("Added watch-list entry {}: {}", created.id, created.title);

    Ok(Json(ApiResponse::success(VideoDto::from(created))))
}

pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VideoDto>>, ApiError> {
    let row = state
        .store
        .get_video(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video", id))?;

    Ok(Json(ApiResponse::success(VideoDto::from(row))))
}

pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<VideoInput>,
) -> Result<Json<ApiResponse<VideoDto>>, ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::validation("请输入视频标题"));
    }

    let updated = state
        .store
        .update_video(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("Video", id))?;

    Ok(Json(ApiResponse::success(VideoDto::from(updated))))
}

pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.store.delete_video(id).await? {
        return Err(ApiError::not_found("Video", id));
    }

    info!("Removed watch-list entry {}", id);
    Ok(Json(ApiResponse::success(())))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<WatchStats>>, ApiError> {
    let stats = state.store.watch_stats().await?;

    Ok(Json(ApiResponse::success(stats)))
}
