use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::video::{PlayInfo, VideoDetail};

pub async fn get_video_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<VideoDetail>>, ApiError> {
    let detail = state.provider.detail(&id).await?;

    Ok(Json(ApiResponse::success(detail)))
}

pub async fn get_play_url(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PlayInfo>>, ApiError> {
    let play_info = state.provider.play_info(&id).await?;

    Ok(Json(ApiResponse::success(play_info)))
}
