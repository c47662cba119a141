use axum::Json;
use serde_json::{Value, json};

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "NShow API - 视频搜索平台",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "search": "/api/search",
            "video_detail": "/api/video/{id}",
            "play_url": "/api/video/{id}/play"
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
