use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::remote::RemoteProvider;
use crate::config::{Config, ProviderMode, SourceKind};
use crate::db::Store;
use crate::services::{CatalogSource, FixtureSource, LocalProvider, VideoProvider, VideoSource};

mod error;
mod search;
mod system;
mod types;
mod videos;
mod watchlist;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub provider: Arc<dyn VideoProvider>,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    store.seed_if_empty().await?;

    let provider = build_provider(&config, &store)?;

    Ok(Arc::new(AppState {
        config,
        store,
        provider,
    }))
}

fn build_provider(config: &Config, store: &Store) -> anyhow::Result<Arc<dyn VideoProvider>> {
    match config.provider.mode {
        ProviderMode::Remote => {
            info!("Using remote provider at {}", config.provider.base_url);
            Ok(Arc::new(RemoteProvider::new(&config.provider)?))
        }
        ProviderMode::Local => {
            let source: Arc<dyn VideoSource> = match config.search.source {
                SourceKind::Fixture => Arc::new(FixtureSource::new()),
                SourceKind::Catalog => Arc::new(CatalogSource::new(store.clone())),
            };
            Ok(Arc::new(LocalProvider::new(source)))
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/search", get(search::search_videos))
        .route("/video/{id}", get(videos::get_video_detail))
        .route("/video/{id}/play", get(videos::get_play_url))
        .route("/videos", get(watchlist::list_videos))
        .route("/videos", post(watchlist::create_video))
        .route("/videos/{id}", get(watchlist::get_video))
        .route("/videos/{id}", put(watchlist::update_video))
        .route("/videos/{id}", delete(watchlist::delete_video))
        .route("/stats", get(watchlist::get_stats))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(system::index))
        .route("/health", get(system::health))
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
