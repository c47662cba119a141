use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::entities::videos;
use crate::models::video::{VideoInput, WatchStats};

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn video_repo(&self) -> repositories::video::VideoRepository {
        repositories::video::VideoRepository::new(self.conn.clone())
    }

    pub async fn create_video(&self, input: &VideoInput) -> Result<videos::Model> {
        self.video_repo().create(input).await
    }

    pub async fn list_videos(&self) -> Result<Vec<videos::Model>> {
        self.video_repo().list().await
    }

    pub async fn get_video(&self, id: i32) -> Result<Option<videos::Model>> {
        self.video_repo().get(id).await
    }

    pub async fn update_video(&self, id: i32, input: &VideoInput) -> Result<Option<videos::Model>> {
        self.video_repo().update(id, input).await
    }

    pub async fn delete_video(&self, id: i32) -> Result<bool> {
        self.video_repo().delete(id).await
    }

    pub async fn video_count(&self) -> Result<u64> {
        self.video_repo().count().await
    }

    pub async fn seed_if_empty(&self) -> Result<u64> {
        self.video_repo().seed_if_empty().await
    }

    pub async fn watch_stats(&self) -> Result<WatchStats> {
        self.video_repo().stats().await
    }
}
