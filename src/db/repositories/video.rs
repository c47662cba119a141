use std::collections::BTreeMap;

use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use tracing::info;

use crate::entities::{prelude::*, videos};
use crate::models::video::{MediaType, VideoInput, WatchStats, WatchStatus};

/// Repository for watch-list catalog entries
pub struct VideoRepository {
    conn: DatabaseConnection,
}

impl VideoRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn apply_input(model: &mut videos::ActiveModel, input: &VideoInput) {
        model.title = Set(input.title.clone());
        model.media_type = Set(input.media_type.as_str().to_string());
        model.genre = Set(input.genre.clone());
        model.year = Set(input.year);
        model.director = Set(input.director.clone());
        model.actors = Set(input.actors.clone());
        model.description = Set(input.description.clone());
        model.poster_url = Set(input.poster_url.clone());
        model.video_url = Set(input.video_url.clone());
        model.rating = Set(input.rating);
        model.episodes = Set(input.episodes);
        model.current_episode = Set(input.current_episode);
        model.status = Set(input.status.as_str().to_string());
    }

    pub async fn create(&self, input: &VideoInput) -> Result<videos::Model> {
        let now = Utc::now();
        let mut model = videos::ActiveModel {
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        };
        Self::apply_input(&mut model, input);

        Ok(model.insert(&self.conn).await?)
    }

    pub async fn list(&self) -> Result<Vec<videos::Model>> {
        let rows = Videos::find()
            .order_by_asc(videos::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<videos::Model>> {
        Ok(Videos::find_by_id(id).one(&self.conn).await?)
    }

    /// Updates every mutable field and refreshes `updated_at`. Returns `None`
    /// when no row with the given id exists.
    pub async fn update(&self, id: i32, input: &VideoInput) -> Result<Option<videos::Model>> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut model: videos::ActiveModel = existing.into();
        Self::apply_input(&mut model, input);
        model.updated_at = Set(Some(Utc::now()));

        Ok(Some(model.update(&self.conn).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Videos::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Videos::find().count(&self.conn).await?)
    }

    /// Inserts the sample entries on a fresh database. A second call finds
    /// existing rows and does nothing.
    pub async fn seed_if_empty(&self) -> Result<u64> {
        if self.count().await? > 0 {
            return Ok(0);
        }

        let samples = sample_entries();
        for input in &samples {
            self.create(input).await?;
        }

        info!("Seeded watch-list with {} sample entries", samples.len());
        Ok(samples.len() as u64)
    }

    pub async fn stats(&self) -> Result<WatchStats> {
        let rows = self.list().await?;

        let mut by_type: BTreeMap<String, u64> =
            [MediaType::Series, MediaType::Movie, MediaType::Anime]
                .into_iter()
                .map(|t| (t.display_name().to_string(), 0))
                .collect();

        let mut watching = 0;
        let mut completed = 0;
        let mut planned = 0;

        for row in &rows {
            match WatchStatus::from_code(&row.status) {
                Some(WatchStatus::Watching) => watching += 1,
                Some(WatchStatus::Completed) => completed += 1,
                Some(WatchStatus::Planned) => planned += 1,
                None => {}
            }

            if let Some(media_type) = MediaType::from_code(&row.media_type) {
                *by_type.entry(media_type.display_name().to_string()).or_default() += 1;
            }
        }

        Ok(WatchStats {
            total: rows.len() as u64,
            watching,
            completed,
            planned,
            by_type,
        })
    }
}

fn sample_entries() -> Vec<VideoInput> {
    vec![
        VideoInput {
            title: "庆余年".to_string(),
            media_type: MediaType::Series,
            genre: Some("古装/剧情".to_string()),
            year: Some(2019),
            director: Some("孙皓".to_string()),
            actors: Some("张若昀, 李沁, 陈道明".to_string()),
            description: Some(
                "范闲作为庆国户部尚书范建的养子，从小在澹州长大。在得知自己的身世后，他带着对身世的疑惑和对未来的憧憬，前往京都。"
                    .to_string(),
            ),
            poster_url: None,
            video_url: None,
            rating: 8.5,
            episodes: 46,
            current_episode: 1,
            status: WatchStatus::Watching,
        },
        VideoInput {
            title: "流浪地球2".to_string(),
            media_type: MediaType::Movie,
            genre: Some("科幻/灾难".to_string()),
            year: Some(2023),
            director: Some("郭帆".to_string()),
            actors: Some("吴京, 刘德华, 李雪健".to_string()),
            description: Some(
                "太阳即将毁灭，人类在地球表面建造出巨大的推进器，寻找新的家园。然而宇宙之路危机四伏，为了拯救地球，流浪地球时代的年轻人再次挺身而出。"
                    .to_string(),
            ),
            poster_url: None,
            video_url: None,
            rating: 8.0,
            episodes: 1,
            current_episode: 1,
            status: WatchStatus::Completed,
        },
        VideoInput {
            title: "鬼灭之刃".to_string(),
            media_type: MediaType::Anime,
            genre: Some("热血/奇幻".to_string()),
            year: Some(2019),
            director: Some("外崎春雄".to_string()),
            actors: Some("花江夏树, 佐藤聡美".to_string()),
            description: Some(
                "大正时期，日本。卖炭少年灶门炭治郎，他的平凡而纯朴的日常生活，在家人被恶鬼袭击的那一天发生了剧变。".to_string(),
            ),
            poster_url: None,
            video_url: None,
            rating: 9.0,
            episodes: 26,
            current_episode: 1,
            status: WatchStatus::Planned,
        },
        VideoInput {
            title: "三体".to_string(),
            media_type: MediaType::Series,
            genre: Some("科幻/悬疑".to_string()),
            year: Some(2023),
            director: Some("杨磊".to_string()),
            actors: Some("张鲁一, 于和伟, 陈瑾".to_string()),
            description: Some(
                "地球文明向宇宙发出的第一声啼鸣，以太阳为中心，以光速向宇宙深处飞驰……".to_string(),
            ),
            poster_url: None,
            video_url: None,
            rating: 8.5,
            episodes: 30,
            current_episode: 1,
            status: WatchStatus::Watching,
        },
        VideoInput {
            title: "灌篮高手".to_string(),
            media_type: MediaType::Anime,
            genre: Some("热血/运动".to_string()),
            year: Some(1993),
            director: Some("井上雄彦".to_string()),
            actors: Some("草尾毅, 绿川光".to_string()),
            description: Some(
                "湘北高中篮球队，一支曾经辉煌但如今没落的队伍。新入学的樱木花道，一个完全不懂篮球的门外汉，却意外加入了这支队伍。"
                    .to_string(),
            ),
            poster_url: None,
            video_url: None,
            rating: 9.5,
            episodes: 101,
            current_episode: 1,
            status: WatchStatus::Planned,
        },
    ]
}
