//! Candidate sources for the local search path.
//!
//! The fixture list and the persisted watch-list sit behind one trait so the
//! provider does not care which of the two backs a deployment.

use anyhow::Result;

use crate::db::Store;
use crate::entities::videos;
use crate::models::video::ResultItem;

#[async_trait::async_trait]
pub trait VideoSource: Send + Sync {
    async fn candidates(&self) -> Result<Vec<ResultItem>>;
}

/// Static in-memory candidate list.
pub struct FixtureSource {
    items: Vec<ResultItem>,
}

impl FixtureSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: fixture_items(),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl VideoSource for FixtureSource {
    async fn candidates(&self) -> Result<Vec<ResultItem>> {
        Ok(self.items.clone())
    }
}

/// Candidates projected from the persisted watch-list.
pub struct CatalogSource {
    store: Store,
}

impl CatalogSource {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn project(row: videos::Model) -> ResultItem {
        let genre = row.genre.unwrap_or_default();
        ResultItem {
            id: i64::from(row.id),
            title: row.title,
            genre_name: genre.clone(),
            genre,
            year: row.year.unwrap_or(0),
            rating: row.rating,
            // the watch-list tracks no view counts, so relevance ordering
            // degrades to insertion order
            views: 0,
            duration: format!("共{}集", row.episodes),
            description: row.description.unwrap_or_default(),
            thumbnail: row.poster_url.unwrap_or_default(),
            play_url: row.video_url.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl VideoSource for CatalogSource {
    async fn candidates(&self) -> Result<Vec<ResultItem>> {
        let rows = self.store.list_videos().await?;
        Ok(rows.into_iter().map(Self::project).collect())
    }
}

fn fixture_items() -> Vec<ResultItem> {
    vec![
        ResultItem {
            id: 1,
            title: "星际穿越".to_string(),
            genre: "scifi".to_string(),
            genre_name: "科幻".to_string(),
            year: 2014,
            rating: 9.3,
            views: 128_000,
            duration: "169分钟".to_string(),
            description: "一队探险家利用他们新发现的穿越虫洞的能力，试图确保人类的生存。"
                .to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Interstellar".to_string(),
            play_url: "https://example.com/play/1".to_string(),
        },
        ResultItem {
            id: 2,
            title: "盗梦空间".to_string(),
            genre: "scifi".to_string(),
            genre_name: "科幻".to_string(),
            year: 2010,
            rating: 8.8,
            views: 95_000,
            duration: "148分钟".to_string(),
            description: "一个专门从事企业间谍活动的thief，他偷取了秘密的创意。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Inception".to_string(),
            play_url: "https://example.com/play/2".to_string(),
        },
        ResultItem {
            id: 3,
            title: "黑寡妇".to_string(),
            genre: "action".to_string(),
            genre_name: "动作".to_string(),
            year: 2021,
            rating: 6.7,
            views: 182_000,
            duration: "138分钟".to_string(),
            description: "娜塔莎·罗曼诺夫必须面对她作为俄罗斯间谍的过去。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Black+Widow".to_string(),
            play_url: "https://example.com/play/3".to_string(),
        },
        ResultItem {
            id: 4,
            title: "怦然心动".to_string(),
            genre: "romance".to_string(),
            genre_name: "爱情".to_string(),
            year: 2010,
            rating: 8.0,
            views: 67_000,
            duration: "100分钟".to_string(),
            description: "一个邻家女孩爱上了她最好朋友的兄长。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Flipped".to_string(),
            play_url: "https://example.com/play/4".to_string(),
        },
        ResultItem {
            id: 5,
            title: "致命时刻".to_string(),
            genre: "horror".to_string(),
            genre_name: "恐怖".to_string(),
            year: 2017,
            rating: 6.4,
            views: 54_000,
            duration: "112分钟".to_string(),
            description: "一群朋友在一座孤立的房子里遭遇恐怖事件。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Horror+Movie".to_string(),
            play_url: "https://example.com/play/5".to_string(),
        },
        ResultItem {
            id: 6,
            title: "寄生虫".to_string(),
            genre: "drama".to_string(),
            genre_name: "剧情".to_string(),
            year: 2019,
            rating: 8.6,
            views: 145_000,
            duration: "132分钟".to_string(),
            description: "一个贫穷的家族与一个富有的家族之间的黑暗故事。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Parasite".to_string(),
            play_url: "https://example.com/play/6".to_string(),
        },
        ResultItem {
            id: 7,
            title: "喜剧之王".to_string(),
            genre: "comedy".to_string(),
            genre_name: "喜剧".to_string(),
            year: 1999,
            rating: 8.3,
            views: 87_000,
            duration: "87分钟".to_string(),
            description: "一个有抱负的演员在香港闯荡的搞笑故事。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Comedy+King".to_string(),
            play_url: "https://example.com/play/7".to_string(),
        },
        ResultItem {
            id: 8,
            title: "三体".to_string(),
            genre: "scifi".to_string(),
            genre_name: "科幻".to_string(),
            year: 2023,
            rating: 7.9,
            views: 203_000,
            duration: "145分钟".to_string(),
            description: "人类与外星文明接触的故事。".to_string(),
            thumbnail: "https://via.placeholder.com/300x170?text=Three+Body".to_string(),
            play_url: "https://example.com/play/8".to_string(),
        },
    ]
}
