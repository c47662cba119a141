use std::sync::Arc;

use crate::models::video::{PlayInfo, SearchPage, SearchRequest, VideoDetail};
use crate::search;
use crate::services::catalog::VideoSource;
use crate::services::provider::{ProviderError, VideoProvider};

/// In-memory provider: searches over a candidate source and synthesizes
/// detail/playback responses around the given id. No existence check is
/// performed; lookups always succeed.
pub struct LocalProvider {
    source: Arc<dyn VideoSource>,
}

impl LocalProvider {
    #[must_use]
    pub fn new(source: Arc<dyn VideoSource>) -> Self {
        Self { source }
    }
}

#[async_trait::async_trait]
impl VideoProvider for LocalProvider {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ProviderError> {
        let candidates = self.source.candidates().await?;
        Ok(search::execute(request, candidates))
    }

    async fn detail(&self, id: &str) -> Result<VideoDetail, ProviderError> {
        Ok(VideoDetail {
            id: id.to_string(),
            title: "示例视频".to_string(),
            description: "这是视频的详细描述...".to_string(),
            director: "导演姓名".to_string(),
            actors: "演员1, 演员2, 演员3".to_string(),
            rating: 8.5,
            year: 2023,
            duration: "120分钟".to_string(),
            thumbnail: "https://via.placeholder.com/300x170".to_string(),
            play_url: format!("https://example.com/play/{id}"),
        })
    }

    async fn play_info(&self, id: &str) -> Result<PlayInfo, ProviderError> {
        Ok(PlayInfo {
            play_url: format!("https://example.com/play/{id}"),
            backup_urls: vec![
                format!("https://backup1.example.com/play/{id}"),
                format!("https://backup2.example.com/play/{id}"),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::video::SortMode;
    use crate::services::catalog::FixtureSource;

    fn provider() -> LocalProvider {
        LocalProvider::new(Arc::new(FixtureSource::new()))
    }

    #[tokio::test]
    async fn test_search_ignores_query_text_for_filtering() {
        let request = SearchRequest {
            query: "随便".to_string(),
            page: 1,
            page_size: 20,
            genre: None,
            year: None,
            sort: SortMode::Relevance,
        };

        let page = provider().search(&request).await.unwrap();
        assert_eq!(page.total, 8);
    }

    #[tokio::test]
    async fn test_detail_embeds_the_requested_id() {
        let detail = provider().detail("42").await.unwrap();
        assert_eq!(detail.id, "42");
        assert!(detail.play_url.contains("/play/42"));
    }

    #[tokio::test]
    async fn test_play_info_has_two_distinct_backups() {
        let info = provider().play_info("42").await.unwrap();
        assert_eq!(info.backup_urls.len(), 2);
        assert!(info.backup_urls.iter().all(|u| *u != info.play_url));
    }
}
