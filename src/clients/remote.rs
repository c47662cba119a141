use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::models::video::{PlayInfo, SearchPage, SearchRequest, VideoDetail};
use crate::services::provider::{ProviderError, VideoProvider};

/// HTTP client for the upstream video-metadata API.
///
/// Every call carries the configured API key and runs under a fixed request
/// timeout; non-2xx responses are surfaced with their status and body.
pub struct RemoteProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl VideoProvider for RemoteProvider {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ProviderError> {
        let mut url = format!(
            "{}/search?q={}&page={}&page_size={}&api_key={}",
            self.base_url,
            urlencoding::encode(&request.query),
            request.page,
            request.page_size,
            urlencoding::encode(&self.api_key)
        );

        if let Some(genre) = &request.genre {
            url.push_str(&format!("&genre={}", urlencoding::encode(genre)));
        }
        if let Some(year) = &request.year {
            url.push_str(&format!("&year={}", urlencoding::encode(year)));
        }
        url.push_str(&format!("&sort={}", request.sort.as_param()));

        self.get_json(&url).await
    }

    async fn detail(&self, id: &str) -> Result<VideoDetail, ProviderError> {
        let url = format!(
            "{}/video/{}?api_key={}",
            self.base_url,
            urlencoding::encode(id),
            urlencoding::encode(&self.api_key)
        );
        self.get_json(&url).await
    }

    async fn play_info(&self, id: &str) -> Result<PlayInfo, ProviderError> {
        let url = format!(
            "{}/video/{}/play?api_key={}",
            self.base_url,
            urlencoding::encode(id),
            urlencoding::encode(&self.api_key)
        );
        self.get_json(&url).await
    }
}
