//! Provider seam for video metadata lookups.
//!
//! The HTTP implementation in `crate::clients::remote` is the intended
//! production path; `LocalProvider` answers from an in-memory source behind
//! the same interface so tests never depend on network access.

use thiserror::Error;

use crate::models::video::{PlayInfo, SearchPage, SearchRequest, VideoDetail};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait VideoProvider: Send + Sync {
    /// Runs a search and returns one result page.
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ProviderError>;

    /// Descriptive metadata for a video id.
    async fn detail(&self, id: &str) -> Result<VideoDetail, ProviderError>;

    /// Playback link plus backup mirrors for a video id.
    async fn play_info(&self, id: &str) -> Result<PlayInfo, ProviderError>;
}
