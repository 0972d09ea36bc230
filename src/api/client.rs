use super::error::ApiError;
use super::types::{
    Analysis, AnalysisResponse, ArchiveDescriptor, ArchiveListResponse, ArchiveResponse,
    EnvelopeHead, NewsFeed, NewsResponse,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Check the `{success, message}` envelope and decode the payload.
///
/// Non-2xx statuses prefer the body's `message`; `success: false` falls back
/// to `fallback` when the server sent no message.
pub(crate) fn decode<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let head = serde_json::from_str::<EnvelopeHead>(body);

    if !(200..300).contains(&status) {
        let message = head
            .ok()
            .and_then(|h| h.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        return Err(ApiError::Status { status, message });
    }

    let head = head?;
    if !head.success {
        let message = head
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Rejected(message));
    }

    Ok(serde_json::from_str(body)?)
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ai-news-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join percent-encoded path segments onto the base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], fallback: &str) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode(status, &body, fallback)
    }

    /// Live feed from `/api/news`.
    pub async fn fetch_news(&self) -> Result<NewsFeed, ApiError> {
        let response: NewsResponse = self.get(&["api", "news"], "Failed to fetch news").await?;
        Ok(response.into())
    }

    pub async fn fetch_analysis(&self, news_id: &str) -> Result<Analysis, ApiError> {
        let response: AnalysisResponse = self
            .get(&["api", "news", "analyze", news_id], "Failed to fetch analysis")
            .await?;
        response
            .analysis
            .ok_or_else(|| ApiError::Rejected("Analysis not available".to_string()))
    }

    pub async fn fetch_archive_list(&self) -> Result<Vec<ArchiveDescriptor>, ApiError> {
        let response: ArchiveListResponse = self
            .get(&["api", "archive", "list"], "Failed to fetch archives")
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Archived snapshot from `/api/archive/{id}`.
    pub async fn fetch_archive(&self, archive_id: &str) -> Result<NewsFeed, ApiError> {
        let response: ArchiveResponse = self
            .get(&["api", "archive", archive_id], "Failed to fetch archive")
            .await?;
        Ok(response.data.into())
    }
}
