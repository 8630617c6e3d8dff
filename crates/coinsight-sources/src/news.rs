//! NewsAPI client for relevancy-ranked article headlines

use crate::error::{Result, SourceError};
use crate::source::HeadlineSource;
use async_trait::async_trait;
use coinsight_prompt::Language;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://newsapi.org/v2/everything";

/// Articles kept per query; the source ranks by relevancy and we keep the head
pub const MAX_ARTICLES: usize = 5;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// One news article, in source relevancy order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Article headline
    pub title: String,
    /// Article URL
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

/// NewsAPI client for the `/v2/everything` endpoint
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    ///
    /// # Arguments
    /// * `api_key` - NewsAPI key
    /// * `rate_limit` - Requests per minute
    /// * `timeout` - Per-request timeout; expiry reports as unavailable
    pub fn new(api_key: impl Into<String>, rate_limit: u32, timeout: Duration) -> Result<Self> {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(60).unwrap()));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            rate_limiter,
        })
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    async fn headlines(&self, query: &str, language: Language) -> Result<Vec<NewsArticle>> {
        self.rate_limiter.until_ready().await;

        debug!(query, language = language.code(), "requesting articles from NewsAPI");

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("q", query),
                ("sortBy", "relevancy"),
                ("language", language.code()),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(format!("NewsAPI request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unavailable(format!(
                "NewsAPI error {status}: {body}"
            )));
        }

        let body: EverythingResponse = response.json().await.map_err(|e| {
            SourceError::MalformedResponse(format!("failed to parse NewsAPI response: {e}"))
        })?;

        Ok(truncate_ranked(body.articles))
    }
}

/// Keep the first `MAX_ARTICLES` entries in source order
///
/// Zero articles is a valid empty outcome, not an error.
fn truncate_ranked(mut articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    articles.truncate(MAX_ARTICLES);
    articles
}
