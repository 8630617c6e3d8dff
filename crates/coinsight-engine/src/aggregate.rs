//! Aggregate result types for one asset query
//!
//! A single [`AggregateResult`] is "current" at any time. It reflects the
//! most recently completed run: while a new run is in flight the previous
//! run's data stays visible (`status == Fetching`), and a failed run clears
//! the data and carries a localized fallback message instead.

use chrono::{DateTime, Utc};
use coinsight_prompt::Language;
use coinsight_sources::{MAX_ARTICLES, NewsArticle, PriceQuote};
use serde::{Deserialize, Serialize};

/// Lifecycle status of the current aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FetchStatus {
    /// No run has been triggered yet
    #[default]
    Idle,
    /// A run is in flight; data fields are the previous run's
    Fetching,
    /// The last completed run succeeded
    Success,
    /// The last completed run failed; data fields are cleared
    Failed,
}

/// Identifies one aggregation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetQuery {
    /// Free-text asset identifier, passed opaquely to all three sources
    pub asset_id: String,
    /// Display language for news filter, prompt, and fallback strings
    pub language: Language,
}

impl AssetQuery {
    /// Create a query for one asset in one language
    pub fn new(asset_id: impl Into<String>, language: Language) -> Self {
        Self {
            asset_id: asset_id.into(),
            language,
        }
    }
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self::new("bitcoin", Language::default())
    }
}

/// The generated sentiment summary for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Generated text, verbatim from the source
    pub text: String,
}

/// Everything one view needs for one asset query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The query this aggregate answers
    pub query: AssetQuery,
    /// Current quote, absent when unavailable
    pub price: Option<PriceQuote>,
    /// Up to five articles in source relevancy order
    pub news: Vec<NewsArticle>,
    /// Generated sentiment summary
    pub sentiment: Option<SentimentResult>,
    /// Lifecycle status
    pub status: FetchStatus,
    /// Localized fallback message, set only when `status == Failed`
    pub error_message: Option<String>,
    /// When this aggregate last changed
    pub updated_at: DateTime<Utc>,
}

impl AggregateResult {
    /// The initial aggregate, before any trigger fires
    pub fn idle(query: AssetQuery) -> Self {
        Self {
            query,
            price: None,
            news: Vec::new(),
            sentiment: None,
            status: FetchStatus::Idle,
            error_message: None,
            updated_at: Utc::now(),
        }
    }

    /// Mark a run as started, keeping the previous data visible
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Fetching;
        self.updated_at = Utc::now();
    }

    /// A completed, successful run
    pub fn success(
        query: AssetQuery,
        price: PriceQuote,
        mut news: Vec<NewsArticle>,
        sentiment: SentimentResult,
    ) -> Self {
        // the article cap holds no matter what the source handed back
        news.truncate(MAX_ARTICLES);

        Self {
            query,
            price: Some(price),
            news,
            sentiment: Some(sentiment),
            status: FetchStatus::Success,
            error_message: None,
            updated_at: Utc::now(),
        }
    }

    /// A completed, failed run: data cleared, localized message set
    pub fn failure(query: AssetQuery, message: impl Into<String>) -> Self {
        Self {
            query,
            price: None,
            news: Vec::new(),
            sentiment: None,
            status: FetchStatus::Failed,
            error_message: Some(message.into()),
            updated_at: Utc::now(),
        }
    }

    /// Whether the last run reached a terminal state
    pub fn is_settled(&self) -> bool {
        matches!(self.status, FetchStatus::Success | FetchStatus::Failed)
    }
}
