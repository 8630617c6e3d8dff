//! Trait seams between the orchestrator and the concrete HTTP clients
//!
//! The engine only ever sees these traits; the HTTP clients implement them
//! and tests substitute in-memory fakes. All three are independent calls
//! from the orchestrator's perspective.

use crate::error::Result;
use crate::news::NewsArticle;
use crate::price::PriceQuote;
use async_trait::async_trait;
use coinsight_prompt::Language;

/// A source of current price quotes keyed by asset id
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the quote for one asset in the target currency with 24h change
    async fn quote(&self, asset_id: &str) -> Result<PriceQuote>;
}

/// A source of relevancy-ranked news articles
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch up to the article cap for a query, restricted to one language
    async fn headlines(&self, query: &str, language: Language) -> Result<Vec<NewsArticle>>;
}

/// A generative text endpoint
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;
}
