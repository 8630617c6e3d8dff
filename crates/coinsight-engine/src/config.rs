//! Configuration for the aggregation engine

use crate::aggregate::AssetQuery;
use coinsight_prompt::{Language, PromptKind};
use coinsight_sources::{Result, SourceError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the aggregation engine
///
/// Credentials come in through the builder or the environment
/// (`NEWS_API_KEY`, `HF_API_TOKEN`); they are held by the source clients
/// and never rendered anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// NewsAPI key
    pub news_api_key: Option<String>,

    /// Hugging Face inference token
    pub hf_api_token: Option<String>,

    /// Override for the generative text endpoint
    pub hf_endpoint: Option<String>,

    /// Per-request timeout for every source call
    pub request_timeout: Duration,

    /// Price source requests per minute
    pub price_rate_limit: u32,

    /// News source requests per minute
    pub news_rate_limit: u32,

    /// Re-run the pipeline when only the language changes
    pub refetch_on_language_change: bool,

    /// Which analysis the prompt asks for
    pub prompt_kind: PromptKind,

    /// Asset queried before the user types anything
    pub default_asset_id: String,

    /// Language active before the user picks one
    pub default_language: Language,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            hf_api_token: None,
            hf_endpoint: None,
            request_timeout: Duration::from_secs(30),
            price_rate_limit: 30,
            news_rate_limit: 60,
            refetch_on_language_change: true,
            prompt_kind: PromptKind::Sentiment,
            default_asset_id: "bitcoin".to_string(),
            default_language: Language::Korean,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Load credentials from the environment
    pub fn with_env_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("NEWS_API_KEY") {
            self.news_api_key = Some(key);
        }
        if let Ok(token) = std::env::var("HF_API_TOKEN") {
            self.hf_api_token = Some(token);
        }
        self
    }

    /// The query used for the initial on-start run
    pub fn initial_query(&self) -> AssetQuery {
        AssetQuery::new(self.default_asset_id.clone(), self.default_language)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.news_api_key.is_none() {
            return Err(SourceError::Config(
                "news API key not configured (set NEWS_API_KEY)".to_string(),
            ));
        }

        if self.hf_api_token.is_none() {
            return Err(SourceError::Config(
                "inference token not configured (set HF_API_TOKEN)".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(SourceError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    news_api_key: Option<String>,
    hf_api_token: Option<String>,
    hf_endpoint: Option<String>,
    request_timeout: Option<Duration>,
    price_rate_limit: Option<u32>,
    news_rate_limit: Option<u32>,
    refetch_on_language_change: Option<bool>,
    prompt_kind: Option<PromptKind>,
    default_asset_id: Option<String>,
    default_language: Option<Language>,
}

impl EngineConfigBuilder {
    /// Set the NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set the inference token
    pub fn hf_api_token(mut self, token: impl Into<String>) -> Self {
        self.hf_api_token = Some(token.into());
        self
    }

    /// Override the generative text endpoint
    pub fn hf_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.hf_endpoint = Some(endpoint.into());
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the price source rate limit (requests per minute)
    pub fn price_rate_limit(mut self, limit: u32) -> Self {
        self.price_rate_limit = Some(limit);
        self
    }

    /// Set the news source rate limit (requests per minute)
    pub fn news_rate_limit(mut self, limit: u32) -> Self {
        self.news_rate_limit = Some(limit);
        self
    }

    /// Choose whether a language switch alone re-runs the pipeline
    pub fn refetch_on_language_change(mut self, refetch: bool) -> Self {
        self.refetch_on_language_change = Some(refetch);
        self
    }

    /// Choose the analysis the prompt asks for
    pub fn prompt_kind(mut self, kind: PromptKind) -> Self {
        self.prompt_kind = Some(kind);
        self
    }

    /// Set the initial asset id
    pub fn default_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.default_asset_id = Some(asset_id.into());
        self
    }

    /// Set the initial language
    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Load credentials from the environment
    pub fn with_env_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("NEWS_API_KEY") {
            self.news_api_key = Some(key);
        }
        if let Ok(token) = std::env::var("HF_API_TOKEN") {
            self.hf_api_token = Some(token);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            news_api_key: self.news_api_key,
            hf_api_token: self.hf_api_token,
            hf_endpoint: self.hf_endpoint,
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            price_rate_limit: self.price_rate_limit.unwrap_or(defaults.price_rate_limit),
            news_rate_limit: self.news_rate_limit.unwrap_or(defaults.news_rate_limit),
            refetch_on_language_change: self
                .refetch_on_language_change
                .unwrap_or(defaults.refetch_on_language_change),
            prompt_kind: self.prompt_kind.unwrap_or(defaults.prompt_kind),
            default_asset_id: self.default_asset_id.unwrap_or(defaults.default_asset_id),
            default_language: self.default_language.unwrap_or(defaults.default_language),
        };

        config.validate()?;
        Ok(config)
    }
}
