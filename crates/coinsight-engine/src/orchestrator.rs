//! Request orchestrator: one fetch cycle, one published aggregate
//!
//! The orchestrator fans out the three source calls for a query, folds the
//! outcomes into one [`AggregateResult`], and publishes it into the single
//! current slot. Runs carry a monotonically increasing generation token;
//! a completion whose token is no longer the newest issued is discarded
//! instead of overwriting a more recent run's output. In-flight calls are
//! never aborted.

use crate::aggregate::{AggregateResult, AssetQuery, SentimentResult};
use crate::config::EngineConfig;
use coinsight_prompt::{PromptKind, analysis_prompt, fetch_failure_message};
use coinsight_sources::{
    CoinGeckoClient, HeadlineSource, HuggingFaceClient, HuggingFaceConfig, NewsApiClient,
    QuoteSource, Result, SourceError, TextGenerator,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info};

/// Sequences the three source fetches and owns the aggregate lifecycle
pub struct Orchestrator {
    quotes: Arc<dyn QuoteSource>,
    headlines: Arc<dyn HeadlineSource>,
    generator: Arc<dyn TextGenerator>,
    prompt_kind: PromptKind,
    current: RwLock<AggregateResult>,
    generation: AtomicU64,
}

impl Orchestrator {
    /// Create an orchestrator over the given sources
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        headlines: Arc<dyn HeadlineSource>,
        generator: Arc<dyn TextGenerator>,
        prompt_kind: PromptKind,
        initial_query: AssetQuery,
    ) -> Self {
        Self {
            quotes,
            headlines,
            generator,
            prompt_kind,
            current: RwLock::new(AggregateResult::idle(initial_query)),
            generation: AtomicU64::new(0),
        }
    }

    /// Build an orchestrator with the real HTTP clients from configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let news_api_key = config
            .news_api_key
            .clone()
            .ok_or_else(|| SourceError::Config("news API key not configured".to_string()))?;
        let hf_api_token = config
            .hf_api_token
            .clone()
            .ok_or_else(|| SourceError::Config("inference token not configured".to_string()))?;

        let quotes = CoinGeckoClient::new(config.price_rate_limit, config.request_timeout)?;
        let headlines =
            NewsApiClient::new(news_api_key, config.news_rate_limit, config.request_timeout)?;

        let mut hf_config =
            HuggingFaceConfig::new(hf_api_token).with_timeout(config.request_timeout.as_secs());
        if let Some(endpoint) = &config.hf_endpoint {
            hf_config = hf_config.with_endpoint(endpoint.clone());
        }
        let generator = HuggingFaceClient::with_config(hf_config)?;

        Ok(Self::new(
            Arc::new(quotes),
            Arc::new(headlines),
            Arc::new(generator),
            config.prompt_kind,
            config.initial_query(),
        ))
    }

    /// Execute one aggregation run for a query
    ///
    /// Marks the slot `Fetching` (previous data stays visible), fans out
    /// price, news, and prompt-then-generate concurrently, and settles to
    /// `Success` only when all three succeed. Any failure settles to
    /// `Failed` with cleared data and the localized fallback message.
    ///
    /// Returns the finished aggregate for this run; the published slot is
    /// only updated when this run is still the newest one issued.
    pub async fn run(&self, query: AssetQuery) -> AggregateResult {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            asset_id = %query.asset_id,
            language = query.language.code(),
            generation,
            "starting aggregation run"
        );

        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .begin_fetch();

        let prompt = analysis_prompt(self.prompt_kind, &query.asset_id, query.language);

        // Three independent calls; the prompt depends only on the query,
        // never on the price or news responses.
        let (price, news, generated) = tokio::join!(
            self.quotes.quote(&query.asset_id),
            self.headlines.headlines(&query.asset_id, query.language),
            self.generator.generate(&prompt),
        );

        let finished = match (price, news, generated) {
            (Ok(price), Ok(news), Ok(text)) => {
                AggregateResult::success(query, price, news, SentimentResult { text })
            }
            (price, news, generated) => {
                let language = query.language;
                for (source, err) in [
                    ("price", price.err()),
                    ("news", news.err()),
                    ("sentiment", generated.err()),
                ] {
                    if let Some(err) = err {
                        error!(source, %err, "source fetch failed, aborting aggregation run");
                    }
                }
                AggregateResult::failure(query, fetch_failure_message(language))
            }
        };

        self.publish(generation, finished.clone());
        finished
    }

    /// The current aggregate as seen by the presentation layer
    pub fn snapshot(&self) -> AggregateResult {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, generation: u64, finished: AggregateResult) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) == generation {
            *current = finished;
        } else {
            debug!(generation, "discarding result of superseded aggregation run");
        }
    }
}
