//! CoinGecko price client

use crate::error::{Result, SourceError};
use crate::source::QuoteSource;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const TARGET_CURRENCY: &str = "krw";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// A quote in the target currency with its 24-hour change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Current price in KRW
    pub amount_krw: f64,
    /// 24-hour change in percent
    pub change_24h_percent: f64,
}

/// One entry of the `/simple/price` response table
#[derive(Debug, Deserialize)]
struct RawQuote {
    krw: f64,
    krw_24h_change: f64,
}

/// CoinGecko client for simple price quotes
///
/// No API key is required. The response is keyed by asset id; an id the
/// source does not know comes back as a missing key, which this client
/// reports as [`SourceError::AssetNotFound`].
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    rate_limiter: SharedRateLimiter,
}

impl CoinGeckoClient {
    /// Create a new CoinGecko client
    ///
    /// # Arguments
    /// * `rate_limit` - Requests per minute (public API allows ~30)
    /// * `timeout` - Per-request timeout; expiry reports as unavailable
    pub fn new(rate_limit: u32, timeout: Duration) -> Result<Self> {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(30).unwrap()));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            rate_limiter,
        })
    }

    /// Point the client at a different API base (self-hosted mirror, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl QuoteSource for CoinGeckoClient {
    async fn quote(&self, asset_id: &str) -> Result<PriceQuote> {
        self.rate_limiter.until_ready().await;

        debug!(asset_id, "requesting quote from CoinGecko");

        let url = format!("{}/simple/price", self.base_url);
        let mut params = HashMap::new();
        params.insert("ids", asset_id);
        params.insert("vs_currencies", TARGET_CURRENCY);
        params.insert("include_24hr_change", "true");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(format!("CoinGecko request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unavailable(format!(
                "CoinGecko API error {status}: {body}"
            )));
        }

        let table: HashMap<String, RawQuote> = response.json().await.map_err(|e| {
            SourceError::MalformedResponse(format!("failed to parse CoinGecko response: {e}"))
        })?;

        extract_quote(table, asset_id)
    }
}

/// Typed lookup into the id-keyed response table
///
/// A missing key is the source's normal "unknown asset" outcome and must
/// stay distinguishable from a transport error.
fn extract_quote(mut table: HashMap<String, RawQuote>, asset_id: &str) -> Result<PriceQuote> {
    let raw = table
        .remove(asset_id)
        .ok_or_else(|| SourceError::AssetNotFound(asset_id.to_string()))?;

    Ok(PriceQuote {
        amount_krw: raw.krw,
        change_24h_percent: raw.krw_24h_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(json: serde_json::Value) -> HashMap<String, RawQuote> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = CoinGeckoClient::new(30, Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, BASE_URL);

        let client = client.with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_extract_quote_present() {
        let table = table_from(serde_json::json!({
            "bitcoin": { "krw": 95_000_000.0, "krw_24h_change": 1.23 }
        }));

        let quote = extract_quote(table, "bitcoin").unwrap();
        assert_eq!(quote.amount_krw, 95_000_000.0);
        assert_eq!(quote.change_24h_percent, 1.23);
    }

    #[test]
    fn test_extract_quote_missing_key_is_not_found() {
        let table = table_from(serde_json::json!({
            "bitcoin": { "krw": 95_000_000.0, "krw_24h_change": 1.23 }
        }));

        let err = extract_quote(table, "doesnotexist").unwrap_err();
        assert!(matches!(err, SourceError::AssetNotFound(id) if id == "doesnotexist"));
    }

    #[test]
    fn test_extract_quote_empty_table() {
        let err = extract_quote(HashMap::new(), "bitcoin").unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_quote() {
        let client = CoinGeckoClient::new(30, Duration::from_secs(10)).unwrap();
        let quote = client.quote("bitcoin").await.unwrap();
        assert!(quote.amount_krw > 0.0);
    }
}
