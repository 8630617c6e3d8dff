//! HTTP source clients for coinsight
//!
//! One client per external collaborator of the aggregation pipeline:
//!
//! - [`CoinGeckoClient`] — current price in KRW with 24-hour change
//! - [`NewsApiClient`] — relevancy-ranked articles filtered by language
//! - [`HuggingFaceClient`] — generated sentiment text for a prompt
//!
//! The engine consumes the clients through the trait seams in [`source`]
//! ([`QuoteSource`], [`HeadlineSource`], [`TextGenerator`]), so tests can
//! substitute in-memory fakes. Failures follow one taxonomy
//! ([`SourceError`]): unavailable, asset not found, malformed response.
//! None of the clients retry; a failed call reports upward immediately.

pub mod error;
pub mod news;
pub mod price;
pub mod sentiment;
pub mod source;

// Re-export main types for convenience
pub use error::{Result, SourceError};
pub use news::{MAX_ARTICLES, NewsApiClient, NewsArticle};
pub use price::{CoinGeckoClient, PriceQuote};
pub use sentiment::{HuggingFaceClient, HuggingFaceConfig};
pub use source::{HeadlineSource, QuoteSource, TextGenerator};

// Re-export Language from coinsight-prompt
pub use coinsight_prompt::Language;
