//! Request orchestration engine for coinsight
//!
//! This crate is the core of the system: given an asset query it sequences
//! the three external fetches (price quote, related news, generated
//! sentiment text), merges them into one [`AggregateResult`], and manages
//! the loading/error lifecycle across re-triggers.
//!
//! # Architecture
//!
//! - [`Orchestrator`] fans out the three source calls concurrently and
//!   settles the aggregate to `Success` only when all three succeed; any
//!   failure blanks the aggregate and substitutes a localized fallback
//!   message. Overlapping runs are serialized by completion through a
//!   generation token: a superseded run's result is discarded, never
//!   applied over a newer one.
//! - [`TriggerController`] translates lifecycle and user intent (startup,
//!   submit, language switch) into orchestrator runs.
//! - [`EngineConfig`] carries credentials, timeouts, rate limits, and the
//!   two deployment knobs: `refetch_on_language_change` and `prompt_kind`.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinsight_engine::{EngineConfig, Orchestrator, Trigger, TriggerController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EngineConfig::default().with_env_keys();
//!     let orchestrator = Arc::new(Orchestrator::from_config(&config)?);
//!
//!     let mut controller = TriggerController::new(
//!         orchestrator,
//!         config.initial_query(),
//!         config.refetch_on_language_change,
//!     );
//!
//!     let aggregate = controller.handle(Trigger::Start).await;
//!     println!("{aggregate:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod orchestrator;

#[cfg(test)]
mod testutil;

// Re-export main types for convenience
pub use aggregate::{AggregateResult, AssetQuery, FetchStatus, SentimentResult};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use controller::{Trigger, TriggerController};
pub use orchestrator::Orchestrator;

// Re-export the pieces callers need alongside the engine
pub use coinsight_prompt::{Language, PromptKind};
pub use coinsight_sources::{NewsArticle, PriceQuote, Result, SourceError};
