//! Trigger controller: decides when the orchestrator runs
//!
//! Three triggers exist: startup, an explicit submit, and a language
//! switch. Submit always refetches with the currently typed asset id; a
//! language switch alone refetches only when the deployment is configured
//! for it (`refetch_on_language_change`). Both observed product variants
//! are expressible through that flag.

use crate::aggregate::{AggregateResult, AssetQuery};
use crate::orchestrator::Orchestrator;
use coinsight_prompt::Language;
use std::sync::Arc;
use tracing::debug;

/// User or lifecycle intent forwarded into the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Initial load
    Start,
    /// Explicit user submission of an asset id
    Submit {
        /// The typed asset id, passed through opaquely
        asset_id: String,
    },
    /// The display language changed
    LanguageChange {
        /// The newly selected language
        language: Language,
    },
}

/// Holds the current query state and fires the orchestrator on triggers
pub struct TriggerController {
    orchestrator: Arc<Orchestrator>,
    asset_id: String,
    language: Language,
    refetch_on_language_change: bool,
}

impl TriggerController {
    /// Create a controller starting from the given query
    pub fn new(
        orchestrator: Arc<Orchestrator>,
        initial: AssetQuery,
        refetch_on_language_change: bool,
    ) -> Self {
        Self {
            orchestrator,
            asset_id: initial.asset_id,
            language: initial.language,
            refetch_on_language_change,
        }
    }

    /// The query a run issued right now would carry
    pub fn query(&self) -> AssetQuery {
        AssetQuery::new(self.asset_id.clone(), self.language)
    }

    /// The currently selected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Process one trigger, returning the finished aggregate when a run
    /// was issued and `None` when the trigger required no fetch
    pub async fn handle(&mut self, trigger: Trigger) -> Option<AggregateResult> {
        match trigger {
            Trigger::Start => Some(self.orchestrator.run(self.query()).await),
            Trigger::Submit { asset_id } => {
                self.asset_id = asset_id;
                Some(self.orchestrator.run(self.query()).await)
            }
            Trigger::LanguageChange { language } => {
                self.language = language;
                if self.refetch_on_language_change {
                    Some(self.orchestrator.run(self.query()).await)
                } else {
                    debug!(
                        language = language.code(),
                        "language changed, refetch disabled"
                    );
                    None
                }
            }
        }
    }
}
