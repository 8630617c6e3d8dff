//! Localized prompt templates for coinsight
//!
//! This crate is the pure localization leaf of the workspace: the supported
//! display languages, the analysis prompt templates sent to the generative
//! text source, and the localized fallback strings shown when a fetch cycle
//! fails. Everything here is deterministic and does no I/O.
//!
//! # Quick Start
//!
//! ```
//! use coinsight_prompt::{analysis_prompt, Language, PromptKind};
//!
//! let ko = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::Korean);
//! let en = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::English);
//!
//! assert!(ko.contains("bitcoin"));
//! assert!(en.contains("bitcoin"));
//! assert_ne!(ko, en);
//! ```

pub mod language;
pub mod template;

pub use language::Language;
pub use template::{PromptKind, analysis_prompt, fetch_failure_message};
