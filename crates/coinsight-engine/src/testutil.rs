//! In-memory source fakes for engine tests

use coinsight_prompt::Language;
use coinsight_sources::{
    HeadlineSource, NewsArticle, PriceQuote, QuoteSource, Result, SourceError, TextGenerator,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub(crate) fn quote(amount_krw: f64, change_24h_percent: f64) -> PriceQuote {
    PriceQuote {
        amount_krw,
        change_24h_percent,
    }
}

pub(crate) fn articles(count: usize) -> Vec<NewsArticle> {
    (0..count)
        .map(|n| NewsArticle {
            title: format!("headline {n}"),
            url: format!("https://news.example/{n}"),
        })
        .collect()
}

enum QuoteMode {
    Fixed(PriceQuote),
    Sequence(Mutex<VecDeque<PriceQuote>>),
    Unavailable,
    NotFound,
}

pub(crate) struct FakeQuotes {
    mode: QuoteMode,
    pub calls: AtomicUsize,
}

impl FakeQuotes {
    pub fn returning(quote: PriceQuote) -> Self {
        Self {
            mode: QuoteMode::Fixed(quote),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn sequence(quotes: Vec<PriceQuote>) -> Self {
        Self {
            mode: QuoteMode::Sequence(Mutex::new(quotes.into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: QuoteMode::Unavailable,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn not_found() -> Self {
        Self {
            mode: QuoteMode::NotFound,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuoteSource for FakeQuotes {
    async fn quote(&self, asset_id: &str) -> Result<PriceQuote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            QuoteMode::Fixed(quote) => Ok(*quote),
            QuoteMode::Sequence(quotes) => Ok(quotes
                .lock()
                .unwrap()
                .pop_front()
                .expect("fake quote sequence exhausted")),
            QuoteMode::Unavailable => Err(SourceError::Unavailable("price down".to_string())),
            QuoteMode::NotFound => Err(SourceError::AssetNotFound(asset_id.to_string())),
        }
    }
}

pub(crate) struct FakeHeadlines {
    articles: Option<Vec<NewsArticle>>,
    last_query: Mutex<Option<String>>,
    last_language: Mutex<Option<Language>>,
    pub calls: AtomicUsize,
}

impl FakeHeadlines {
    pub fn returning(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles: Some(articles),
            last_query: Mutex::new(None),
            last_language: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            articles: None,
            last_query: Mutex::new(None),
            last_language: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn last_language(&self) -> Option<Language> {
        *self.last_language.lock().unwrap()
    }
}

#[async_trait]
impl HeadlineSource for FakeHeadlines {
    async fn headlines(&self, query: &str, language: Language) -> Result<Vec<NewsArticle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        *self.last_language.lock().unwrap() = Some(language);
        match &self.articles {
            Some(articles) => Ok(articles.clone()),
            None => Err(SourceError::Unavailable("news down".to_string())),
        }
    }
}

enum GenMode {
    Fixed(String),
    Sequence(Mutex<VecDeque<String>>),
    Malformed,
}

pub(crate) struct FakeGenerator {
    mode: GenMode,
    gate: Option<Arc<Notify>>,
    gate_first_call_only: bool,
    prompts: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn returning(text: &str) -> Self {
        Self {
            mode: GenMode::Fixed(text.to_string()),
            gate: None,
            gate_first_call_only: false,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn sequence(texts: Vec<String>) -> Self {
        Self {
            mode: GenMode::Sequence(Mutex::new(texts.into())),
            gate: None,
            gate_first_call_only: false,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: GenMode::Malformed,
            gate: None,
            gate_first_call_only: false,
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Block every call until the gate is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self.gate_first_call_only = false;
        self
    }

    /// Block only the first call until the gate is notified
    pub fn gated_once(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self.gate_first_call_only = true;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let call_index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        // resolve the outcome at call entry so sequenced texts map to call
        // order even when a later call overtakes a gated earlier one
        let outcome = match &self.mode {
            GenMode::Fixed(text) => Ok(text.clone()),
            GenMode::Sequence(texts) => Ok(texts
                .lock()
                .unwrap()
                .pop_front()
                .expect("fake generation sequence exhausted")),
            GenMode::Malformed => Err(SourceError::MalformedResponse(
                "reply contained no generated_text".to_string(),
            )),
        };

        if let Some(gate) = &self.gate {
            if !self.gate_first_call_only || call_index == 0 {
                gate.notified().await;
            }
        }

        outcome
    }
}
