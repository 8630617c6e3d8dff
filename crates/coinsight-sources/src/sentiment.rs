//! Hugging Face inference client for generated sentiment text
//!
//! Speaks the hosted inference wire format: POST `{"inputs": prompt}` with
//! bearer authorization, response is a JSON array whose first element
//! carries `generated_text`.

use crate::error::{Result, SourceError};
use crate::source::TextGenerator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-base";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the inference client
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token for bearer authorization
    pub api_token: String,

    /// Inference endpoint URL (default: hosted flan-t5-base)
    pub endpoint: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl HuggingFaceConfig {
    /// Create a new config with the given token and default settings
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from the `HF_API_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN").map_err(|_| {
            SourceError::Config("HF_API_TOKEN environment variable not set".to_string())
        })?;

        Ok(Self::new(api_token))
    }

    /// Point at a different model endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: Option<String>,
}

/// Hugging Face inference client
pub struct HuggingFaceClient {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: HuggingFaceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a new client with a token and default settings
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(HuggingFaceConfig::new(api_token))
    }

    /// Create a client from the `HF_API_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        Self::with_config(HuggingFaceConfig::from_env()?)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(endpoint = %self.config.endpoint, "submitting prompt for generation");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .json(&GenerationRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(format!("inference request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unavailable(format!(
                "inference API error {status}: {body}"
            )));
        }

        let generations: Vec<Generation> = response.json().await.map_err(|e| {
            SourceError::MalformedResponse(format!("failed to parse inference response: {e}"))
        })?;

        extract_generated_text(generations)
    }
}

/// Pull the first generated-text field out of the reply
///
/// A successful reply without the field is a reportable failure, not an
/// empty string.
fn extract_generated_text(generations: Vec<Generation>) -> Result<String> {
    generations
        .into_iter()
        .next()
        .and_then(|g| g.generated_text)
        .ok_or_else(|| {
            SourceError::MalformedResponse("reply contained no generated_text".to_string())
        })
}
