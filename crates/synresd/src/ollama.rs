//! Ollama client - the LLM backend behind every endpoint.

use async_trait::async_trait;
use std::time::Duration;
use synres_shared::{Result, SynresError};
use tracing::{debug, warn};

use crate::config::OllamaConfig;

/// Text generation backend. `OllamaClient` in production, scripted
/// doubles in tests.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a completion for `prompt` at the given temperature
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;

    /// Whether the backend is reachable
    async fn is_available(&self) -> bool;
}

/// Non-streaming client for Ollama's `/api/generate`
pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynresError::Ollama(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Request body for one generate call
    pub fn payload(&self, prompt: &str, temperature: f32) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "temperature": temperature,
            "stream": false
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["num_predict"] = serde_json::json!(max_tokens);
        }
        if let Some(stop) = &self.config.stop {
            body["stop"] = serde_json::json!(stop);
        }

        body
    }

    async fn generate_once(&self, body: &serde_json::Value) -> Result<String> {
        let response = self
            .http
            .post(&self.config.url)
            .json(body)
            .send()
            .await
            .map_err(|e| SynresError::Ollama(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynresError::Ollama(format!(
                "request failed: {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SynresError::Ollama(e.to_string()))?;

        Ok(json
            .get("response")
            .and_then(|r| r.as_str())
            .unwrap_or("")
            .to_string())
    }
}

#[async_trait]
impl LlmBackend for OllamaClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let body = self.payload(prompt, temperature);
        let attempts = self.config.max_retries.max(1);
        debug!(
            "Ollama generate: model={} prompt_chars={} temperature={}",
            self.config.model,
            prompt.len(),
            temperature
        );

        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.generate_once(&body).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!("Ollama attempt {}/{} failed: {}", attempt, attempts, e);
                    last_error = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| SynresError::Ollama("no attempts made".to_string())))
    }

    /// Any answer from the tags endpoint counts, whatever its status
    async fn is_available(&self) -> bool {
        self.http
            .get(&self.config.tags_url)
            .timeout(Duration::from_secs(self.config.health_timeout_secs))
            .send()
            .await
            .is_ok()
    }
}
