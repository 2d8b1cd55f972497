//! HTTP client for communicating with synresd.
//!
//! Each call is a single request: no retry, no timeout, no cancellation.
//! Every failure collapses into [`SynresError::RequestFailed`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use synres_shared::{
    Audience, HealthStatus, Persona, Result, StudyRequest, StudyResult, SynresError,
    HEALTH_PATH, PERSONAS_GENERATE_PATH, STUDY_RUN_PATH,
};
use tracing::{debug, warn};

/// What the wizard needs from a backend. `ApiClient` talks to synresd,
/// `DemoBackend` answers from built-in data.
#[async_trait]
pub trait StudyBackend: Send + Sync {
    async fn generate_personas(&self, audience: &Audience) -> Result<Vec<Persona>>;

    async fn run_study(&self, request: &StudyRequest) -> Result<StudyResult>;

    /// Short label for the header
    fn describe(&self) -> String;
}

/// Client for the synresd HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, failure: &str) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| SynresError::request_failed(e.to_string()))?;

        if !response.status().is_success() {
            warn!("POST {} returned {}", url, response.status());
            return Err(SynresError::request_failed(failure));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SynresError::request_failed(e.to_string()))
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| SynresError::request_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynresError::request_failed("Failed to check health"));
        }

        response
            .json()
            .await
            .map_err(|e| SynresError::request_failed(e.to_string()))
    }
}

#[async_trait]
impl StudyBackend for ApiClient {
    async fn generate_personas(&self, audience: &Audience) -> Result<Vec<Persona>> {
        self.post_json(PERSONAS_GENERATE_PATH, audience, "Failed to generate personas")
            .await
    }

    async fn run_study(&self, request: &StudyRequest) -> Result<StudyResult> {
        self.post_json(STUDY_RUN_PATH, request, "Failed to run study")
            .await
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(PERSONAS_GENERATE_PATH),
            "http://localhost:8000/api/personas/generate"
        );
    }
}
