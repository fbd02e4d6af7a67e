use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Everything the backend needs for one structured completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: serde_json::Value,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("could not decode upstream response: {0}")]
    Decode(String),
}

impl ModelError {
    /// Network failures, rate limiting and upstream 5xx are worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            ModelError::Transport(_) => true,
            ModelError::Upstream { status, .. } => *status == 429 || *status >= 500,
            ModelError::Decode(_) => false,
        }
    }
}

/// Opaque text-generation backend. `Ok(None)` means the call succeeded but the
/// model produced no text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationModel: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, ModelError>;
}

/// Gemini `generateContent` over REST.
pub struct GeminiModelService {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
}

impl GeminiModelService {
    pub fn new(config: &Config, api_key: SecretString) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request_body(request: &GenerationRequest) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseJsonSchema": request.response_schema,
                "temperature": request.temperature,
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Joined text of the first candidate, skipping thought summaries.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

#[async_trait]
impl GenerationModel for GeminiModelService {
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, ModelError> {
        log::debug!(
            "calling model {} with {} prompt bytes",
            self.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&Self::build_request_body(&request))
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            return Err(ModelError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Decode(e.to_string()))?;

        Ok(payload.into_text())
    }
}
