//! Client for the external structured-prompt endpoint.
//!
//! The endpoint receives `{ "idea": ..., "prompt_type": ... }` and answers with
//! the generated prompt as a plain-text body. Each call is a single request:
//! there is no retry and no guard against overlapping calls from the caller.

use crate::config::RemoteConfig;
use crate::prompts::{EmptyInputError, Platform, PromptResult};
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum RemoteGenerationError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// JSON body sent to the endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RemoteGenerationRequest<'a> {
    pub idea: &'a str,
    pub prompt_type: &'a str,
}

pub struct RemoteGenerator {
    http_client: HttpClient,
    endpoint: String,
}

impl RemoteGenerator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Build a client honoring the optional request timeout
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteGenerationError> {
        let mut builder = HttpClient::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http_client = builder
            .build()
            .map_err(|e| RemoteGenerationError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint to expand `idea` into a prompt of `prompt_type`
    pub async fn generate(
        &self,
        idea: &str,
        prompt_type: &str,
    ) -> Result<PromptResult, RemoteGenerationError> {
        if idea.trim().is_empty() {
            return Err(EmptyInputError::new(Platform::General).into());
        }

        let body = RemoteGenerationRequest { idea, prompt_type };
        debug!(endpoint = %self.endpoint, prompt_type, "requesting structured prompt");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "structured prompt request failed");
                RemoteGenerationError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint = %self.endpoint, %status, "structured prompt endpoint returned an error");
            return Err(RemoteGenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| RemoteGenerationError::Body(e.to_string()))?;

        Ok(PromptResult::new(text))
    }
}
