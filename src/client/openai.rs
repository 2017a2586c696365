//! OpenAI-compatible API client
//!
//! Implements CompletionClient by making one HTTP call per request to any
//! OpenAI-compatible chat-completion endpoint. Failures of any kind (auth,
//! network, quota, malformed response) surface as a single remote-call error;
//! there are no retries and no timeout configuration beyond the HTTP client
//! defaults.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::{ClientHealth, CompletionClient, CompletionRequest};

// ─────────────────────────────────────────────────────────────────
// OpenAI API types (response)
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

// ─────────────────────────────────────────────────────────────────
// OpenAI Client
// ─────────────────────────────────────────────────────────────────

/// OpenAI-compatible chat-completion client
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
    total_requests: RwLock<u64>,
}

impl OpenAiClient {
    /// Create a new client for the given endpoint.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(base_url = %base_url, "OpenAI-compatible client created");

        Self {
            base_url,
            api_key: api_key.into(),
            client: Client::new(),
            total_requests: RwLock::new(0),
        }
    }

    /// Build the authorization header value (if API key is set)
    fn auth_header(&self) -> Option<String> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(format!("Bearer {}", self.api_key))
        }
    }

    /// Number of completed requests since creation.
    pub fn total_requests(&self) -> u64 {
        *self.total_requests.read()
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %request.model, "Submitting chat completion");

        let mut req = self.client.post(&url).json(&request);
        if let Some(ref auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        let response = req.send().await.map_err(|e| {
            warn!(error = %e, "Chat completion request failed");
            Error::remote_call(format!("Request error: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat completion API error: {}", body);
            return Err(Error::remote_call(format!("API error {}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::remote_call(format!("Failed to parse API response: {}", e)))?;

        let choice = parsed
            .choices
            .first()
            .ok_or_else(|| Error::remote_call("No choices in API response"))?;

        *self.total_requests.write() += 1;

        Ok(choice.message.content.clone().unwrap_or_default())
    }

    async fn health_check(&self) -> Result<ClientHealth> {
        let url = format!("{}/models", self.base_url);
        let mut req = self.client.get(&url);
        if let Some(ref auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        match req.send().await {
            Ok(resp) if resp.status().is_success() => Ok(ClientHealth {
                operational: true,
                error: None,
            }),
            Ok(resp) => Ok(ClientHealth {
                operational: false,
                error: Some(format!("API returned status {}", resp.status())),
            }),
            Err(e) => Ok(ClientHealth {
                operational: false,
                error: Some(format!("Connection failed: {}", e)),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
