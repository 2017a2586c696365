//! Mock client for testing
//!
//! Provides a deterministic implementation of CompletionClient for unit
//! testing: canned replies, failure injection, and call counting.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{Error, Result};

use super::{ClientHealth, CompletionClient, CompletionRequest};

// ─────────────────────────────────────────────────────────────────
// Mock Client Configuration
// ─────────────────────────────────────────────────────────────────

/// Configuration for mock client behavior
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether to fail completion calls
    pub fail_complete: bool,

    /// Whether the health check reports the endpoint as down
    pub fail_health: bool,

    /// Fixed reply text (for deterministic testing)
    pub fixed_response: Option<String>,
}

// ─────────────────────────────────────────────────────────────────
// Mock Client
// ─────────────────────────────────────────────────────────────────

/// Mock implementation of CompletionClient for testing
pub struct MockClient {
    config: MockConfig,
    call_count: RwLock<u64>,
    last_request: RwLock<Option<CompletionRequest>>,
}

impl MockClient {
    /// Create a new mock client with default configuration
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a new mock client with custom configuration
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            call_count: RwLock::new(0),
            last_request: RwLock::new(None),
        }
    }

    /// Create a mock client that always replies with the given text
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_config(MockConfig {
            fixed_response: Some(reply.into()),
            ..Default::default()
        })
    }

    /// Create a mock client whose completion calls always fail
    pub fn failing() -> Self {
        Self::with_config(MockConfig {
            fail_complete: true,
            ..Default::default()
        })
    }

    /// Number of completion calls received
    pub fn call_count(&self) -> u64 {
        *self.call_count.read()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.read().clone()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        *self.call_count.write() += 1;
        *self.last_request.write() = Some(request.clone());

        if self.config.fail_complete {
            return Err(Error::remote_call("mock failure"));
        }

        if let Some(ref fixed) = self.config.fixed_response {
            return Ok(fixed.clone());
        }

        // Echo the last user message when no canned reply is configured
        Ok(request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.clone())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> Result<ClientHealth> {
        if self.config.fail_health {
            Ok(ClientHealth {
                operational: false,
                error: Some("mock endpoint down".to_string()),
            })
        } else {
            Ok(ClientHealth::default())
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ChatMessage;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            messages: vec![ChatMessage::system("instruction"), ChatMessage::user(text)],
        }
    }

    #[test]
    fn test_fixed_reply() {
        let client = MockClient::with_reply("R");
        let reply = tokio_test::block_on(client.complete(request("question"))).unwrap();
        assert_eq!(reply, "R");
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_echo_without_fixed_reply() {
        let client = MockClient::new();
        let reply = tokio_test::block_on(client.complete(request("echo me"))).unwrap();
        assert_eq!(reply, "echo me");
    }

    #[test]
    fn test_failure_injection() {
        let client = MockClient::failing();
        let result = tokio_test::block_on(client.complete(request("question")));
        assert!(result.is_err());
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_last_request_captured() {
        let client = MockClient::with_reply("R");
        tokio_test::block_on(client.complete(request("question"))).unwrap();

        let captured = client.last_request().unwrap();
        assert_eq!(captured.messages.len(), 2);
        assert_eq!(captured.messages[1].content, "question");
    }

    #[test]
    fn test_health_check() {
        let healthy = MockClient::new();
        let health = tokio_test::block_on(healthy.health_check()).unwrap();
        assert!(health.operational);

        let down = MockClient::with_config(MockConfig {
            fail_health: true,
            ..Default::default()
        });
        let health = tokio_test::block_on(down.health_check()).unwrap();
        assert!(!health.operational);
    }
}
