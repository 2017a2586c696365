//! Client trait definitions
//!
//! Defines the core CompletionClient trait that remote and mock clients
//! implement. The trait is object-safe for dynamic dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ─────────────────────────────────────────────────────────────────
// Request types
// ─────────────────────────────────────────────────────────────────

/// A single chat message with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One chat-completion request: fixed model, fixed temperature, and the
/// ordered message sequence.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

// ─────────────────────────────────────────────────────────────────
// Client Health
// ─────────────────────────────────────────────────────────────────

/// Health status of a completion client.
#[derive(Debug, Clone)]
pub struct ClientHealth {
    /// Whether the endpoint is reachable and answering
    pub operational: bool,

    /// Any error message
    pub error: Option<String>,
}

impl Default for ClientHealth {
    fn default() -> Self {
        Self {
            operational: true,
            error: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// CompletionClient Trait
// ─────────────────────────────────────────────────────────────────

/// Core trait for chat-completion clients.
///
/// Implemented by the OpenAI-compatible HTTP client and by the mock client
/// used in tests. One call per request; no retries, no streaming.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Get the client name (e.g., "openai", "mock")
    fn name(&self) -> &'static str;

    /// Submit one completion request and return the reply text verbatim.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Check whether the endpoint is reachable.
    async fn health_check(&self) -> Result<ClientHealth>;
}

/// Type alias for a shared client reference
pub type SharedClient = Arc<dyn CompletionClient>;

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = ChatMessage::system("instruction");
        assert_eq!(sys.role, "system");
        assert_eq!(sys.content, "instruction");

        let user = ChatMessage::user("question");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "question");
    }

    #[test]
    fn test_client_health_default() {
        let health = ClientHealth::default();
        assert!(health.operational);
        assert!(health.error.is_none());
    }

    #[test]
    fn test_request_serialization() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            messages: vec![ChatMessage::system("a"), ChatMessage::user("b")],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "b");
    }
}
