//! The completion invoker.
//!
//! Builds the two-message prompt (specialist instruction + user question)
//! and performs one chat-completion call. Empty questions are rejected
//! locally, before any remote call is made.

use tracing::{debug, warn};

use crate::client::{ChatMessage, CompletionRequest, SharedClient};
use crate::error::{Error, Result};
use crate::specialist::Specialist;

/// Model identifier sent with every request.
pub const MODEL_ID: &str = "gpt-4o-mini";

/// Sampling temperature. Fixed at 0 for deterministic replies.
pub const TEMPERATURE: f32 = 0.0;

/// Build the ordered message pair for a consultation: the specialist's fixed
/// instruction first, then the user's question.
pub fn build_messages(specialist: Specialist, question: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(specialist.instruction()),
        ChatMessage::user(question),
    ]
}

/// Stateless wrapper around a completion client. One call per consultation;
/// the only state between calls is the client's request counter.
pub struct Consultant {
    client: SharedClient,
}

impl Consultant {
    /// Create a consultant over the given client.
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }

    /// Submit a question to the given specialist and return the reply
    /// verbatim.
    ///
    /// The question is trimmed first; an empty result is rejected with
    /// `Error::EmptyQuestion` without touching the network.
    pub async fn consult(&self, specialist: Specialist, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        debug!(
            specialist = specialist.slug(),
            chars = question.chars().count(),
            "Submitting consultation"
        );

        let request = CompletionRequest {
            model: MODEL_ID.to_string(),
            temperature: TEMPERATURE,
            messages: build_messages(specialist, question),
        };

        match self.client.complete(request).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(specialist = specialist.slug(), error = %e, "Consultation failed");
                Err(e)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
