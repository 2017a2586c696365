//! Chat-completion client module
//!
//! Provides the `CompletionClient` abstraction over remote chat-completion
//! endpoints, an OpenAI-compatible HTTP implementation, and a mock for tests.

#[cfg(test)]
mod mock;
mod openai;
mod traits;

#[cfg(test)]
pub use mock::{MockClient, MockConfig};
pub use openai::OpenAiClient;
pub use traits::{ChatMessage, ClientHealth, CompletionClient, CompletionRequest, SharedClient};
