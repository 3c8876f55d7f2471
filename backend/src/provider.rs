//! # Text Generation Provider Port
//!
//! The chatbot handler talks to the external generative-text provider
//! through this trait so tests can substitute a mock for the real
//! Gemini client.

use async_trait::async_trait;
use thiserror::Error;

/// Binary file data forwarded alongside a question.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The provider returned a structurally valid but empty response.
    /// Treated as a failure, never as a success with empty content.
    #[error("Empty response from provider")]
    EmptyResponse,
}

/// Single-turn text generation: one question, optionally one attachment,
/// one generated answer. No retries, no streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        question: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError>;
}
