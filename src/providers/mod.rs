pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// What can go wrong talking to a text-generation provider. Every variant
/// is recoverable: the normalizers absorb them all into fallback content.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// A chat-style text-generation backend. One system prompt, one user turn,
/// one completion. Implementors own transport and vendor envelope details;
/// exactly one attempt is made per call, with no retry or streaming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}
