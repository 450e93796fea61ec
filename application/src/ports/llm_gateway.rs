//! LLM Gateway port
//!
//! Defines the interface for the external text-completion service used by
//! [`ServiceClassifier`](crate::classifiers::ServiceClassifier).

use async_trait::async_trait;
use ryg_domain::Message;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// A single chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Whether a credential is available. Checked before any request is built.
    fn is_configured(&self) -> bool;

    /// Send the request and return the text of the first choice.
    ///
    /// Empty or whitespace-only replies are an [`GatewayError::InvalidResponse`].
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
