//! Completion provider trait
//!
//! Defines a common interface for text-completion backends (OpenAI-compatible
//! services, canned providers in tests and examples).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::AiError;

/// Information about a completion model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Provider name (e.g., "openai")
    pub provider: String,

    /// Model name (e.g., "gpt-3.5-turbo")
    pub model_name: String,

    /// Whether this is a local model
    pub is_local: bool,
}

/// Common trait for all completion providers.
///
/// One invocation of [`complete`](CompletionProvider::complete) is one call
/// to the external service: no retry, no caching. Transport failures
/// propagate to the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Send a prompt and return the raw completion text.
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, AiError>;

    /// Get model info
    fn model_info(&self) -> ModelInfo;
}
