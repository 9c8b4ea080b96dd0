//! Text-generation provider abstraction.
//!
//! A trait seam between the dispatch handler and the hosted model, so tests
//! can swap in a mock without touching the network.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// Single-shot text generation. Callers treat every failure uniformly.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
