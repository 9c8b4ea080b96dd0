//! Mock provider implementations for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Returns a canned response, or fails when disabled.
pub struct MockTextProvider {
    response: String,
    enabled: bool,
}

impl MockTextProvider {
    pub fn responding(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            enabled: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            response: String::new(),
            enabled: false,
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }
        Ok(self.response.clone())
    }
}
