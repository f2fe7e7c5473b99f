//! Shared LLM client and interaction utilities
//!
//! Provides a common interface for Gemini API interactions.

use rig::providers::gemini;

use crate::service::assessment::error::GenerationError;

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: gemini::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, GenerationError> {
        let client = gemini::Client::new(api_key).map_err(|e| {
            GenerationError::Configuration(format!("failed to create Gemini client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying Gemini client
    /// Use this to build agents with custom configuration
    pub fn gemini_client(&self) -> &gemini::Client {
        &self.client
    }
}
