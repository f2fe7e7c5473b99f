//! Narrative generator boundary
//!
//! The external text generator is a black box behind a trait so the gateway
//! can be exercised with a stub. The production implementation talks to
//! Gemini through the shared LLM client and requests JSON-only output mode.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini::completion::gemini_api_types::{
    AdditionalParameters, GenerationConfig,
};

use crate::service::assessment::error::GenerationError;
use crate::service::assessment::prompts::SHIELD_SYSTEM_PROMPT;
use crate::service::llm::LlmClient;

/// One external generation call: fixed instruction plus a user payload,
/// raw text back
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, payload: &str) -> Result<String, GenerationError>;
}

/// Gemini-backed generator
pub struct GeminiNarrativeGenerator {
    llm_client: LlmClient,
    model: String,
}

impl GeminiNarrativeGenerator {
    pub fn new(llm_client: LlmClient, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiNarrativeGenerator {
    async fn generate(&self, payload: &str) -> Result<String, GenerationError> {
        // Ask the provider for a single JSON document, no prose around it.
        // The contract validator still rejects anything non-conforming.
        let generation_config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        };
        let params = AdditionalParameters::default().with_config(generation_config);

        let agent = self
            .llm_client
            .gemini_client()
            .agent(&self.model)
            .preamble(SHIELD_SYSTEM_PROMPT)
            .additional_params(serde_json::to_value(params).map_err(|e| {
                GenerationError::Configuration(format!("invalid generation parameters: {e}"))
            })?)
            .build();

        agent
            .prompt(payload)
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))
    }
}
