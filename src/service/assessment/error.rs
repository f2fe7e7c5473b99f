//! Error taxonomy for report generation

use thiserror::Error;

use crate::service::assessment::contract::ContractViolation;

/// Failure of one generation attempt
///
/// `Configuration` is fatal and not worth resubmitting; the other variants
/// are recoverable, the caller may retry the whole submission with the same
/// answers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generator configuration error: {0}")]
    Configuration(String),

    #[error("narrative generator unreachable: {0}")]
    Transport(String),

    #[error("malformed generator response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl GenerationError {
    /// Whether resubmitting the questionnaire may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GenerationError::Configuration(_))
    }
}
