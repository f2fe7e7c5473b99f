//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::model::answers::ContextError;
use crate::service::assessment::GenerationError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Whether resubmitting the same questionnaire may succeed
    pub retryable: bool,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Fatal service misconfiguration (500)
    #[error("Service configuration error: {0}")]
    Configuration(String),

    /// The external narrative generator failed (502), retry is appropriate
    #[error("Report generation failed: {0}")]
    GenerationFailed(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Configuration(_) => "configuration_error",
            ApiError::GenerationFailed(_) => "generation_failed",
        };
        let retryable = matches!(self, ApiError::GenerationFailed(_));

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            retryable,
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Configuration(msg) => ApiError::Configuration(msg),
            recoverable => ApiError::GenerationFailed(recoverable.to_string()),
        }
    }
}

impl From<ContextError> for ApiError {
    fn from(err: ContextError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::assessment::GenerationError;

    #[test]
    fn generation_failures_map_to_bad_gateway() {
        let err: ApiError = GenerationError::Transport("timeout".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err: ApiError = GenerationError::MalformedResponse("empty".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn configuration_failure_maps_to_internal_error() {
        let err: ApiError = GenerationError::Configuration("no key".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn context_error_maps_to_bad_request() {
        let err: ApiError = ContextError::EmptyIndustry.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
