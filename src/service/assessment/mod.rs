//! Report generation gateway
//!
//! Orchestrates one external narrative call per questionnaire submission:
//! builds the payload, invokes the generator under a timeout, parses and
//! validates the response against the report contract, and audits the
//! generated score against the local scoring engine.

use std::sync::Arc;
use std::time::Duration;

use crate::model::answers::{BusinessContext, QuestionnaireAnswers};
use crate::model::report::Report;
use crate::service::scoring;

pub mod contract;
pub mod error;
pub mod generator;
pub mod prompts;

pub use contract::ContractViolation;
pub use error::GenerationError;
pub use generator::{GeminiNarrativeGenerator, NarrativeGenerator};

/// Service producing one validated report per submission
pub struct AssessmentService {
    generator: Arc<dyn NarrativeGenerator>,
    timeout: Duration,
}

impl AssessmentService {
    /// Creates a new assessment service around a narrative generator
    pub fn new(generator: Arc<dyn NarrativeGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Generate a validated report for one submission
    ///
    /// Holds no session state: the caller owns the report and is expected to
    /// keep at most one call in flight per session and to discard a result
    /// that arrives after the session was reset.
    pub async fn generate_report(
        &self,
        context: &BusinessContext,
        answers: &QuestionnaireAnswers,
    ) -> Result<Report, GenerationError> {
        let start_time = std::time::Instant::now();

        // Local score first, it is the source of truth for the numbers
        let local_score = scoring::compute_risk_score(answers);

        let payload = prompts::build_generation_payload(context, answers).to_string();

        tracing::debug!(
            company = %context.company_name,
            local_risk_score = local_score.risk_score,
            payload_length = payload.len(),
            "Initiating narrative generation call"
        );

        let raw = match tokio::time::timeout(self.timeout, self.generator.generate(&payload)).await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::error!(
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Narrative generation call failed"
                );
                return Err(e);
            }
            Err(_) => {
                tracing::error!(
                    timeout_secs = self.timeout.as_secs(),
                    "Narrative generation call timed out"
                );
                return Err(GenerationError::Transport(format!(
                    "generation timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "generator returned an empty response".to_string(),
            ));
        }

        let candidate: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
            GenerationError::MalformedResponse(format!("response is not valid JSON: {e}"))
        })?;

        let mut report = contract::validate_report(&candidate)?;

        // Never trust generated numbers: overwrite with the local engine,
        // keep the generated driver prose when it exists
        if report.score.risk_score != local_score.risk_score
            || report.score.risk_level != local_score.risk_level
        {
            tracing::warn!(
                generated_score = report.score.risk_score,
                local_score = local_score.risk_score,
                "Generated score diverges from local scoring engine, overriding"
            );
        }
        report.score.risk_score = local_score.risk_score;
        report.score.risk_level = local_score.risk_level;
        report.score.confidence = local_score.confidence;
        if report.score.main_drivers.is_empty() {
            report.score.main_drivers = local_score.main_drivers;
        }

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            risk_score = report.score.risk_score,
            findings = report.findings.len(),
            "Report generated and validated"
        );

        Ok(report)
    }
}
