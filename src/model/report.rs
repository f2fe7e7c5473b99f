//! Report wire shape
//!
//! The exact JSON contract the external narrative generator must satisfy.
//! Field names follow the instruction prompt verbatim; the structural bounds
//! (array lengths, priority set, banding consistency) are enforced by the
//! contract validator in `service::assessment::contract`, not by serde.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk band derived from the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Critical")]
    Critical,
}

impl RiskLevel {
    /// Banding table over the 0-100 score, inclusive bounds
    pub fn for_score(score: u8) -> RiskLevel {
        match score {
            0..=19 => RiskLevel::Low,
            20..=39 => RiskLevel::Medium,
            40..=69 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

/// How much of the answer set was actually known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[serde(alias = "High")]
    High,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Low")]
    Low,
}

/// Report provenance block
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportMeta {
    pub product_name: String,
    pub version: String,
    /// ISO 8601 generation timestamp, validated by the contract check
    pub generated_at: String,
}

/// Score block of a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportScore {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    /// Top contributing gaps, highest contribution first
    pub main_drivers: Vec<String>,
}

/// One qualitative finding tied to a specific answer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Finding {
    pub title: String,
    pub what_answer_triggered_it: String,
    pub why_it_matters: String,
    pub impact: String,
    pub recommended_fix: String,
}

/// One prioritized remediation action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendedAction {
    /// 1 to 3, unique across the report
    pub priority: u8,
    pub action_title: String,
    pub why_now: String,
    /// 3 to 7 concrete steps in order
    pub steps: Vec<String>,
    pub tools_suggestions: String,
    pub effort_minutes_range: String,
    pub cost_range: String,
    pub success_metric: String,
}

/// Low-effort remediation, nominally under ~90 minutes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuickWin {
    pub action: String,
    pub effort_minutes: String,
    pub expected_benefit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeasurableOutcomes {
    pub baseline_metrics: Vec<String>,
    pub target_metrics: Vec<String>,
    pub how_to_track: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoiEstimates {
    pub time_saved_per_month_hours_range: String,
    pub cost_avoidance_notes: String,
    pub breaches_prevented_note: String,
}

/// A complete, validated assessment report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub meta: ReportMeta,
    pub score: ReportScore,
    pub findings: Vec<Finding>,
    pub top_actions: Vec<RecommendedAction>,
    pub quick_wins: Vec<QuickWin>,
    pub measurable_outcomes: MeasurableOutcomes,
    pub roi_estimates: RoiEstimates,
    /// Assumptions made where answers were `unknown`
    pub assumptions: Vec<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banding_boundaries_are_exact() {
        assert_eq!(RiskLevel::for_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(19), RiskLevel::Low);
        assert_eq!(RiskLevel::for_score(20), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(39), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_score(40), RiskLevel::High);
        assert_eq!(RiskLevel::for_score(69), RiskLevel::High);
        assert_eq!(RiskLevel::for_score(70), RiskLevel::Critical);
        assert_eq!(RiskLevel::for_score(100), RiskLevel::Critical);
    }

    #[test]
    fn risk_level_accepts_prompt_capitalization() {
        let lower: RiskLevel = serde_json::from_str("\"critical\"").unwrap();
        let upper: RiskLevel = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(serde_json::to_string(&upper).unwrap(), "\"critical\"");
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"medium\"");
        let parsed: Confidence = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(parsed, Confidence::High);
    }
}
