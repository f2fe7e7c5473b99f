//! Report contract validation
//!
//! Checks an untyped candidate report from the external generator against
//! the structural contract before it is accepted: required keys, array
//! length bounds, enum membership, banding consistency, non-empty strings.
//! Validation happens on `serde_json::Value` first so every rejection can
//! name the offending field path; only a candidate that passes is
//! deserialized into the typed `Report`. The report is accepted or rejected
//! as a unit, there is no partial acceptance.

use serde_json::Value;

use crate::model::report::{Confidence, Report, RiskLevel};

/// Structural mismatch between a candidate report and the contract
#[derive(Debug, thiserror::Error)]
#[error("report contract violated at {path}: {reason}")]
pub struct ContractViolation {
    /// JSON path of the offending field
    pub path: String,
    pub reason: String,
}

impl ContractViolation {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

const REQUIRED_KEYS: &[&str] = &[
    "meta",
    "score",
    "findings",
    "top_actions",
    "quick_wins",
    "measurable_outcomes",
    "roi_estimates",
    "assumptions",
    "disclaimer",
];

/// Validate a candidate report and deserialize it on success
pub fn validate_report(candidate: &Value) -> Result<Report, ContractViolation> {
    let root = candidate
        .as_object()
        .ok_or_else(|| ContractViolation::new("$", "report must be a JSON object"))?;

    for key in REQUIRED_KEYS {
        if !root.contains_key(*key) {
            return Err(ContractViolation::new(
                format!("$.{key}"),
                "required key is missing",
            ));
        }
    }

    validate_meta(&candidate["meta"])?;
    validate_score(&candidate["score"])?;
    validate_findings(&candidate["findings"])?;
    validate_top_actions(&candidate["top_actions"])?;
    validate_quick_wins(&candidate["quick_wins"])?;

    // Every string anywhere in the document must carry content
    reject_empty_strings(candidate, "$")?;

    serde_json::from_value(candidate.clone())
        .map_err(|e| ContractViolation::new("$", format!("report shape mismatch: {e}")))
}

fn validate_meta(meta: &Value) -> Result<(), ContractViolation> {
    let generated_at = meta
        .get("generated_at")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ContractViolation::new("$.meta.generated_at", "must be a timestamp string")
        })?;

    if chrono::DateTime::parse_from_rfc3339(generated_at).is_err() {
        return Err(ContractViolation::new(
            "$.meta.generated_at",
            format!("'{generated_at}' is not a valid ISO 8601 timestamp"),
        ));
    }
    Ok(())
}

fn validate_score(score: &Value) -> Result<(), ContractViolation> {
    let risk_score = score
        .get("risk_score")
        .and_then(Value::as_i64)
        .ok_or_else(|| ContractViolation::new("$.score.risk_score", "must be an integer"))?;

    if !(0..=100).contains(&risk_score) {
        return Err(ContractViolation::new(
            "$.score.risk_score",
            format!("{risk_score} is outside [0, 100]"),
        ));
    }

    let risk_level: RiskLevel = score
        .get("risk_level")
        .cloned()
        .map(serde_json::from_value)
        .and_then(Result::ok)
        .ok_or_else(|| {
            ContractViolation::new(
                "$.score.risk_level",
                "must be one of low, medium, high, critical",
            )
        })?;

    let expected = RiskLevel::for_score(risk_score as u8);
    if risk_level != expected {
        return Err(ContractViolation::new(
            "$.score.risk_level",
            format!("{risk_level:?} is inconsistent with risk_score {risk_score} (expected {expected:?})"),
        ));
    }

    let confidence = score
        .get("confidence")
        .cloned()
        .map(serde_json::from_value::<Confidence>);
    if !matches!(confidence, Some(Ok(_))) {
        return Err(ContractViolation::new(
            "$.score.confidence",
            "must be one of high, medium, low",
        ));
    }

    Ok(())
}

fn validate_findings(findings: &Value) -> Result<(), ContractViolation> {
    let items = findings
        .as_array()
        .ok_or_else(|| ContractViolation::new("$.findings", "must be an array"))?;

    if !(3..=6).contains(&items.len()) {
        return Err(ContractViolation::new(
            "$.findings",
            format!("expected 3 to 6 findings, got {}", items.len()),
        ));
    }
    Ok(())
}

fn validate_top_actions(top_actions: &Value) -> Result<(), ContractViolation> {
    let items = top_actions
        .as_array()
        .ok_or_else(|| ContractViolation::new("$.top_actions", "must be an array"))?;

    if items.len() != 3 {
        return Err(ContractViolation::new(
            "$.top_actions",
            format!("expected exactly 3 actions, got {}", items.len()),
        ));
    }

    let mut priorities: Vec<i64> = Vec::with_capacity(3);
    for (i, action) in items.iter().enumerate() {
        let priority = action
            .get("priority")
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                ContractViolation::new(
                    format!("$.top_actions[{i}].priority"),
                    "must be an integer",
                )
            })?;
        priorities.push(priority);

        let steps = action
            .get("steps")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ContractViolation::new(format!("$.top_actions[{i}].steps"), "must be an array")
            })?;
        if !(3..=7).contains(&steps.len()) {
            return Err(ContractViolation::new(
                format!("$.top_actions[{i}].steps"),
                format!("expected 3 to 7 steps, got {}", steps.len()),
            ));
        }
    }

    priorities.sort_unstable();
    if priorities != [1, 2, 3] {
        return Err(ContractViolation::new(
            "$.top_actions",
            format!("priorities must form the set {{1, 2, 3}}, got {priorities:?}"),
        ));
    }
    Ok(())
}

fn validate_quick_wins(quick_wins: &Value) -> Result<(), ContractViolation> {
    let items = quick_wins
        .as_array()
        .ok_or_else(|| ContractViolation::new("$.quick_wins", "must be an array"))?;

    if !(3..=5).contains(&items.len()) {
        return Err(ContractViolation::new(
            "$.quick_wins",
            format!("expected 3 to 5 quick wins, got {}", items.len()),
        ));
    }
    Ok(())
}

/// Recursively reject empty or whitespace-only strings
fn reject_empty_strings(value: &Value, path: &str) -> Result<(), ContractViolation> {
    match value {
        Value::String(s) => {
            if s.trim().is_empty() {
                return Err(ContractViolation::new(path, "string must not be empty"));
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                reject_empty_strings(item, &format!("{path}[{i}]"))?;
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                reject_empty_strings(item, &format!("{path}.{key}"))?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Minimal well-formed candidate: 3 findings, 3 actions, 3 quick wins
#[cfg(test)]
pub(crate) fn sample_report(risk_score: u8, risk_level: &str) -> Value {
    use serde_json::json;

    let finding = json!({
        "title": "No MFA on email",
        "what_answer_triggered_it": "mfa_email_admin: no",
        "why_it_matters": "Stolen passwords alone grant access.",
        "impact": "Account takeover and fraud.",
        "recommended_fix": "Enable MFA for every account."
    });
    let quick_win = json!({
        "action": "Turn on MFA for admin accounts",
        "effort_minutes": "30",
        "expected_benefit": "Blocks most account takeover attempts"
    });
    let action = |priority: u8| {
        json!({
            "priority": priority,
            "action_title": "Roll out MFA",
            "why_now": "Single biggest gap in the current posture.",
            "steps": ["Inventory accounts", "Enable MFA", "Verify enrollment"],
            "tools_suggestions": "Google Workspace, Microsoft 365",
            "effort_minutes_range": "60-90",
            "cost_range": "$0",
            "success_metric": "100% of accounts enrolled"
        })
    };

    json!({
        "meta": {
            "product_name": "ShieldCheck",
            "version": "1.0",
            "generated_at": "2025-06-01T12:00:00Z"
        },
        "score": {
            "risk_score": risk_score,
            "risk_level": risk_level,
            "confidence": "high",
            "main_drivers": ["MFA for email and admin accounts: answered no, +15 risk points"]
        },
        "findings": [finding.clone(), finding.clone(), finding],
        "top_actions": [action(1), action(2), action(3)],
        "quick_wins": [quick_win.clone(), quick_win.clone(), quick_win],
        "measurable_outcomes": {
            "baseline_metrics": ["0% MFA coverage"],
            "target_metrics": ["100% MFA coverage"],
            "how_to_track": ["Admin console security report"]
        },
        "roi_estimates": {
            "time_saved_per_month_hours_range": "2-5",
            "cost_avoidance_notes": "Avoids incident response costs.",
            "breaches_prevented_note": "MFA stops most credential attacks."
        },
        "assumptions": ["Answers reflect the whole company."],
        "disclaimer": "Guidance only, not a guarantee."
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_well_formed_report() {
        let report = validate_report(&sample_report(30, "medium")).unwrap();
        assert_eq!(report.score.risk_score, 30);
        assert_eq!(report.top_actions.len(), 3);
        assert_eq!(report.findings.len(), 3);
    }

    #[test]
    fn rejects_missing_top_actions() {
        let mut candidate = sample_report(30, "medium");
        candidate.as_object_mut().unwrap().remove("top_actions");
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.top_actions");
        assert!(err.reason.contains("missing"));
    }

    #[test]
    fn rejects_four_actions() {
        let mut candidate = sample_report(30, "medium");
        let extra = candidate["top_actions"][0].clone();
        candidate["top_actions"].as_array_mut().unwrap().push(extra);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.top_actions");
        assert!(err.reason.contains("exactly 3"));
    }

    #[test]
    fn rejects_duplicate_priorities() {
        let mut candidate = sample_report(30, "medium");
        candidate["top_actions"][2]["priority"] = json!(2);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.top_actions");
        assert!(err.reason.contains("{1, 2, 3}"));
    }

    #[test]
    fn rejects_banding_mismatch() {
        let err = validate_report(&sample_report(10, "high")).unwrap_err();
        assert_eq!(err.path, "$.score.risk_level");
        assert!(err.reason.contains("inconsistent"));
    }

    #[test]
    fn rejects_out_of_range_risk_score() {
        let mut candidate = sample_report(30, "medium");
        candidate["score"]["risk_score"] = json!(140);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.score.risk_score");
    }

    #[test]
    fn rejects_unknown_confidence() {
        let mut candidate = sample_report(30, "medium");
        candidate["score"]["confidence"] = json!("absolute");
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.score.confidence");
    }

    #[test]
    fn rejects_too_few_findings() {
        let mut candidate = sample_report(30, "medium");
        candidate["findings"].as_array_mut().unwrap().truncate(2);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.findings");
    }

    #[test]
    fn rejects_six_quick_wins() {
        let mut candidate = sample_report(30, "medium");
        let extra = candidate["quick_wins"][0].clone();
        let wins = candidate["quick_wins"].as_array_mut().unwrap();
        wins.push(extra.clone());
        wins.push(extra.clone());
        wins.push(extra);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.quick_wins");
    }

    #[test]
    fn rejects_too_few_steps() {
        let mut candidate = sample_report(30, "medium");
        candidate["top_actions"][1]["steps"] = json!(["Only", "Two"]);
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.top_actions[1].steps");
    }

    #[test]
    fn rejects_invalid_timestamp() {
        let mut candidate = sample_report(30, "medium");
        candidate["meta"]["generated_at"] = json!("yesterday");
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.meta.generated_at");
    }

    #[test]
    fn rejects_empty_string_field() {
        let mut candidate = sample_report(30, "medium");
        candidate["disclaimer"] = json!("   ");
        let err = validate_report(&candidate).unwrap_err();
        assert_eq!(err.path, "$.disclaimer");
    }

    #[test]
    fn accepts_prompt_capitalized_risk_level() {
        let report = validate_report(&sample_report(75, "Critical")).unwrap();
        assert_eq!(report.score.risk_level, RiskLevel::Critical);
    }
}
