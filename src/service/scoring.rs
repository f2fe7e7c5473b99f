//! Deterministic risk scoring
//!
//! Pure mirror of the scoring rules embedded in the generation instruction.
//! The external generator is told to compute the same numbers, but this
//! engine is the source of truth: its output is used to audit and override
//! whatever the generator returns, so a report's score can always be
//! recomputed from the answers alone.

use crate::model::answers::{Answer, QuestionnaireAnswers};
use crate::model::catalog::Question;
use crate::model::report::{Confidence, ReportScore, RiskLevel};

/// Risk points one answer contributes for a control of the given weight
///
/// `partial` is half weight, rounded half up.
fn contribution(weight: u8, answer: Answer) -> u8 {
    match answer {
        Answer::Yes => 0,
        Answer::Partial => (weight + 1) / 2,
        Answer::No | Answer::Unknown => weight,
    }
}

/// Confidence from how much of the answer set was actually known
fn confidence_for(unknown_count: usize) -> Confidence {
    match unknown_count {
        0 => Confidence::High,
        1..=2 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

/// Compute the full score block from a complete answer set
///
/// Infallible and pure: identical answers always produce identical output.
/// Drivers are ranked by contribution, descending, ties kept in catalog
/// order.
pub fn compute_risk_score(answers: &QuestionnaireAnswers) -> ReportScore {
    let mut contributions: Vec<(&'static Question, Answer, u8)> = answers
        .iter()
        .map(|(question, answer)| (question, answer, contribution(question.weight, answer)))
        .collect();

    let total: u32 = contributions.iter().map(|(_, _, pts)| u32::from(*pts)).sum();
    // Weights sum to 100, so the clamp is a safety invariant, not a normal path
    let risk_score = total.min(100) as u8;

    // Stable sort preserves catalog order for equal contributions
    contributions.sort_by(|a, b| b.2.cmp(&a.2));

    let main_drivers = contributions
        .iter()
        .filter(|(_, _, pts)| *pts > 0)
        .map(|(question, answer, pts)| {
            let answer_text = match answer {
                Answer::Yes => "yes",
                Answer::Partial => "partial",
                Answer::No => "no",
                Answer::Unknown => "unknown",
            };
            format!(
                "{}: answered {}, +{} risk points",
                question.topic, answer_text, pts
            )
        })
        .collect();

    ReportScore {
        risk_score,
        risk_level: RiskLevel::for_score(risk_score),
        confidence: confidence_for(answers.unknown_count()),
        main_drivers,
    }
}
