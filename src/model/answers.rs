//! Questionnaire answers and business context
//!
//! Closed enums keep invalid states unrepresentable: an answer set is a
//! struct with exactly one field per catalog question, so completeness is
//! enforced by the type system rather than checked at runtime.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{Question, QuestionId};

/// Self-reported state of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    Partial,
    No,
    Unknown,
}

/// One answer per catalog question, no missing, no extra
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct QuestionnaireAnswers {
    pub mfa_email_admin: Answer,
    pub backups_data: Answer,
    pub patching_cadence: Answer,
    pub admin_access: Answer,
    pub password_management: Answer,
    pub phishing_training: Answer,
    pub endpoint_protection: Answer,
    pub disk_encryption: Answer,
    pub incident_response: Answer,
    pub logging_alerts: Answer,
}

impl QuestionnaireAnswers {
    /// The answer recorded for a given question
    pub fn get(&self, id: QuestionId) -> Answer {
        match id {
            QuestionId::MfaEmailAdmin => self.mfa_email_admin,
            QuestionId::BackupsData => self.backups_data,
            QuestionId::PatchingCadence => self.patching_cadence,
            QuestionId::AdminAccess => self.admin_access,
            QuestionId::PasswordManagement => self.password_management,
            QuestionId::PhishingTraining => self.phishing_training,
            QuestionId::EndpointProtection => self.endpoint_protection,
            QuestionId::DiskEncryption => self.disk_encryption,
            QuestionId::IncidentResponse => self.incident_response,
            QuestionId::LoggingAlerts => self.logging_alerts,
        }
    }

    /// Iterate question/answer pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&'static Question, Answer)> + '_ {
        Question::catalog().iter().map(|q| (q, self.get(q.id)))
    }

    /// Number of questions answered `unknown`
    pub fn unknown_count(&self) -> usize {
        self.iter().filter(|(_, a)| *a == Answer::Unknown).count()
    }
}

/// Employee headcount bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EmployeeCount {
    #[serde(rename = "1-10")]
    OneToTen,
    #[serde(rename = "11-50")]
    ElevenToFifty,
    #[serde(rename = "51-200")]
    FiftyOneToTwoHundred,
    #[serde(rename = "200+")]
    TwoHundredPlus,
}

/// How the company primarily works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Workstyle {
    Remote,
    Office,
    Hybrid,
}

/// Free-form business context captured once per submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessContext {
    pub company_name: String,
    pub industry: String,
    pub employee_count: EmployeeCount,
    pub primary_workstyle: Workstyle,
    /// e.g. Google Workspace, O365, AWS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack_focus: Option<String>,
}

/// Rejection reason for an unusable business context
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("company_name must not be empty")]
    EmptyCompanyName,
    #[error("industry must not be empty")]
    EmptyIndustry,
}

impl BusinessContext {
    /// Reject blank required fields before any generation work starts
    pub fn validate(&self) -> Result<(), ContextError> {
        if self.company_name.trim().is_empty() {
            return Err(ContextError::EmptyCompanyName);
        }
        if self.industry.trim().is_empty() {
            return Err(ContextError::EmptyIndustry);
        }
        Ok(())
    }
}

/// Test fixture: every question answered the same way
#[cfg(test)]
pub(crate) fn all_answers(answer: Answer) -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        mfa_email_admin: answer,
        backups_data: answer,
        patching_cadence: answer,
        admin_access: answer,
        password_management: answer,
        phishing_training: answer,
        endpoint_protection: answer,
        disk_encryption: answer,
        incident_response: answer,
        logging_alerts: answer,
    }
}
