//! The fixed question catalog
//!
//! Ten security controls, each with a stable identifier and a risk weight.
//! This table is the single authority for weights: the questionnaire API and
//! the scoring engine both read it, so the two can never diverge.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable identifier for one control question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    MfaEmailAdmin,
    BackupsData,
    PatchingCadence,
    AdminAccess,
    PasswordManagement,
    PhishingTraining,
    EndpointProtection,
    DiskEncryption,
    IncidentResponse,
    LoggingAlerts,
}

/// One control question
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Question {
    pub id: QuestionId,
    /// Question text shown to the user
    pub label: &'static str,
    /// One-line explanation of the control
    pub description: &'static str,
    /// Short control name, used in deterministic driver text
    #[serde(skip)]
    pub topic: &'static str,
    /// Risk points contributed when the control is absent
    pub weight: u8,
}

/// Catalog in display order. Weights sum to exactly 100.
const CATALOG: [Question; 10] = [
    Question {
        id: QuestionId::MfaEmailAdmin,
        label: "Do you enforce Multi-Factor Authentication (MFA) on all email and admin accounts?",
        description: "MFA requires a second form of verification (like a code on your phone) to log in.",
        topic: "MFA for email and admin accounts",
        weight: 15,
    },
    Question {
        id: QuestionId::BackupsData,
        label: "Do you have automated, offline (or immutable) backups of critical business data?",
        description: "Backups should run automatically and be protected from ransomware deletion.",
        topic: "Backups",
        weight: 15,
    },
    Question {
        id: QuestionId::PatchingCadence,
        label: "Are operating systems and software updated automatically or at least monthly?",
        description: "Prompt patching prevents attackers from exploiting known vulnerabilities.",
        topic: "Patching cadence",
        weight: 12,
    },
    Question {
        id: QuestionId::AdminAccess,
        label: "Is administrator access restricted to only those who absolutely need it?",
        description: "Least privilege: Employees should only have access to what they need for their job.",
        topic: "Least privilege admin access",
        weight: 10,
    },
    Question {
        id: QuestionId::PasswordManagement,
        label: "Does the company use a Password Manager to generate and store unique passwords?",
        description: "Reusing passwords across sites is a major security risk.",
        topic: "Password management",
        weight: 10,
    },
    Question {
        id: QuestionId::PhishingTraining,
        label: "Do employees receive basic phishing awareness training?",
        description: "Training helps staff recognize suspicious emails and links.",
        topic: "Phishing awareness training",
        weight: 8,
    },
    Question {
        id: QuestionId::EndpointProtection,
        label: "Is Antivirus/Endpoint Detection & Response (EDR) installed on all devices?",
        description: "Modern protection tools block malware and suspicious behavior.",
        topic: "Endpoint protection",
        weight: 10,
    },
    Question {
        id: QuestionId::DiskEncryption,
        label: "Is full-disk encryption (BitLocker/FileVault) enabled on all laptops?",
        description: "Encryption protects data if a device is lost or stolen.",
        topic: "Disk encryption",
        weight: 8,
    },
    Question {
        id: QuestionId::IncidentResponse,
        label: "Do you have a basic plan for who to call if you get hacked?",
        description: "Knowing who to contact (IT, Insurance, Legal) saves critical time.",
        topic: "Incident response basics",
        weight: 6,
    },
    Question {
        id: QuestionId::LoggingAlerts,
        label: "Are logs collected for critical systems (email, login attempts)?",
        description: "Logs help you understand what happened during an incident.",
        topic: "Logging and alerts",
        weight: 6,
    },
];

impl Question {
    /// The full catalog in stable display order
    pub fn catalog() -> &'static [Question] {
        &CATALOG
    }

    /// Look up a single question by id
    pub fn get(id: QuestionId) -> &'static Question {
        CATALOG
            .iter()
            .find(|q| q.id == id)
            .unwrap_or_else(|| unreachable!("catalog covers every QuestionId"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: u32 = Question::catalog().iter().map(|q| u32::from(q.weight)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn catalog_has_ten_distinct_questions() {
        let catalog = Question::catalog();
        assert_eq!(catalog.len(), 10);
        for (i, q) in catalog.iter().enumerate() {
            assert!(
                catalog.iter().skip(i + 1).all(|other| other.id != q.id),
                "duplicate question id {:?}",
                q.id
            );
        }
    }

    #[test]
    fn ids_serialize_as_snake_case() {
        let id = serde_json::to_string(&QuestionId::MfaEmailAdmin).unwrap();
        assert_eq!(id, "\"mfa_email_admin\"");
    }

    #[test]
    fn get_returns_matching_entry() {
        let q = Question::get(QuestionId::BackupsData);
        assert_eq!(q.weight, 15);
    }
}
