// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

// --- Assessment Levels ---

/// Strength bucket of a password, derived from its score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Verdict of the URL analyzer, derived from its risk level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UrlSafety {
    Safe,
    Suspicious,
    Dangerous,
}

/// Risk bucket of an email, derived from its clamped risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmailRiskLevel {
    Low,
    Medium,
    High,
}

/// Completion flag of a learning module record. Serialized as "yes"/"no".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Completion {
    Yes,
    No,
}

// --- Analyzer Output ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAssessment {
    pub strength: PasswordStrength,
    /// Always within 0..=100.
    pub score: u8,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlAssessment {
    #[serde(rename = "isSafe")]
    pub safety: UrlSafety,
    /// Not clamped: stacked rules can push it past 100.
    pub risk_level: u32,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAssessment {
    /// Clamped to 100.
    pub risk_score: u8,
    pub risk_level: EmailRiskLevel,
    pub detected_threats: Vec<String>,
}

// --- Stored Records ---
// Identity and timestamps are assigned by the store, never by the analyzers.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheck {
    pub id: u64,
    /// Non-secret `hash_<length>_<score>` fingerprint. The password itself is never kept.
    pub password_hash: String,
    #[serde(flatten)]
    pub assessment: PasswordAssessment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlCheck {
    pub id: u64,
    pub url: String,
    #[serde(flatten)]
    pub assessment: UrlAssessment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailCheck {
    pub id: u64,
    pub email_content: String,
    #[serde(flatten)]
    pub assessment: EmailAssessment,
    pub created_at: DateTime<Utc>,
}

/// A completion submitted for a learning module, before the store assigns it an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCompletion {
    pub module_id: String,
    pub completed: Completion,
    pub quiz_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: u64,
    pub module_id: String,
    pub completed: Completion,
    pub quiz_score: Option<u8>,
    pub completed_at: DateTime<Utc>,
}

/// Anything kept in a check history. Used to order histories most-recent-first.
pub trait HistoryEntry {
    fn id(&self) -> u64;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_history_entry {
    ($($ty:ty),*) => {
        $(impl HistoryEntry for $ty {
            fn id(&self) -> u64 { self.id }
            fn created_at(&self) -> DateTime<Utc> { self.created_at }
        })*
    };
}

impl_history_entry!(PasswordCheck, UrlCheck, EmailCheck);

// --- Main Report ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub completed_modules: usize,
    pub total_modules: usize,
    pub average_quiz_score: u8,
}

/// The composite view built from every check history and the learning progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub total_checks: usize,
    pub password_checks: Vec<PasswordCheck>,
    pub url_checks: Vec<UrlCheck>,
    pub email_checks: Vec<EmailCheck>,
    pub learning_progress: LearningProgress,
    pub overall_security_score: u8,
}
