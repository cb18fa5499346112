// src/core/storage.rs

//! In-memory persistence for check results and learning progress.
//!
//! The store is the only place ids and timestamps are assigned. Nothing survives a restart.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::analyzer::{analyze_email, analyze_password, analyze_url};
use crate::core::knowledge_base::{self, LearningModule};
use crate::core::models::{
    EmailCheck, ModuleCompletion, PasswordCheck, ProgressRecord, SecurityReport, UrlCheck,
};
use crate::core::report::{compute_security_report, newest_first};

/// Only this many characters of an analyzed email are kept.
pub const STORED_EMAIL_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The named input was blank; nothing was analyzed.
    #[error("{0} is required")]
    EmptyInput(&'static str),
    #[error("Module not found: {0}")]
    UnknownModule(String),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    password_checks: Vec<PasswordCheck>,
    url_checks: Vec<UrlCheck>,
    email_checks: Vec<EmailCheck>,
    progress: Vec<ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Analyzes and records a password. Only a length/score fingerprint is stored.
    pub fn record_password(&mut self, password: &str) -> Result<PasswordCheck, StoreError> {
        if password.is_empty() {
            return Err(StoreError::EmptyInput("Password"));
        }
        let assessment = analyze_password(password);
        let check = PasswordCheck {
            id: self.allocate_id(),
            password_hash: format!("hash_{}_{}", password.chars().count(), assessment.score),
            assessment,
            created_at: Utc::now(),
        };
        info!(id = check.id, strength = %check.assessment.strength, "Password check recorded.");
        self.password_checks.push(check.clone());
        Ok(check)
    }

    pub fn record_url(&mut self, url: &str) -> Result<UrlCheck, StoreError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::EmptyInput("URL"));
        }
        let check = UrlCheck {
            id: self.allocate_id(),
            url: url.to_string(),
            assessment: analyze_url(url),
            created_at: Utc::now(),
        };
        info!(
            id = check.id,
            safety = %check.assessment.safety,
            risk_level = check.assessment.risk_level,
            "URL check recorded."
        );
        self.url_checks.push(check.clone());
        Ok(check)
    }

    /// Analyzes the full text but keeps only the first [`STORED_EMAIL_CHARS`] characters.
    pub fn record_email(&mut self, content: &str) -> Result<EmailCheck, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::EmptyInput("Email content"));
        }
        let check = EmailCheck {
            id: self.allocate_id(),
            email_content: content.chars().take(STORED_EMAIL_CHARS).collect(),
            assessment: analyze_email(content),
            created_at: Utc::now(),
        };
        info!(
            id = check.id,
            risk_level = %check.assessment.risk_level,
            risk_score = check.assessment.risk_score,
            "Email check recorded."
        );
        self.email_checks.push(check.clone());
        Ok(check)
    }

    pub fn password_checks(&self) -> Vec<PasswordCheck> {
        newest_first(&self.password_checks)
    }

    pub fn url_checks(&self) -> Vec<UrlCheck> {
        newest_first(&self.url_checks)
    }

    pub fn email_checks(&self) -> Vec<EmailCheck> {
        newest_first(&self.email_checks)
    }

    pub fn learning_modules(&self) -> &'static [LearningModule] {
        knowledge_base::all_modules()
    }

    pub fn learning_module(&self, id: &str) -> Option<&'static LearningModule> {
        knowledge_base::get_module(id)
    }

    pub fn record_progress(
        &mut self,
        completion: ModuleCompletion,
    ) -> Result<ProgressRecord, StoreError> {
        if self.learning_module(&completion.module_id).is_none() {
            warn!(module_id = %completion.module_id, "Progress for unknown module rejected.");
            return Err(StoreError::UnknownModule(completion.module_id));
        }
        let record = ProgressRecord {
            id: self.allocate_id(),
            module_id: completion.module_id,
            completed: completion.completed,
            quiz_score: completion.quiz_score.map(|score| score.min(100)),
            completed_at: Utc::now(),
        };
        info!(
            module_id = %record.module_id,
            quiz_score = ?record.quiz_score,
            "Learning progress recorded."
        );
        self.progress.push(record.clone());
        Ok(record)
    }

    /// All progress records in insertion order.
    pub fn progress(&self) -> &[ProgressRecord] {
        &self.progress
    }

    pub fn security_report(&self) -> SecurityReport {
        compute_security_report(
            &self.password_checks(),
            &self.url_checks(),
            &self.email_checks(),
            &self.progress,
            self.learning_modules().len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Completion, PasswordStrength, UrlSafety};

    #[test]
    fn password_is_never_stored() {
        let mut store = MemoryStore::new();
        let check = store.record_password("Abcdefgh1234!xyz").unwrap();
        assert_eq!(check.password_hash, "hash_16_100");
        assert_eq!(check.assessment.strength, PasswordStrength::Strong);
        let json = serde_json::to_string(&store.password_checks()).unwrap();
        assert!(!json.contains("Abcdefgh1234!xyz"));
    }

    #[test]
    fn blank_inputs_are_rejected() {
        let mut store = MemoryStore::new();
        assert_eq!(store.record_password(""), Err(StoreError::EmptyInput("Password")));
        assert_eq!(store.record_url("   "), Err(StoreError::EmptyInput("URL")));
        assert_eq!(store.record_email("\n"), Err(StoreError::EmptyInput("Email content")));
        assert_eq!(store.security_report().total_checks, 0);
    }

    #[test]
    fn errors_render_user_facing_messages() {
        assert_eq!(StoreError::EmptyInput("URL").to_string(), "URL is required");
        assert_eq!(
            StoreError::UnknownModule("nope".into()).to_string(),
            "Module not found: nope"
        );
    }

    #[test]
    fn histories_are_newest_first() {
        let mut store = MemoryStore::new();
        store.record_url("https://example.com").unwrap();
        store.record_url("not a url").unwrap();
        let urls = store.url_checks();
        assert_eq!(urls[0].url, "not a url");
        assert_eq!(urls[1].assessment.safety, UrlSafety::Safe);
    }

    #[test]
    fn email_content_is_truncated() {
        let mut store = MemoryStore::new();
        let long = "é".repeat(800);
        let check = store.record_email(&long).unwrap();
        assert_eq!(check.email_content.chars().count(), STORED_EMAIL_CHARS);
    }

    #[test]
    fn unknown_module_progress_is_rejected() {
        let mut store = MemoryStore::new();
        let result = store.record_progress(ModuleCompletion {
            module_id: "nope".into(),
            completed: Completion::Yes,
            quiz_score: Some(100),
        });
        assert_eq!(result, Err(StoreError::UnknownModule("nope".into())));
        assert!(store.progress().is_empty());
    }

    #[test]
    fn report_uses_catalogue_size() {
        let mut store = MemoryStore::new();
        store
            .record_progress(ModuleCompletion {
                module_id: "public-wifi".into(),
                completed: Completion::Yes,
                quiz_score: Some(50),
            })
            .unwrap();
        let report = store.security_report();
        assert_eq!(report.learning_progress.total_modules, 6);
        assert_eq!(report.learning_progress.completed_modules, 1);
        assert_eq!(report.learning_progress.average_quiz_score, 50);
    }
}
