// src/core/report.rs

use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::debug;

use crate::core::models::{
    Completion, EmailCheck, EmailRiskLevel, HistoryEntry, LearningProgress, PasswordCheck,
    PasswordStrength, ProgressRecord, SecurityReport, UrlCheck, UrlSafety,
};

/// How many of each check type the report shows.
pub const RECENT_CHECKS: usize = 5;

const BASE_SCORE: f64 = 50.0;
const STRONG_PASSWORD_BONUS: f64 = 15.0;
const SAFE_URL_BONUS: f64 = 10.0;
const LOW_RISK_EMAIL_BONUS: f64 = 10.0;
const MAX_LEARNING_BONUS: f64 = 15.0;

/// Builds the security report from complete histories.
///
/// Histories may arrive in any order; each is sorted most-recent-first here before the
/// latest [`RECENT_CHECKS`] are kept. Check bonuses are presence tests: one strong password
/// earns the same as ten.
pub fn compute_security_report(
    password_history: &[PasswordCheck],
    url_history: &[UrlCheck],
    email_history: &[EmailCheck],
    completion_history: &[ProgressRecord],
    total_modules: usize,
) -> SecurityReport {
    let completed_modules = completion_history
        .iter()
        .filter(|p| p.completed == Completion::Yes)
        .map(|p| p.module_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let quiz_scores: Vec<f64> = completion_history
        .iter()
        .filter_map(|p| p.quiz_score)
        .map(f64::from)
        .collect();
    let average_quiz_score = if quiz_scores.is_empty() {
        0
    } else {
        (quiz_scores.iter().sum::<f64>() / quiz_scores.len() as f64).round() as u8
    };

    let mut score = BASE_SCORE;
    if password_history.iter().any(|c| c.assessment.strength == PasswordStrength::Strong) {
        score += STRONG_PASSWORD_BONUS;
    }
    if url_history.iter().any(|c| c.assessment.safety == UrlSafety::Safe) {
        score += SAFE_URL_BONUS;
    }
    if email_history.iter().any(|c| c.assessment.risk_level == EmailRiskLevel::Low) {
        score += LOW_RISK_EMAIL_BONUS;
    }
    score += learning_bonus(completed_modules, total_modules);
    let overall_security_score = score.round().clamp(0.0, 100.0) as u8;

    let total_checks = password_history.len() + url_history.len() + email_history.len();
    debug!(total_checks, completed_modules, overall_security_score, "Security report computed.");

    SecurityReport {
        total_checks,
        password_checks: most_recent(password_history),
        url_checks: most_recent(url_history),
        email_checks: most_recent(email_history),
        learning_progress: LearningProgress {
            completed_modules,
            total_modules,
            average_quiz_score,
        },
        overall_security_score,
    }
}

/// Share of completed modules scaled to the learning bonus. Zero modules means no bonus.
fn learning_bonus(completed_modules: usize, total_modules: usize) -> f64 {
    if total_modules == 0 {
        return 0.0;
    }
    (completed_modules as f64 / total_modules as f64 * MAX_LEARNING_BONUS).min(MAX_LEARNING_BONUS)
}

/// A copy of `history` with the newest entries first, ties broken by the later id.
pub(crate) fn newest_first<T: HistoryEntry + Clone>(history: &[T]) -> Vec<T> {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|entry| Reverse((entry.created_at(), entry.id())));
    sorted
}

fn most_recent<T: HistoryEntry + Clone>(history: &[T]) -> Vec<T> {
    let mut sorted = newest_first(history);
    sorted.truncate(RECENT_CHECKS);
    sorted
}

/// Coarse reading of the overall score, with the advice shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Excellent,
    GoodStart,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => ScoreRating::Excellent,
            40..=69 => ScoreRating::GoodStart,
            _ => ScoreRating::NeedsImprovement,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent! You're maintaining strong security practices.",
            ScoreRating::GoodStart => {
                "Good start! Keep improving your security knowledge and practices."
            }
            ScoreRating::NeedsImprovement => {
                "You need to improve your security practices. Complete more checks and learning modules."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::{analyze_email, analyze_password, analyze_url};
    use chrono::{Duration, TimeZone, Utc};

    fn at(minutes: i64) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 7, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn password_check(id: u64, password: &str, minutes: i64) -> PasswordCheck {
        let assessment = analyze_password(password);
        PasswordCheck {
            id,
            password_hash: format!("hash_{}_{}", password.len(), assessment.score),
            assessment,
            created_at: at(minutes),
        }
    }

    fn url_check(id: u64, url: &str) -> UrlCheck {
        UrlCheck { id, url: url.to_string(), assessment: analyze_url(url), created_at: at(0) }
    }

    fn email_check(id: u64, content: &str) -> EmailCheck {
        EmailCheck {
            id,
            email_content: content.to_string(),
            assessment: analyze_email(content),
            created_at: at(0),
        }
    }

    fn progress(
        id: u64,
        module_id: &str,
        completed: Completion,
        quiz_score: Option<u8>,
    ) -> ProgressRecord {
        ProgressRecord {
            id,
            module_id: module_id.to_string(),
            completed,
            quiz_score,
            completed_at: at(0),
        }
    }

    #[test]
    fn empty_histories_give_the_base_score() {
        let report = compute_security_report(&[], &[], &[], &[], 0);
        assert_eq!(report.overall_security_score, 50);
        assert_eq!(report.total_checks, 0);
        assert_eq!(report.learning_progress, LearningProgress::default());
    }

    #[test]
    fn everything_good_caps_at_hundred() {
        let passwords = [password_check(1, "Abcdefgh1234!xyz", 0)];
        let urls = [url_check(2, "https://example.com")];
        let emails = [email_check(3, "Hi Sam, lunch tomorrow?")];
        let completions = [
            progress(4, "a", Completion::Yes, Some(100)),
            progress(5, "b", Completion::Yes, Some(50)),
        ];
        let report = compute_security_report(&passwords, &urls, &emails, &completions, 2);
        assert_eq!(report.overall_security_score, 100);
        assert_eq!(report.total_checks, 3);
        assert_eq!(report.learning_progress.completed_modules, 2);
        assert_eq!(report.learning_progress.average_quiz_score, 75);
    }

    #[test]
    fn bonuses_are_presence_tests() {
        let passwords: Vec<_> =
            (0..10).map(|i| password_check(i, "Abcdefgh1234!xyz", i as i64)).collect();
        let report = compute_security_report(&passwords, &[], &[], &[], 6);
        assert_eq!(report.overall_security_score, 65);
    }

    #[test]
    fn repeated_completions_count_once() {
        let completions = [
            progress(1, "safe-browsing", Completion::Yes, Some(50)),
            progress(2, "safe-browsing", Completion::Yes, Some(100)),
            progress(3, "public-wifi", Completion::No, None),
        ];
        let report = compute_security_report(&[], &[], &[], &completions, 6);
        assert_eq!(report.learning_progress.completed_modules, 1);
        assert_eq!(report.learning_progress.average_quiz_score, 75);
        // 50 + 1/6 * 15 = 52.5, rounded half up
        assert_eq!(report.overall_security_score, 53);
    }

    #[test]
    fn only_the_five_newest_checks_are_kept() {
        // Deliberately shuffled input.
        let passwords: Vec<_> = [3, 0, 6, 1, 5, 2, 4]
            .into_iter()
            .map(|i| password_check(i, "short", i as i64))
            .collect();
        let report = compute_security_report(&passwords, &[], &[], &[], 6);
        let ids: Vec<u64> = report.password_checks.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2]);
        assert_eq!(report.total_checks, 7);
    }

    #[test]
    fn weak_results_earn_nothing() {
        let passwords = [password_check(1, "abc", 0)];
        let urls = [url_check(2, "not a url")];
        let emails = [email_check(3, "URGENT: verify your account password now")];
        let report = compute_security_report(&passwords, &urls, &emails, &[], 6);
        assert_eq!(report.overall_security_score, 50);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(70), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(69), ScoreRating::GoodStart);
        assert_eq!(ScoreRating::from_score(40), ScoreRating::GoodStart);
        assert_eq!(ScoreRating::from_score(39), ScoreRating::NeedsImprovement);
    }
}
