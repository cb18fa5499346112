// src/core/analyzer/email.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::RE_IPV4;
use crate::core::models::{EmailAssessment, EmailRiskLevel};

pub const URGENCY_PHRASES: &[&str] = &[
    "urgent",
    "immediate action",
    "verify now",
    "account locked",
    "suspended",
    "act now",
    "limited time",
    "expire",
    "confirm your",
    "unusual activity",
    "verify your account",
    "click here immediately",
    "security alert",
];

pub const GENERIC_GREETINGS: &[&str] =
    &["dear customer", "dear user", "dear member", "valued customer"];

pub const SENSITIVE_REQUESTS: &[&str] = &[
    "password",
    "credit card",
    "ssn",
    "social security",
    "bank account",
    "pin",
    "verification code",
    "cvv",
    "account number",
];

pub const COMMON_MISSPELLINGS: &[&str] =
    &["recieve", "occured", "untill", "seperate", "definately"];

pub const LEGAL_THREATS: &[&str] =
    &["legal action", "will be closed", "will be terminated", "face charges"];

pub const THREAT_GENERIC_GREETING: &str = "Uses generic greeting instead of your name";
pub const THREAT_IP_LINK: &str = "Link uses IP address instead of domain name";
pub const THREAT_MISSPELLING: &str = "Contains spelling errors (common in phishing)";
pub const VERDICT_CLEAN: &str = "No obvious phishing indicators detected";

/// More links than this is suspicious on its own.
const LINK_LIMIT: usize = 3;
const MAX_SCORE: u32 = 100;

static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// Scores free-form email text for phishing indicators.
///
/// Phrase lists are matched case-insensitively as plain substrings, so a phrase counts once
/// however often it occurs. The raw score is accumulated unclamped and clamped to 100 only
/// at the end; the risk level is read from the clamped value.
pub fn analyze_email(content: &str) -> EmailAssessment {
    let lowered = content.to_lowercase();
    let mut raw_score: u32 = 0;
    let mut threats = Vec::new();

    raw_score += scan_phrases(&lowered, URGENCY_PHRASES, 15, &mut threats, |phrase| {
        format!("Contains urgent/pressure language: \"{phrase}\"")
    });
    raw_score += scan_phrases(&lowered, GENERIC_GREETINGS, 10, &mut threats, |_| {
        THREAT_GENERIC_GREETING.to_string()
    });
    raw_score += scan_phrases(&lowered, SENSITIVE_REQUESTS, 20, &mut threats, |phrase| {
        format!("Requests sensitive information: \"{phrase}\"")
    });

    let links: Vec<&str> = RE_LINK.find_iter(content).map(|m| m.as_str()).collect();
    if links.len() > LINK_LIMIT {
        threats.push(format!("Contains multiple links ({})", links.len()));
        raw_score += 15;
    }
    for _ in links.iter().filter(|link| RE_IPV4.is_match(link)) {
        threats.push(THREAT_IP_LINK.to_string());
        raw_score += 25;
    }

    // Not deduplicated: two misspellings give two identical threats.
    raw_score += scan_phrases(&lowered, COMMON_MISSPELLINGS, 10, &mut threats, |_| {
        THREAT_MISSPELLING.to_string()
    });
    raw_score += scan_phrases(&lowered, LEGAL_THREATS, 15, &mut threats, |phrase| {
        format!("Contains threatening language: \"{phrase}\"")
    });

    let risk_score = raw_score.min(MAX_SCORE) as u8;
    let risk_level = risk_level_for(risk_score);
    if risk_level == EmailRiskLevel::Low && threats.is_empty() {
        threats.push(VERDICT_CLEAN.to_string());
    }

    debug!(raw_score, risk_score, %risk_level, links = links.len(), "Email analyzed.");
    EmailAssessment { risk_score, risk_level, detected_threats: threats }
}

/// Adds one threat per phrase present in `lowered` and returns the points earned.
fn scan_phrases(
    lowered: &str,
    phrases: &[&str],
    points: u32,
    threats: &mut Vec<String>,
    describe: impl Fn(&str) -> String,
) -> u32 {
    let mut earned = 0;
    for &phrase in phrases {
        if lowered.contains(phrase) {
            threats.push(describe(phrase));
            earned += points;
        }
    }
    earned
}

pub fn risk_level_for(risk_score: u8) -> EmailRiskLevel {
    match risk_score {
        50.. => EmailRiskLevel::High,
        25..=49 => EmailRiskLevel::Medium,
        _ => EmailRiskLevel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_clean() {
        let result = analyze_email("");
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, EmailRiskLevel::Low);
        assert_eq!(result.detected_threats, vec![VERDICT_CLEAN]);
    }

    #[test]
    fn five_urgency_phrases_are_high_risk() {
        let text = "URGENT: your account locked, act now, limited time, security alert";
        let result = analyze_email(text);
        assert_eq!(result.risk_score, 75);
        assert_eq!(result.risk_level, EmailRiskLevel::High);
        assert!(result
            .detected_threats
            .contains(&"Contains urgent/pressure language: \"account locked\"".to_string()));
    }

    #[test]
    fn low_score_with_findings_gets_no_clean_verdict() {
        let result = analyze_email("Dear customer, thanks for your order.");
        assert_eq!(result.risk_score, 10);
        assert_eq!(result.risk_level, EmailRiskLevel::Low);
        assert_eq!(result.detected_threats, vec![THREAT_GENERIC_GREETING]);
    }

    #[test]
    fn score_is_clamped_but_threats_are_kept() {
        let text = "Urgent! Dear customer, send your password, credit card and ssn \
                    or legal action follows and the account will be closed.";
        let result = analyze_email(text);
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, EmailRiskLevel::High);
        // urgent, greeting, password, credit card, ssn, legal action, will be closed
        assert_eq!(result.detected_threats.len(), 7);
    }

    #[test]
    fn link_count_and_ip_links() {
        let text = "see http://a.example http://b.example https://c.example http://10.0.0.1/pay";
        let result = analyze_email(text);
        // 15 (four links) + 25 (one IP link)
        assert_eq!(result.risk_score, 40);
        assert_eq!(result.risk_level, EmailRiskLevel::Medium);
        assert_eq!(
            result.detected_threats,
            vec!["Contains multiple links (4)".to_string(), THREAT_IP_LINK.to_string()]
        );
    }

    #[test]
    fn three_links_are_tolerated() {
        let result = analyze_email("http://a.example http://b.example http://c.example");
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.detected_threats, vec![VERDICT_CLEAN]);
    }

    #[test]
    fn each_ip_link_is_reported() {
        let result = analyze_email("http://1.2.3.4/a and https://5.6.7.8/b");
        assert_eq!(result.risk_score, 50);
        let ip_threats = result
            .detected_threats
            .iter()
            .filter(|t| t.as_str() == THREAT_IP_LINK)
            .count();
        assert_eq!(ip_threats, 2);
    }

    #[test]
    fn non_ascii_digit_quads_are_not_ip_links() {
        let result = analyze_email("see http://١٢٣.١.١.١/pay");
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.risk_level, EmailRiskLevel::Low);
        assert_eq!(result.detected_threats, vec![VERDICT_CLEAN]);
    }

    #[test]
    fn misspellings_repeat_the_generic_message() {
        let result = analyze_email("You will recieve it untill Friday");
        assert_eq!(result.risk_score, 20);
        assert_eq!(result.detected_threats, vec![THREAT_MISSPELLING, THREAT_MISSPELLING]);
    }

    #[test]
    fn matching_ignores_case() {
        for phrase in LEGAL_THREATS {
            let result = analyze_email(&phrase.to_uppercase());
            assert_eq!(
                result.detected_threats,
                vec![format!("Contains threatening language: \"{phrase}\"")]
            );
        }
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(risk_level_for(24), EmailRiskLevel::Low);
        assert_eq!(risk_level_for(25), EmailRiskLevel::Medium);
        assert_eq!(risk_level_for(49), EmailRiskLevel::Medium);
        assert_eq!(risk_level_for(50), EmailRiskLevel::High);
    }
}
