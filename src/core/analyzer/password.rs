// src/core/analyzer/password.rs

use tracing::debug;

use crate::core::models::{PasswordAssessment, PasswordStrength};

pub const SUGGEST_LENGTH: &str = "Use at least 12 characters for better security";
pub const SUGGEST_LOWERCASE: &str = "Add lowercase letters";
pub const SUGGEST_UPPERCASE: &str = "Add uppercase letters";
pub const SUGGEST_DIGIT: &str = "Add numbers";
pub const SUGGEST_SPECIAL: &str = "Add special characters (!@#$%^&*)";
pub const PRAISE_STRONG: &str = "Excellent! Your password is strong";

const MAX_SCORE: u8 = 100;

/// Scores a password against five additive rules plus a length bonus.
///
/// Length is counted in characters, not bytes. Letter and digit classes are ASCII only;
/// anything outside `[a-zA-Z0-9]` counts as a special character.
pub fn analyze_password(password: &str) -> PasswordAssessment {
    let length = password.chars().count();
    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    if length >= 12 {
        score += 25;
    } else if length >= 8 {
        score += 15;
    } else {
        suggestions.push(SUGGEST_LENGTH.to_string());
    }

    let rules: [(fn(&char) -> bool, u8, &str); 4] = [
        (char::is_ascii_lowercase, 15, SUGGEST_LOWERCASE),
        (char::is_ascii_uppercase, 15, SUGGEST_UPPERCASE),
        (char::is_ascii_digit, 15, SUGGEST_DIGIT),
        (|c| !c.is_ascii_alphanumeric(), 20, SUGGEST_SPECIAL),
    ];
    for (matches, points, suggestion) in rules {
        if password.chars().any(|c| matches(&c)) {
            score += points;
        } else {
            suggestions.push(suggestion.to_string());
        }
    }

    if length >= 16 {
        score += 10;
    }

    let score = score.min(MAX_SCORE);
    let strength = strength_for(score);
    if strength == PasswordStrength::Strong {
        suggestions.push(PRAISE_STRONG.to_string());
    }

    debug!(length, score, %strength, "Password analyzed.");
    PasswordAssessment { strength, score, suggestions }
}

pub fn strength_for(score: u8) -> PasswordStrength {
    match score {
        70.. => PasswordStrength::Strong,
        40..=69 => PasswordStrength::Medium,
        _ => PasswordStrength::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_gets_every_deficiency() {
        let result = analyze_password("");
        assert_eq!(result.score, 0);
        assert_eq!(result.strength, PasswordStrength::Weak);
        assert_eq!(
            result.suggestions,
            vec![
                SUGGEST_LENGTH,
                SUGGEST_LOWERCASE,
                SUGGEST_UPPERCASE,
                SUGGEST_DIGIT,
                SUGGEST_SPECIAL,
            ]
        );
    }

    #[test]
    fn sixteen_mixed_characters_score_full_marks() {
        let result = analyze_password("Abcdefgh1234!xyz");
        assert_eq!(result.score, 100);
        assert_eq!(result.strength, PasswordStrength::Strong);
        assert_eq!(result.suggestions, vec![PRAISE_STRONG]);
    }

    #[test]
    fn eight_characters_get_partial_length_credit() {
        // 15 (length) + 15 (lower) + 15 (digit)
        let result = analyze_password("abcd1234");
        assert_eq!(result.score, 45);
        assert_eq!(result.strength, PasswordStrength::Medium);
        assert_eq!(result.suggestions, vec![SUGGEST_UPPERCASE, SUGGEST_SPECIAL]);
    }

    #[test]
    fn twelve_characters_without_bonus() {
        // 25 + 15 + 15 + 15 + 20
        let result = analyze_password("Abcdefgh12!x");
        assert_eq!(result.score, 90);
        assert_eq!(result.strength, PasswordStrength::Strong);
    }

    #[test]
    fn long_lowercase_only_is_medium() {
        // 25 + 15 + 10 bonus
        let result = analyze_password("abcdefghijklmnopqrst");
        assert_eq!(result.score, 50);
        assert_eq!(result.strength, PasswordStrength::Medium);
        assert!(!result.suggestions.contains(&PRAISE_STRONG.to_string()));
    }

    #[test]
    fn non_ascii_counts_as_special_and_by_character() {
        // Seven chars, eight bytes in UTF-8 would not reach the 8-char tier.
        let result = analyze_password("abcdefé");
        assert_eq!(result.score, 15 + 20);
        assert!(result.suggestions.contains(&SUGGEST_LENGTH.to_string()));
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(strength_for(0), PasswordStrength::Weak);
        assert_eq!(strength_for(39), PasswordStrength::Weak);
        assert_eq!(strength_for(40), PasswordStrength::Medium);
        assert_eq!(strength_for(69), PasswordStrength::Medium);
        assert_eq!(strength_for(70), PasswordStrength::Strong);
        assert_eq!(strength_for(100), PasswordStrength::Strong);
    }
}
