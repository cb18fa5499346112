// src/core/analyzer/url.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use super::RE_IPV4;
use crate::core::models::{UrlAssessment, UrlSafety};

/// Hosts of common link shorteners, matched as substrings of the hostname.
pub const SHORTENER_DOMAINS: &[&str] = &["bit.ly", "tinyurl.com", "goo.gl", "ow.ly", "t.co"];

/// Brand keywords attackers like to embed in look-alike hostnames.
pub const BRAND_KEYWORDS: &[&str] =
    &["paypal", "amazon", "apple", "microsoft", "google", "facebook", "bank"];

pub const THREAT_INVALID: &str = "Invalid URL format";
pub const THREAT_NO_HTTPS: &str = "Not using secure HTTPS protocol";
pub const THREAT_SHORTENER: &str = "URL shortener detected (can hide real destination)";
pub const THREAT_BRAND_MIMICRY: &str = "Domain name mimics legitimate service";
pub const VERDICT_SAFE: &str = "URL appears to be safe";

static RE_LOGIN_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(login|verify|account|secure|update).*\.(com|net|org)").unwrap());
static RE_LONG_RANDOM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{20,}").unwrap());

/// Pattern checks run against the whole URL string, 15 points each.
static URL_PATTERNS: Lazy<[(&'static Regex, &'static str); 3]> = Lazy::new(|| {
    [
        (&*RE_IPV4, "Uses IP address instead of domain"),
        (&*RE_LOGIN_KEYWORD, "Contains suspicious login-related keywords"),
        (&*RE_LONG_RANDOM, "Contains unusually long random strings"),
    ]
});

const PATTERN_POINTS: u32 = 15;

/// Rates a URL for phishing risk using syntactic checks only.
///
/// Nothing is resolved or fetched. A string that does not parse as an absolute URL with a
/// host is reported as dangerous with a risk level of 100 and no other checks run.
pub fn analyze_url(input: &str) -> UrlAssessment {
    let parsed = match Url::parse(input) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| !host.is_empty()) => parsed,
        _ => {
            debug!("URL rejected as malformed.");
            return UrlAssessment {
                safety: UrlSafety::Dangerous,
                risk_level: 100,
                threats: vec![THREAT_INVALID.to_string()],
            };
        }
    };
    let hostname = parsed.host_str().unwrap_or_default();

    let mut risk_level: u32 = 0;
    let mut threats = Vec::new();

    if parsed.scheme() != "https" {
        threats.push(THREAT_NO_HTTPS.to_string());
        risk_level += 30;
    }

    for (pattern, message) in URL_PATTERNS.iter() {
        if pattern.is_match(input) {
            threats.push(message.to_string());
            risk_level += PATTERN_POINTS;
        }
    }
    if input.contains('@') {
        threats.push("Contains @ symbol (possible phishing technique)".to_string());
        risk_level += PATTERN_POINTS;
    }
    // One hit no matter how many hyphens.
    if input.contains('-') {
        threats.push("Multiple hyphens in domain (common in phishing)".to_string());
        risk_level += PATTERN_POINTS;
    }

    if SHORTENER_DOMAINS.iter().any(|shortener| hostname.contains(shortener)) {
        threats.push(THREAT_SHORTENER.to_string());
        risk_level += 20;
    }

    if mimics_brand(hostname) {
        threats.push(THREAT_BRAND_MIMICRY.to_string());
        risk_level += 40;
    }

    let safety = safety_for(risk_level);
    if safety == UrlSafety::Safe {
        threats.push(VERDICT_SAFE.to_string());
    }

    debug!(host = hostname, risk_level, %safety, "URL analyzed.");
    UrlAssessment { safety, risk_level, threats }
}

/// True when the hostname embeds a brand keyword but is not `<keyword>.com` itself.
/// A single flat penalty applies however many keywords match.
fn mimics_brand(hostname: &str) -> bool {
    BRAND_KEYWORDS.iter().any(|keyword| {
        hostname.contains(keyword) && !hostname.ends_with(&format!("{keyword}.com"))
    })
}

pub fn safety_for(risk_level: u32) -> UrlSafety {
    match risk_level {
        50.. => UrlSafety::Dangerous,
        20..=49 => UrlSafety::Suspicious,
        _ => UrlSafety::Safe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_invalid() {
        let result = analyze_url("not a url");
        assert_eq!(result.safety, UrlSafety::Dangerous);
        assert_eq!(result.risk_level, 100);
        assert_eq!(result.threats, vec![THREAT_INVALID]);
    }

    #[test]
    fn scheme_without_host_is_invalid() {
        let result = analyze_url("mailto:someone");
        assert_eq!(result.threats, vec![THREAT_INVALID]);
    }

    #[test]
    fn non_ascii_digits_are_not_an_ip_address() {
        let result = analyze_url("https://example.com/١٢٣.١.١.١");
        assert_eq!(result.risk_level, 0);
        assert_eq!(result.threats, vec![VERDICT_SAFE]);
    }

    #[test]
    fn clean_https_url_is_safe() {
        let result = analyze_url("https://example.com");
        assert_eq!(result.safety, UrlSafety::Safe);
        assert_eq!(result.risk_level, 0);
        assert_eq!(result.threats, vec![VERDICT_SAFE]);
    }

    #[test]
    fn http_ip_address_accumulates() {
        // 30 (http) + 15 (IP). "login" has no .com/.net/.org after it.
        let result = analyze_url("http://192.168.1.1/login");
        assert_eq!(result.risk_level, 45);
        assert_eq!(result.safety, UrlSafety::Suspicious);
        assert!(result.threats.contains(&THREAT_NO_HTTPS.to_string()));
        assert!(result.threats.contains(&"Uses IP address instead of domain".to_string()));
    }

    #[test]
    fn hyphens_are_counted_once() {
        let one = analyze_url("https://a-b.example.org");
        let many = analyze_url("https://a-b-c-d-e.example.org");
        assert_eq!(one.risk_level, 15);
        assert_eq!(many.risk_level, 15);
        assert_eq!(one.safety, UrlSafety::Safe);
        assert_eq!(
            one.threats,
            vec!["Multiple hyphens in domain (common in phishing)", VERDICT_SAFE]
        );
    }

    #[test]
    fn brand_on_own_domain_is_not_mimicry() {
        let result = analyze_url("https://paypal.com");
        assert!(!result.threats.contains(&THREAT_BRAND_MIMICRY.to_string()));
        assert_eq!(result.risk_level, 0);
    }

    #[test]
    fn several_brands_add_a_single_mimicry_penalty() {
        let result = analyze_url("https://paypal-amazon.example.net");
        let mimicry = result
            .threats
            .iter()
            .filter(|t| t.as_str() == THREAT_BRAND_MIMICRY)
            .count();
        assert_eq!(mimicry, 1);
        // 15 (hyphen) + 40 (mimicry)
        assert_eq!(result.risk_level, 55);
        assert_eq!(result.safety, UrlSafety::Dangerous);
    }

    #[test]
    fn every_shortener_is_detected() {
        for shortener in SHORTENER_DOMAINS {
            let result = analyze_url(&format!("https://{shortener}/x"));
            assert!(
                result.threats.contains(&THREAT_SHORTENER.to_string()),
                "{shortener} not detected"
            );
        }
    }

    #[test]
    fn every_brand_keyword_is_detected_off_domain() {
        for keyword in BRAND_KEYWORDS {
            let result = analyze_url(&format!("https://{keyword}.example.net"));
            assert!(
                result.threats.contains(&THREAT_BRAND_MIMICRY.to_string()),
                "{keyword} not detected"
            );
        }
    }

    #[test]
    fn risk_level_is_not_clamped() {
        // 30 + 15 (login .com) + 15 (long run) + 15 (@) + 15 (-) + 20 (bit.ly) + 40 (paypal)
        let result =
            analyze_url("http://user@paypal-login.bit.ly.com/abcdefghijklmnopqrstuvwxyz");
        assert_eq!(result.risk_level, 150);
        assert_eq!(result.safety, UrlSafety::Dangerous);
    }

    #[test]
    fn safety_thresholds() {
        assert_eq!(safety_for(19), UrlSafety::Safe);
        assert_eq!(safety_for(20), UrlSafety::Suspicious);
        assert_eq!(safety_for(49), UrlSafety::Suspicious);
        assert_eq!(safety_for(50), UrlSafety::Dangerous);
        assert_eq!(safety_for(165), UrlSafety::Dangerous);
    }
}
