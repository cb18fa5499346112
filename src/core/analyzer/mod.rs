// src/core/analyzer/mod.rs

//! Heuristic analyzers. Each one is a pure function of its input: no I/O, no clock,
//! no shared state, so the same input always yields the same assessment.

pub mod email;
pub mod password;
pub mod url;

use once_cell::sync::Lazy;
use regex::Regex;

pub use self::email::analyze_email;
pub use self::password::analyze_password;
pub use self::url::analyze_url;

/// A dotted quad of ASCII digits anywhere in the text. Octet ranges are not validated.
pub(crate) static RE_IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}").unwrap());
