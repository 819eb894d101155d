//! Free-text sanitization applied before any user text reaches storage.
//!
//! Strips anything capable of introducing script execution: markup-like
//! constructs, URLs with non-http(s)/mailto schemes, and control
//! characters. Sanitization is idempotent.

use regex::Regex;

const MARKUP_PATTERN: &str = r"<[^>]*>";
const SCHEME_PATTERN: &str = r"(?i)\b([a-z][a-z0-9+.\-]*):(?://)?[^\s<>]+";

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Sanitizes one free-text field.
pub fn sanitize_text(input: &str) -> String {
    let mut out: String = input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    if let Ok(re) = Regex::new(MARKUP_PATTERN) {
        out = re.replace_all(&out, "").into_owned();
    }

    if let Ok(re) = Regex::new(SCHEME_PATTERN) {
        out = re
            .replace_all(&out, |caps: &regex::Captures| {
                let scheme = caps[1].to_ascii_lowercase();
                if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                    caps[0].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();
    }

    out.trim().to_string()
}

/// Sanitizes an optional free-text field, dropping values that sanitize to
/// an empty string.
pub fn sanitize_optional(input: Option<String>) -> Option<String> {
    input
        .map(|text| sanitize_text(&text))
        .filter(|text| !text.is_empty())
}
