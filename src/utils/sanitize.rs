//! Plain-text sanitization for single-line form input.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Sanitizes a single-line text field.
///
/// - Strips HTML tags
/// - Removes control characters
/// - Collapses runs of whitespace, including newlines and tabs, into one space
/// - Trims leading and trailing whitespace
///
/// Percent-encoded octets are left untouched.
pub fn sanitize_text_field(input: &str) -> String {
    let without_tags = TAG.replace_all(input, "");

    let without_controls: String = without_tags
        .chars()
        .map(|c| {
            if matches!(c, '\n' | '\r' | '\t') {
                ' '
            } else {
                c
            }
        })
        .filter(|c| !c.is_control())
        .collect();

    WHITESPACE_RUN
        .replace_all(&without_controls, " ")
        .trim()
        .to_string()
}
