//! Text normalization for course-name comparison and grouping.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes a course name for comparison.
///
/// Decomposes to NFD and drops combining marks (so "molécules" and
/// "molecules" compare equal), strips every character that is not
/// alphanumeric or a space, collapses whitespace runs, trims, and lowercases.
pub fn normalize_course(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
