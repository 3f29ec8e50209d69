//! Redacted previews of secret values for diagnostic logs.

use crate::constants::redaction::{ELLIPSIS, EMPTY_MARKER, PREVIEW_CHARS};

/// First five characters, `...`, then the total character count.
///
/// `abcdef123` renders as `abcde...9`; an empty value renders as `(empty)`.
/// Counting is by `char`, so a preview never splits a code point.
pub fn redacted_preview(value: &str) -> String {
    if value.is_empty() {
        return EMPTY_MARKER.to_string();
    }

    let head: String = value.chars().take(PREVIEW_CHARS).collect();
    format!("{head}{ELLIPSIS}{}", value.chars().count())
}
