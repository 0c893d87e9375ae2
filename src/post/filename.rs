//! # Filename Sanitization
//!
//! Converts issue titles into filesystem-safe post filenames. Unlike a URL
//! slug the title stays readable: case, spaces and non-ASCII text are kept.
//!
//! ## Rules
//! 1. Drop control characters
//! 2. Replace `\ / : * ? " < > |` with hyphens
//! 3. Collapse whitespace runs to one space and trim
//! 4. Strip trailing dots
//! 5. Truncate to 120 characters and trim again
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::{MAX_FILENAME_LENGTH, UNSAFE_FILENAME_CHARS};

/// Sanitizes a title for use as a filename (without extension).
///
/// # Example
/// ```
/// use issuepost::post::filename::sanitize;
/// assert_eq!(sanitize("Hello/World:Test???"), "Hello-World-Test---");
/// ```
pub fn sanitize(title: &str) -> String {
    let replaced: String = title
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '-' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed
        .trim_end_matches('.')
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .collect();

    truncated.trim().to_string()
}

/// Returns the filename base for an issue: the sanitized title, or
/// `issue-{number}` when nothing usable is left.
pub fn filename_base(title: &str, number: u64) -> String {
    let base = sanitize(title);
    if base.is_empty() {
        format!("issue-{number}")
    } else {
        base
    }
}
