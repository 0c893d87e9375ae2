//! # Section Extraction
//!
//! Issue forms render each field as a `### <Heading>` line followed by the
//! answer. This module pulls those answers back out of the issue body.
//!
//! ## Rules
//! 1. A section starts at a line that is exactly `### ` + heading
//!    (trailing whitespace allowed)
//! 2. It ends before the next line starting with `### `, or at end of text
//! 3. Headings are compared literally, never as patterns
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::{
    NO_RESPONSE_PLACEHOLDER, SECTION_CATEGORIES, SECTION_CONTENT, SECTION_DATE, SECTION_MARKER,
    SECTION_TAGS,
};

/// Returns the trimmed text under `### {heading}`, or an empty string if the
/// heading does not appear in `body`.
///
/// # Example
/// ```
/// use issuepost::post::sections::extract_section;
/// let body = "### 正文\nHello\n### 标签（tags）\nrust";
/// assert_eq!(extract_section(body, "正文"), "Hello");
/// ```
pub fn extract_section(body: &str, heading: &str) -> String {
    let mut offset = 0;
    let mut start = None;

    for line in body.split_inclusive('\n') {
        let line_end = offset + line.len();
        match start {
            None if is_heading(line, heading) => start = Some(line_end),
            Some(section_start) if line.starts_with(SECTION_MARKER) => {
                return body[section_start..offset].trim().to_string();
            }
            _ => {}
        }
        offset = line_end;
    }

    start.map_or_else(String::new, |section_start| {
        body[section_start..].trim().to_string()
    })
}

fn is_heading(line: &str, heading: &str) -> bool {
    line.strip_prefix(SECTION_MARKER)
        .and_then(|rest| rest.strip_prefix(heading))
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Splits a tag/category list on commas and newlines.
///
/// Pieces are trimmed, empty pieces dropped, order kept, duplicates kept.
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// The named sections of one issue body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    /// Post content; the whole body when the issue has no content section
    pub content: String,

    /// Tags in the order given
    pub tags: Vec<String>,

    /// Categories in the order given
    pub categories: Vec<String>,

    /// Explicit display date, if one was supplied
    pub date: Option<String>,
}

impl Sections {
    /// Extracts every known section from an issue body.
    pub fn extract(body: &str) -> Self {
        let content = answer(body, SECTION_CONTENT);

        Self {
            content: if content.is_empty() {
                body.to_string()
            } else {
                content
            },
            tags: split_list(&answer(body, SECTION_TAGS)),
            categories: split_list(&answer(body, SECTION_CATEGORIES)),
            date: Some(answer(body, SECTION_DATE)).filter(|date| !date.is_empty()),
        }
    }
}

/// Like [`extract_section`], but an unanswered form field counts as empty.
fn answer(body: &str, heading: &str) -> String {
    let text = extract_section(body, heading);
    if text == NO_RESPONSE_PLACEHOLDER {
        String::new()
    } else {
        text
    }
}
