//! # YAML Front Matter
//!
//! Renders the front matter block of a post and reads back the few fields a
//! re-run needs from an existing post file.
//!
//! Output is written by hand rather than through a serializer so the field
//! order, quoting and the `issue: <number>` identity line stay byte-stable.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde_yml::Value;

use crate::constants::FRONTMATTER_DELIMITER;

/// Metadata emitted at the top of every post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Post title (quoted on output)
    pub title: String,

    /// Display date, emitted verbatim
    pub date: String,

    /// Source issue number; doubles as the identity marker
    pub issue: u64,

    /// Tags, omitted when empty
    pub tags: Vec<String>,

    /// Categories, omitted when empty
    pub categories: Vec<String>,
}

impl FrontMatter {
    /// Renders the block, from the opening `---` to the closing `---`
    /// (no trailing newline).
    pub fn render(&self) -> String {
        let mut lines = vec![
            FRONTMATTER_DELIMITER.to_string(),
            format!("title: {}", quote(&self.title)),
            format!("date: {}", self.date),
            issue_marker(self.issue),
        ];
        push_list(&mut lines, "tags", &self.tags);
        push_list(&mut lines, "categories", &self.categories);
        lines.push(FRONTMATTER_DELIMITER.to_string());

        lines.join("\n")
    }
}

fn push_list(lines: &mut Vec<String>, key: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    lines.push(format!("{key}:"));
    lines.extend(values.iter().map(|value| format!("  - {}", quote(value))));
}

/// Wraps a value in double quotes, escaping what would break a
/// single-line YAML double-quoted scalar.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// The line that ties a post file to its issue.
pub fn issue_marker(number: u64) -> String {
    format!("issue: {number}")
}

/// Returns true if any line of `content` is `issue: {number}`
/// (surrounding whitespace tolerated).
pub fn has_issue_marker(content: &str, number: u64) -> bool {
    let number = number.to_string();
    content.lines().any(|line| {
        line.trim()
            .strip_prefix("issue:")
            .is_some_and(|value| value.trim() == number)
    })
}

/// Extracts the YAML between the opening and closing delimiters, if the
/// content starts with front matter.
fn split_yaml(content: &str) -> Option<&str> {
    let after_start = content.trim_start().strip_prefix(FRONTMATTER_DELIMITER)?;
    let end_pos = after_start.find(&format!("\n{FRONTMATTER_DELIMITER}"))?;
    Some(&after_start[..end_pos])
}

/// Reads the `date` value from an existing post's front matter.
///
/// Returns `None` when the file has no front matter, the YAML does not
/// parse, or the date is missing or not a scalar.
pub fn stored_date(content: &str) -> Option<String> {
    let yaml = split_yaml(content)?;
    let front_matter: Value = serde_yml::from_str(yaml).ok()?;

    let date = match front_matter.get("date")? {
        Value::String(date) => date.clone(),
        Value::Number(date) => date.to_string(),
        _ => return None,
    };

    Some(date).filter(|date| !date.trim().is_empty())
}
