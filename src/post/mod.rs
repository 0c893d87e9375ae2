//! # Post
//!
//! A blog post built from one issue: YAML front matter followed by the
//! Markdown content.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod filename;
pub mod frontmatter;
pub mod sections;

use std::{fs, path::Path};

use chrono::Local;

pub use self::{
    filename::{filename_base, sanitize},
    frontmatter::{has_issue_marker, FrontMatter},
    sections::{extract_section, split_list, Sections},
};
use crate::{
    constants::DATE_FORMAT,
    error::{Error, Result},
    event::Issue,
};

/// A complete post with front matter and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// YAML front matter
    pub front_matter: FrontMatter,

    /// Markdown content
    pub content: String,
}

impl Post {
    /// Builds the post for `issue` from its extracted sections.
    ///
    /// `date` is only used when the issue did not supply its own.
    pub fn new(issue: &Issue, sections: Sections, date: impl FnOnce() -> String) -> Self {
        Self {
            front_matter: FrontMatter {
                title: issue.title.clone(),
                date: sections.date.unwrap_or_else(date),
                issue: issue.number,
                tags: sections.tags,
                categories: sections.categories,
            },
            content: sections.content,
        }
    }

    /// Returns the filename base (without extension) for this post
    pub fn filename_base(&self) -> String {
        filename_base(&self.front_matter.title, self.front_matter.issue)
    }

    /// Returns the full file content
    pub fn render(&self) -> String {
        format!("{}\n\n{}\n", self.front_matter.render(), self.content)
    }

    /// Writes the post to `path`, replacing whatever was there
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| Error::io("write post", path, e))
    }
}

/// Current local time in the default `date:` format
pub fn default_date() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: &str, body: &str) -> Issue {
        Issue {
            number: 7,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_post() {
        let issue = issue("Hello", "### 正文\nHi there\n### 标签（tags）\na, b");
        let post = Post::new(&issue, Sections::extract(&issue.body), || {
            "2024-01-02 03:04:05".to_string()
        });
        assert_eq!(
            post.render(),
            "---\ntitle: \"Hello\"\ndate: 2024-01-02 03:04:05\nissue: 7\ntags:\n  - \"a\"\n  - \"b\"\n---\n\nHi there\n"
        );
    }

    #[test]
    fn test_explicit_date_wins() {
        let issue = issue("Hello", "### 正文\nx\n### 发布时间（可选）\n2020-01-01");
        let post = Post::new(&issue, Sections::extract(&issue.body), || {
            unreachable!("explicit date should be used")
        });
        assert_eq!(post.front_matter.date, "2020-01-01");
    }

    #[test]
    fn test_filename_base() {
        let post = Post::new(&issue("A/B", ""), Sections::default(), String::new);
        assert_eq!(post.filename_base(), "A-B");

        let post = Post::new(&issue("", ""), Sections::default(), String::new);
        assert_eq!(post.filename_base(), "issue-7");
    }

    #[test]
    fn test_default_date_format() {
        let date = default_date();
        let bytes = date.as_bytes();
        assert_eq!(date.len(), 19);
        for (i, b) in bytes.iter().enumerate() {
            match i {
                4 | 7 => assert_eq!(*b, b'-'),
                10 => assert_eq!(*b, b' '),
                13 | 16 => assert_eq!(*b, b':'),
                _ => assert!(b.is_ascii_digit(), "unexpected {date}"),
            }
        }
        assert!(chrono::NaiveDateTime::parse_from_str(&date, DATE_FORMAT).is_ok());
    }
}
