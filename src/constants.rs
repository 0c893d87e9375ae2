//! # Constants
//!
//! Centralized constants for magic values used throughout issuepost.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Environment
// =============================================================================

/// Environment variable naming the JSON event payload file.
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

// =============================================================================
// Issue Body Sections
// =============================================================================

/// Heading marker that opens a section in the issue body.
pub const SECTION_MARKER: &str = "### ";

/// Section holding the post content.
pub const SECTION_CONTENT: &str = "正文";

/// Section holding comma/newline separated tags.
pub const SECTION_TAGS: &str = "标签（tags）";

/// Section holding comma/newline separated categories.
pub const SECTION_CATEGORIES: &str = "分类（categories）";

/// Optional section holding the display date.
pub const SECTION_DATE: &str = "发布时间（可选）";

/// Text issue forms render for an unanswered optional field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "_No response_";

// =============================================================================
// Post Format
// =============================================================================

/// YAML frontmatter delimiter.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Format of the default `date:` value (local time).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum filename base length in characters (not bytes).
pub const MAX_FILENAME_LENGTH: usize = 120;

/// Characters that are replaced with a hyphen in filenames.
pub const UNSAFE_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

// =============================================================================
// File System
// =============================================================================

/// File extension for post files.
pub const POST_FILE_EXTENSION: &str = "md";

/// Default posts directory, relative to the project root.
pub const DEFAULT_POSTS_DIR: &str = "source/_posts";

/// Optional project configuration file name (inside the project root).
pub const PROJECT_CONFIG_FILE: &str = "issuepost.toml";
