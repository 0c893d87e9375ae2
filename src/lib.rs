//! # issuepost
//!
//! Turns issue tracker submissions into Markdown blog posts.
//!
//! Each issue becomes one Markdown file with YAML front matter in the blog's
//! posts directory. Re-running for the same issue rewrites that file, renaming
//! it when the title changed.
//!
//! ## Features
//!
//! - **Issue forms**: `### <Heading>` sections become content, tags, categories and date
//! - **Stable identity**: every post carries an `issue: <number>` line
//! - **Safe filenames**: titles are sanitized, collisions disambiguated
//! - **Git aware**: renames use `git mv` for tracked posts
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod post;
pub mod storage;
pub mod ui;

pub use config::{Config, ConfigOverrides};
pub use error::{Error, Result};
pub use event::Issue;
pub use post::{FrontMatter, Post, Sections};
