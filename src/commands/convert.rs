//! # Convert Command
//!
//! Turns the issue in the event payload into a post file: read the event,
//! extract the sections, build the post, find where it belongs, write it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use log::{debug, info};

use crate::{
    config::{Config, ConfigOverrides},
    error::Result,
    event::Issue,
    post::{self, frontmatter::stored_date, Post, Sections},
    storage::{self, Placement, Relocation},
    ui,
};

/// Arguments for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub overrides: ConfigOverrides,
    pub dry_run: bool,
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The rendered post
    pub post: Post,

    /// Where the post was (or, on a dry run, would be) written
    pub placement: Placement,

    /// Whether anything was written
    pub written: bool,
}

impl Conversion {
    /// Path of the post file
    pub fn path(&self) -> &Path {
        &self.placement.target
    }
}

/// Executes the convert command.
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = Config::load(args.overrides)?;
    let conversion = convert(&config, args.dry_run)?;

    if let Relocation::Stranded { from } = &conversion.placement.relocation {
        ui::print_warnings(&[format!(
            "{} already exists; previous post {} was left in place",
            config.relative_path(conversion.path()).display(),
            config.relative_path(from).display()
        )]);
    }

    let verb = if conversion.written {
        "Wrote"
    } else {
        "Would write"
    };
    ui::print_success(verb, &config, conversion.path());

    Ok(())
}

/// Converts the configured event into a post.
///
/// With `dry_run` the target is resolved but nothing is created, renamed or
/// written.
pub fn convert(config: &Config, dry_run: bool) -> Result<Conversion> {
    let issue = Issue::load(&config.event_path)?;
    debug!("loaded issue #{} from {}", issue.number, config.event_path.display());

    let sections = Sections::extract(&issue.body);

    let posts_dir = config.posts_path();
    if !dry_run {
        storage::ensure_dir(&posts_dir)?;
    }

    let existing = storage::find_by_issue(&posts_dir, issue.number)?;
    let previous_date = existing
        .as_ref()
        .and_then(|stored| stored_date(&stored.content));

    let post = Post::new(&issue, sections, || {
        previous_date.unwrap_or_else(post::default_date)
    });

    let placement = storage::locate(
        &posts_dir,
        &post.filename_base(),
        issue.number,
        existing.as_ref().map(|stored| stored.path.as_path()),
    )?;

    if dry_run {
        return Ok(Conversion {
            post,
            placement,
            written: false,
        });
    }

    storage::relocate(&placement)?;
    post.save(&placement.target)?;
    info!(
        "issue #{} written to {}",
        issue.number,
        placement.target.display()
    );

    Ok(Conversion {
        post,
        placement,
        written: true,
    })
}
