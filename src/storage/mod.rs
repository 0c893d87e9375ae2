//! # Storage
//!
//! Finds the post that belongs to an issue and decides where it should live.
//!
//! The posts directory is the only state: there is no index, every run scans
//! the directory afresh. Runs against the same directory must not overlap;
//! nothing here locks.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod git;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::{
    constants::POST_FILE_EXTENSION,
    error::{Error, Result},
    post::has_issue_marker,
};

/// A post file already on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPost {
    /// Where the file lives
    pub path: PathBuf,

    /// File content (lossily decoded)
    pub content: String,
}

/// What happens to an existing post before the new content is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    /// Nothing to move: no existing post, or it already sits at the target
    None,

    /// The existing post is renamed to the target
    Rename { from: PathBuf },

    /// The target is occupied, so the existing post is left where it is
    Stranded { from: PathBuf },
}

/// The resolved destination for a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// File that will receive the post
    pub target: PathBuf,

    /// What to do with the previously written post, if any
    pub relocation: Relocation,
}

/// Creates the posts directory if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io("create directory", dir, e))
}

/// Lists the Markdown files directly inside `dir`, in file-name order.
///
/// A missing directory has no posts.
pub fn walk_posts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.map_err(|e| Error::io("scan posts directory", dir, io::Error::from(e)))?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == POST_FILE_EXTENSION)
        {
            posts.push(entry.into_path());
        }
    }

    Ok(posts)
}

/// Reads a post file, replacing invalid UTF-8.
pub fn read_post(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io("read post", path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Finds the first post carrying the `issue: {number}` marker.
pub fn find_by_issue(dir: &Path, number: u64) -> Result<Option<StoredPost>> {
    for path in walk_posts(dir)? {
        let content = read_post(&path)?;
        if has_issue_marker(&content, number) {
            debug!("issue #{number} already has post {}", path.display());
            return Ok(Some(StoredPost { path, content }));
        }
    }

    debug!("issue #{number} has no post yet");
    Ok(None)
}

/// Picks the file for `base`, appending `-{number}` when `{base}.md` is
/// taken by a post for another issue.
pub fn target_path(
    dir: &Path,
    base: &str,
    number: u64,
    existing: Option<&Path>,
) -> Result<PathBuf> {
    let candidate = dir.join(format!("{base}.{POST_FILE_EXTENSION}"));

    let taken_by_other = candidate.is_file()
        && existing != Some(candidate.as_path())
        && !has_issue_marker(&read_post(&candidate)?, number);

    if taken_by_other {
        debug!(
            "{} belongs to another issue, disambiguating with #{number}",
            candidate.display()
        );
        return Ok(dir.join(format!("{base}-{number}.{POST_FILE_EXTENSION}")));
    }

    Ok(candidate)
}

/// Resolves where the post for `number` goes and whether an existing post
/// must be renamed there.
pub fn locate(
    dir: &Path,
    base: &str,
    number: u64,
    existing: Option<&Path>,
) -> Result<Placement> {
    let target = target_path(dir, base, number, existing)?;

    let relocation = match existing {
        Some(from) if from != target.as_path() => {
            if target.exists() {
                Relocation::Stranded {
                    from: from.to_path_buf(),
                }
            } else {
                Relocation::Rename {
                    from: from.to_path_buf(),
                }
            }
        }
        _ => Relocation::None,
    };

    Ok(Placement { target, relocation })
}

/// Performs the rename decided by [`locate`], if any.
pub fn relocate(placement: &Placement) -> Result<()> {
    if let Relocation::Rename { from } = &placement.relocation {
        debug!(
            "renaming {} -> {}",
            from.display(),
            placement.target.display()
        );
        git::move_file(from, &placement.target)?;
    }
    Ok(())
}
