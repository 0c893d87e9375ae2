//! # Git Integration
//!
//! Moves post files with `git mv` when they are tracked so the post's history
//! follows a title change.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::debug;

use crate::error::{Error, Result};

/// Runs a quiet git command inside `dir` and reports whether it succeeded.
fn git_succeeds(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Checks if `dir` is inside a git work tree.
fn is_git_repo(dir: &Path) -> bool {
    git_succeeds(dir, &["rev-parse", "--is-inside-work-tree"])
}

/// Checks if a file is tracked by git.
///
/// Returns `false` if the file is untracked, ignored, or outside a repository.
fn is_tracked(dir: &Path, path: &Path) -> bool {
    git_succeeds(dir, &["ls-files", "--error-unmatch", &path.to_string_lossy()])
}

/// Resolves `path` to an absolute path whose parent directory exists.
fn absolute(path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent =
        fs::canonicalize(parent).map_err(|e| Error::io("resolve directory", parent, e))?;
    Ok(match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    })
}

/// Moves a file, using `git mv` if tracked, otherwise a plain rename.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    let from_abs = absolute(from)?;
    let to_abs = absolute(to)?;
    let dir = from_abs.parent().unwrap_or_else(|| Path::new("/"));

    if is_git_repo(dir) && is_tracked(dir, &from_abs) {
        debug!("git mv {} -> {}", from_abs.display(), to_abs.display());
        let moved = Command::new("git")
            .arg("-C")
            .arg(dir)
            .arg("mv")
            .arg(&from_abs)
            .arg(&to_abs)
            .stdout(Stdio::null())
            .status()
            .is_ok_and(|s| s.success());

        if moved {
            return Ok(());
        }
        // git mv failed unexpectedly - fall back to standard rename
    }

    fs::rename(from, to).map_err(|e| Error::Io {
        context: format!("Failed to move {} to {}", from.display(), to.display()),
        source: e,
    })
}
