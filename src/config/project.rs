//! # Project Configuration
//!
//! Handles the optional project-level configuration stored at `issuepost.toml`
//! in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    constants::{DEFAULT_POSTS_DIR, PROJECT_CONFIG_FILE},
    error::{Error, Result},
};

/// Project configuration stored at issuepost.toml in the project root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding the posts, relative to the project root (default: "source/_posts")
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
        }
    }
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from(DEFAULT_POSTS_DIR)
}

impl ProjectConfig {
    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config, falling back to defaults when the file is absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| Error::io("read project config", &path, e))?;

        toml::from_str(&content).map_err(|e| {
            Error::Configuration(format!(
                "Failed to parse project config {}: {e}",
                path.display()
            ))
        })
    }

    /// Returns the full path to the posts directory
    pub fn posts_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.posts_dir)
    }
}
