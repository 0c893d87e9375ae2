//! # Configuration
//!
//! Resolves where the event payload lives and where posts are written,
//! combining the environment, the optional `issuepost.toml` and CLI overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod project;

use std::{
    env,
    path::{Path, PathBuf},
};

pub use self::project::ProjectConfig;
use crate::{
    constants::EVENT_PATH_ENV,
    error::{Error, Result},
};

/// Values supplied on the command line that take precedence over everything else
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Event payload path (instead of `GITHUB_EVENT_PATH`)
    pub event_path: Option<PathBuf>,

    /// Project root (instead of the current directory)
    pub project_root: Option<PathBuf>,

    /// Posts directory, relative to the project root or absolute
    pub posts_dir: Option<PathBuf>,
}

/// Resolved configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON event payload
    pub event_path: PathBuf,

    /// Project configuration
    pub project: ProjectConfig,

    /// Resolved project root path
    pub project_root: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment and working directory
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let env_event_path = env::var_os(EVENT_PATH_ENV).map(PathBuf::from);
        Self::resolve(overrides, env_event_path)
    }

    /// Resolves configuration from explicit inputs.
    ///
    /// `env_event_path` is the value of `GITHUB_EVENT_PATH`, if any. An empty
    /// value counts as unset.
    pub fn resolve(overrides: ConfigOverrides, env_event_path: Option<PathBuf>) -> Result<Self> {
        let event_path = overrides
            .event_path
            .or(env_event_path)
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "{EVENT_PATH_ENV} is not set (or pass --event <PATH>)"
                ))
            })?;

        let project_root = match overrides.project_root {
            Some(root) => root,
            None => env::current_dir()
                .map_err(|e| Error::io("read current directory", Path::new("."), e))?,
        };

        let mut project = ProjectConfig::load(&project_root)?;
        if let Some(posts_dir) = overrides.posts_dir {
            project.posts_dir = posts_dir;
        }

        Ok(Self {
            event_path,
            project,
            project_root,
        })
    }

    /// Returns the posts directory path
    pub fn posts_path(&self) -> PathBuf {
        self.project.posts_path(&self.project_root)
    }

    /// Returns path relative to project root
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.project_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn overrides_in(root: &Path) -> ConfigOverrides {
        ConfigOverrides {
            project_root: Some(root.to_path_buf()),
            ..ConfigOverrides::default()
        }
    }

    #[test]
    fn test_missing_event_path() {
        let dir = tempdir().unwrap();
        let err = Config::resolve(overrides_in(dir.path()), None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_event_path_counts_as_unset() {
        let dir = tempdir().unwrap();
        let err = Config::resolve(overrides_in(dir.path()), Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_event_path_from_env() {
        let dir = tempdir().unwrap();
        let config =
            Config::resolve(overrides_in(dir.path()), Some(PathBuf::from("event.json"))).unwrap();
        assert_eq!(config.event_path, PathBuf::from("event.json"));
        assert_eq!(config.posts_path(), dir.path().join("source/_posts"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let dir = tempdir().unwrap();
        let overrides = ConfigOverrides {
            event_path: Some(PathBuf::from("cli.json")),
            project_root: Some(dir.path().to_path_buf()),
            posts_dir: Some(PathBuf::from("posts")),
        };
        let config = Config::resolve(overrides, Some(PathBuf::from("env.json"))).unwrap();
        assert_eq!(config.event_path, PathBuf::from("cli.json"));
        assert_eq!(config.posts_path(), dir.path().join("posts"));
    }

    #[test]
    fn test_relative_path() {
        let dir = tempdir().unwrap();
        let config =
            Config::resolve(overrides_in(dir.path()), Some(PathBuf::from("e.json"))).unwrap();
        let path = config.posts_path().join("Hello.md");
        assert_eq!(
            config.relative_path(&path),
            PathBuf::from("source/_posts/Hello.md")
        );
    }
}
