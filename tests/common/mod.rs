//! # Test Harness
//!
//! Provides a throwaway blog project for integration tests: a temp directory
//! holding the event payload and the posts directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use issuepost::{commands, Config, ConfigOverrides};
use tempfile::TempDir;

/// Test environment with a temporary project root.
pub struct TestEnv {
    /// Temporary directory acting as the blog project root
    pub project_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment with an empty project root.
    pub fn new() -> Self {
        Self {
            project_dir: TempDir::new().expect("Failed to create temp project dir"),
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path to the posts directory.
    pub fn posts_path(&self) -> PathBuf {
        self.project_path().join("source").join("_posts")
    }

    /// Returns the path the event payload is written to.
    pub fn event_path(&self) -> PathBuf {
        self.project_path().join("event.json")
    }

    /// Writes a raw event payload.
    pub fn write_event_json(&self, json: &str) {
        fs::write(self.event_path(), json).expect("Failed to write event payload");
    }

    /// Writes an issue event payload.
    pub fn write_event(&self, number: u64, title: &str, body: &str) {
        let payload = serde_json::json!({
            "action": "opened",
            "issue": { "number": number, "title": title, "body": body },
        });
        self.write_event_json(&payload.to_string());
    }

    /// Writes a file into the posts directory and returns its path.
    pub fn write_post(&self, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(self.posts_path()).expect("Failed to create posts dir");
        let path = self.posts_path().join(name);
        fs::write(&path, content).expect("Failed to write post");
        path
    }

    /// Reads a post by file name.
    pub fn read_post(&self, name: &str) -> String {
        fs::read_to_string(self.posts_path().join(name)).expect("Failed to read post")
    }

    /// Returns the sorted file names in the posts directory.
    pub fn post_names(&self) -> Vec<String> {
        if !self.posts_path().exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(self.posts_path())
            .expect("Failed to read posts dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs git inside the project directory and returns its stdout, or
    /// `None` if git is unavailable or the command fails.
    pub fn git(&self, args: &[&str]) -> Option<String> {
        Command::new("git")
            .current_dir(self.project_path())
            .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Resolves a configuration for this project.
    pub fn config(&self) -> Config {
        Config::resolve(
            ConfigOverrides {
                project_root: Some(self.project_path().to_path_buf()),
                ..ConfigOverrides::default()
            },
            Some(self.event_path()),
        )
        .expect("config should resolve")
    }

    /// Runs a conversion and returns the written post's file name.
    pub fn convert(&self) -> String {
        let conversion = commands::convert(&self.config(), false).expect("convert should succeed");
        conversion
            .path()
            .file_name()
            .expect("post path has a file name")
            .to_string_lossy()
            .into_owned()
    }
}

/// Builds an issue-form body from the four sections.
pub fn form_body(content: &str, tags: &str, categories: &str, date: &str) -> String {
    format!(
        "### 正文\n\n{content}\n\n### 标签（tags）\n\n{tags}\n\n### 分类（categories）\n\n{categories}\n\n### 发布时间（可选）\n\n{date}\n"
    )
}
