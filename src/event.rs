//! # Event Reader
//!
//! Loads the issue event payload written by the CI runner and normalizes it
//! into an [`Issue`]. Only `issues` events are supported.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// The issue fields a post is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Stable issue number, always positive
    pub number: u64,

    /// Trimmed title (may be empty)
    pub title: String,

    /// Trimmed body (may be empty)
    pub body: String,
}

/// Loosely typed `issue` object as it appears in the payload.
/// Every field is optional here and validated in [`Issue::from_raw`].
#[derive(Debug, Deserialize)]
struct RawIssue {
    #[serde(default)]
    number: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    body: Value,
}

impl Issue {
    /// Reads and parses the event payload at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::InvalidData => Error::MalformedInput(format!(
                "Cannot read event payload {}: {e}",
                path.display()
            )),
            _ => Error::io("read event payload", path, e),
        })?;

        Self::from_json(&content)
    }

    /// Parses an event payload from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(content)
            .map_err(|e| Error::MalformedInput(format!("Event payload is not valid JSON: {e}")))?;

        let issue = payload
            .get("issue")
            .filter(|issue| issue.is_object())
            .ok_or_else(|| {
                Error::Schema(
                    "Event payload has no `issue` object; only issue events are supported"
                        .to_string(),
                )
            })?;

        let raw: RawIssue = serde_json::from_value(issue.clone())
            .map_err(|e| Error::Schema(format!("Invalid `issue` object: {e}")))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawIssue) -> Result<Self> {
        let number = raw
            .number
            .as_u64()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                Error::Schema(format!(
                    "`issue.number` must be a positive integer, got {}",
                    raw.number
                ))
            })?;

        Ok(Self {
            number,
            title: text_of(&raw.title).trim().to_string(),
            body: text_of(&raw.body).trim().to_string(),
        })
    }
}

/// Coerces a JSON value to text: strings as-is, `null` as empty,
/// anything else as its JSON representation.
fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
