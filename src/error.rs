//! # Errors
//!
//! Error taxonomy for a conversion run. Every variant is fatal: the run
//! aborts on the first error and nothing is retried.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::Path};

use thiserror::Error;

/// Errors raised while turning an issue event into a post.
#[derive(Debug, Error)]
pub enum Error {
    /// Required input (environment variable, config file) is missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The event payload could not be read or parsed
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The event payload parsed but lacks the expected shape
    #[error("schema error: {0}")]
    Schema(String),

    /// File system failure while reading, writing or renaming
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O error with a message naming the path involved.
    pub fn io(action: &str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            context: format!("Failed to {action}: {}", path.display()),
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io(
            "write post",
            Path::new("source/_posts/Hello.md"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "Failed to write post: source/_posts/Hello.md");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "permission denied");
    }

    #[test]
    fn test_configuration_message() {
        let err = Error::Configuration("GITHUB_EVENT_PATH is not set".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: GITHUB_EVENT_PATH is not set"
        );
    }
}
