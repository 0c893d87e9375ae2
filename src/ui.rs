//! # UI Utilities
//!
//! Terminal output shared by the commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::config::Config;

/// Prints a success message with a post path.
///
/// Format: `✓ {verb} post: {relative_path}`
pub fn print_success(verb: &str, config: &Config, path: &Path) {
    println!(
        "{} {} post: {}",
        "✓".green(),
        verb,
        config.relative_path(path).display()
    );
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}
