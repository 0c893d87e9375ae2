//! # Commands
//!
//! CLI command implementations for issuepost.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod convert;

pub use self::convert::{convert, execute, Conversion, ConvertArgs};
