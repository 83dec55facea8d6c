// ABOUTME: Configuration error type for environment loading and validation
// ABOUTME: Distinguishes unparsable values from values outside their allowed range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A probability or ratio outside its interval
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment value that does not parse
    #[error("Parse error: {0}")]
    Parse(String),

    /// A limit or size that must be positive
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
