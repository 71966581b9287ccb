// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for confshift
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for confshift operations
#[derive(Error, Debug)]
pub enum ShiftError {
    /// The configuration is not at the version the spec converts from
    #[error("Version mismatch: spec converts from version {expected}, config is at version {found}")]
    VersionMismatch { expected: u32, found: u32 },

    /// A path pair has a different number of wildcards on each side
    #[error("Wildcard mismatch in path: {source_path:?} -> {dest_path:?}")]
    WildcardMismatch {
        source_path: String,
        dest_path: String,
    },

    /// A key along a source path is missing (strict mode only)
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// A post-processing hook rejected the working tree
    #[error("Post-processing failed: {0}")]
    PostProcess(String),

    /// Malformed spec document
    #[error("Spec error: {0}")]
    Spec(String),

    /// Malformed configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShiftError {
    /// Whether this error comes from the data being converted rather than
    /// from a broken spec or environment.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, ShiftError::PathNotFound(_))
    }
}

/// Result type alias for confshift operations
pub type Result<T> = std::result::Result<T, ShiftError>;

impl From<toml::de::Error> for ShiftError {
    fn from(err: toml::de::Error) -> Self {
        ShiftError::Toml(err.to_string())
    }
}
