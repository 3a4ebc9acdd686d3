//! Error types for cfgcompat operations.
//!
//! This module defines [`CheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing key or unparsable found version is not an error: it becomes
//!   an [`Unknown`](crate::compat::Verdict::Unknown) verdict in the report
//! - Bad rule arguments and unreadable config files are errors and abort the
//!   check before any comparison runs
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::version::ParseError;

/// Core error type for cfgcompat operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration file not found at the given location.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Config format was not given and could not be inferred.
    #[error("Cannot determine config format for {path}; pass --config-type")]
    UnknownFormat { path: PathBuf },

    /// The version key path is malformed.
    #[error("Invalid version key '{key}'")]
    InvalidKeyPath { key: String },

    /// The version key is absent from the configuration.
    #[error("Version key '{key}' not found in configuration file")]
    MissingKey { key: String },

    /// A version string could not be parsed.
    #[error(transparent)]
    InvalidVersion(#[from] ParseError),

    /// The selected rule is missing or has unusable reference versions.
    #[error("Invalid rule arguments: {message}")]
    InvalidRule { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cfgcompat operations.
pub type Result<T> = std::result::Result<T, CheckError>;
