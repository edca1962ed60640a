//! Error types for workshop-eol-report operations.
//!
//! This module defines [`EolReportError`], the primary error type used
//! throughout the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EolReportError` for fatal errors that end the whole invocation
//! - Use `anyhow::Error` (via `EolReportError::Other`) in the HTTP fetch
//!   path, where failures are downgraded to per-product report entries
//! - Per-product lookup failures never surface here; they become
//!   `{"error": ...}` entries in the report instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workshop-eol-report operations.
#[derive(Debug, Error)]
pub enum EolReportError {
    /// `TOOLBOX_ACTION` was missing or not a known action.
    #[error("set TOOLBOX_ACTION=describe|execute")]
    UsageError,

    /// Standard input was present but not a valid JSON parameter object.
    #[error("invalid parameters on stdin: {message}")]
    ParamsParseError { message: String },

    /// A discovered manifest could not be read.
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for workshop-eol-report operations.
pub type Result<T> = std::result::Result<T, EolReportError>;
