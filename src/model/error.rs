//! Error taxonomy for lognav.
//!
//! Hierarchical errors built on `thiserror`, composing via `?` and `From`.
//! Malformed log *content* is never an error: classification, timestamp
//! extraction, and session reconstruction are total functions that degrade to
//! empty/default values. Errors here cover the boundaries only: reading input,
//! talking to collaborator services, and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Everything below converts into this via `From`, so the binary's main path
/// can propagate with `?` and report once at the top.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the raw log input.
    #[error("failed to read input: {0}")]
    Input(#[from] InputError),

    /// A collaborator service call failed in a way the caller chose not to
    /// absorb. Most service failures are absorbed at the call site and
    /// degrade to empty results (see `service` module).
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// Configuration loading failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing initialization failed.
    #[error("logging setup error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Serializing computed results for output failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors reading raw log input from the filesystem.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given log file does not exist.
    #[error("log file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure while reading the file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the external collaborator services.
///
/// These are expected-and-handled at the analysis layer: a failing session
/// listing triggers the local reconstruction fallback, a failing graph fetch
/// yields an empty graph. They only surface as `AppError` when the caller has
/// no meaningful degradation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The endpoint is not provided by this backend.
    #[error("endpoint unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but the response was unusable.
    #[error("bad response from {endpoint}: {reason}")]
    BadResponse {
        /// Which endpoint misbehaved.
        endpoint: String,
        /// What was wrong with the payload.
        reason: String,
    },
}

/// Errors loading the TOML configuration file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}
