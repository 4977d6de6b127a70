//! Error types for Dashpush
//!
//! Uses `thiserror` for the crate-level error enum. Only two conditions are
//! fatal to a deploy run: a missing local artifact and a failed transfer.
//! Backup and verification problems degrade to warnings and never appear
//! here.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransportError;

/// Result type alias for Dashpush operations
pub type DashpushResult<T> = Result<T, DashpushError>;

/// Main error type for Dashpush operations
#[derive(Error, Debug)]
pub enum DashpushError {
    /// Local artifact absent; checked before any remote call
    #[error("artifact not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// The transfer process exited non-zero
    #[error("transfer failed with exit code {code}")]
    TransferFailed { code: i32 },

    /// The transfer or backup process could not be spawned at all
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Interactive input failed (closed stdin, not a terminal)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Invalid config file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashpushError {
    /// Process exit code for this error.
    ///
    /// A failed transfer exits with the transfer mechanism's own code;
    /// everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TransferFailed { code } => *code,
            _ => 1,
        }
    }
}
