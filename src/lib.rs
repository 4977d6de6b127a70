//! Dashpush - single-file dashboard deploy tool
//!
//! Dashpush performs one complete deploy-and-verify cycle for a single local
//! static file against a single remote destination: timestamped remote
//! backup (best-effort), scp upload, then a bounded HTTP check of the
//! resulting public URL. Only a missing artifact or a failed transfer can
//! fail the run.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOptions, DeployUseCase};
pub use config::{Config, DeployConfig};
pub use domain::{
    BackupStatus, DeployOutcome, DeployRequest, FileTransfer, HttpProbe, Prompter, RemoteShell,
    VerifyStatus,
};
pub use error::{DashpushError, DashpushResult};
