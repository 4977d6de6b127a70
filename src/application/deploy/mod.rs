//! Deploy use case
//!
//! The one pipeline this tool runs: preflight, backup, transfer, verify.

mod options;
mod use_case;


pub use options::DeployOptions;
pub use use_case::{backup_command, shell_quote, DeployUseCase, VERIFY_TIMEOUT};
