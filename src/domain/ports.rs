//! Deploy Ports
//!
//! Abstracts the three external collaborators (remote shell, file-transfer
//! channel, HTTP client) plus interactive input, so the use case can be
//! exercised with fakes and no real network.

use std::path::Path;
use std::time::Duration;

/// Error from an external transport.
///
/// This covers spawn and wire failures only. A process that ran and exited
/// non-zero is reported through its exit code, not through this type.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// Process could not be spawned (missing binary, permissions)
    Spawn(String),
    /// IO error talking to the child process
    Io(String),
    /// HTTP request failed before a status was received (timeout, TLS, DNS)
    Http(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "failed to spawn: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Http(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Exit code and captured stdout of a remote command
#[derive(Debug, Clone)]
pub struct RemoteOutput {
    pub code: i32,
    pub stdout: String,
}

impl RemoteOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run a command on the remote host over an authenticated channel
pub trait RemoteShell {
    /// Execute `command` remotely, returning its exit code and output.
    fn run(&self, command: &str) -> Result<RemoteOutput, TransportError>;
}

/// Copy a local file to a path on the remote host
pub trait FileTransfer {
    /// Transfer `local` to `remote_path`, returning the transfer process's
    /// exit code. `Ok(0)` is the only success value.
    fn upload(&self, local: &Path, remote_path: &str) -> Result<i32, TransportError>;
}

/// Issue a time-bounded HTTP GET
pub trait HttpProbe {
    /// Fetch `url`, returning the response status code.
    fn get(&self, url: &str, timeout: Duration) -> Result<u16, TransportError>;
}

/// Provide interactive input for missing connection parameters
pub trait Prompter {
    /// Ask the operator for a value.
    fn ask(&self, prompt: &str) -> std::io::Result<String>;
}
