//! SSH Remote Shell
//!
//! Runs commands on the remote host via the system `ssh` binary.

use std::process::{Command, Stdio};

use crate::domain::ports::{RemoteOutput, RemoteShell, TransportError};

/// Remote shell implementation using `ssh`
///
/// stdin is inherited so password authentication keeps working when no key
/// agent is available.
pub struct SshShell {
    /// SSH destination (`user@host`)
    destination: String,
    port: u16,
}

impl SshShell {
    pub fn new(destination: impl Into<String>, port: u16) -> Self {
        Self {
            destination: destination.into(),
            port,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Check if ssh is installed and available
    pub fn check_available() -> bool {
        Command::new("ssh")
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl RemoteShell for SshShell {
    fn run(&self, command: &str) -> Result<RemoteOutput, TransportError> {
        let output = Command::new("ssh")
            .arg("-p")
            .arg(self.port.to_string())
            .arg(&self.destination)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| TransportError::Spawn(e.to_string()))?;

        Ok(RemoteOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        })
    }
}
