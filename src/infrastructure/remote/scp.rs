//! SCP File Transfer
//!
//! Copies the artifact to the remote host via the system `scp` binary. This
//! is a full-file overwrite of the destination path; there is no delta
//! transfer and no atomic rename.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{FileTransfer, TransportError};

/// File transfer implementation using `scp`
pub struct ScpTransfer {
    /// SSH destination (`user@host`)
    destination: String,
    port: u16,
    verbose: bool,
    quiet: bool,
}

impl ScpTransfer {
    pub fn new(destination: impl Into<String>, port: u16) -> Self {
        Self {
            destination: destination.into(),
            port,
            verbose: false,
            quiet: false,
        }
    }

    /// Pass `-v` through to scp
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Silence scp's own output (JSON mode)
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Check if scp is installed and available
    pub fn check_available() -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        Command::new("scp")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// `host:path` target argument for scp
    fn remote_target(&self, remote_path: &str) -> String {
        format!("{}:{}", self.destination, remote_path)
    }
}

impl FileTransfer for ScpTransfer {
    fn upload(&self, local: &Path, remote_path: &str) -> Result<i32, TransportError> {
        let mut cmd = Command::new("scp");
        cmd.arg("-P").arg(self.port.to_string());

        if self.verbose {
            cmd.arg("-v");
        }

        cmd.arg(local)
            .arg(self.remote_target(remote_path))
            .stdin(Stdio::inherit()); // Allow password input

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd
            .status()
            .map_err(|e| TransportError::Spawn(e.to_string()))?;

        // Killed by signal: no exit code, report as generic failure
        Ok(status.code().unwrap_or(1))
    }
}
