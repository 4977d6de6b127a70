//! Deploy Use Case
//!
//! Orchestrates the deploy flow:
//! 1. Preflight: the local artifact must exist (no remote calls before this)
//! 2. Remote backup of the existing target (best-effort)
//! 3. Transfer the artifact (fatal on failure)
//! 4. HTTP verification of the public URL (best-effort)
//!
//! The flow is linear with no back-edges. Overall success is decided by the
//! transfer step alone.

use std::time::Duration;

use crate::domain::outcome::{BackupStatus, DeployOutcome, VerifyStatus};
use crate::domain::ports::{FileTransfer, HttpProbe, RemoteShell};
use crate::domain::request::DeployRequest;
use crate::error::{DashpushError, DashpushResult};

use super::options::DeployOptions;

/// Deadline for the verification GET
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Deploy use case - one complete deploy-and-verify cycle
///
/// Parameterized by its ports so tests can substitute fakes without a real
/// network or remote host.
pub struct DeployUseCase<S, T, H>
where
    S: RemoteShell,
    T: FileTransfer,
    H: HttpProbe,
{
    shell: S,
    transfer: T,
    probe: H,
}

impl<S, T, H> DeployUseCase<S, T, H>
where
    S: RemoteShell,
    T: FileTransfer,
    H: HttpProbe,
{
    pub fn new(shell: S, transfer: T, probe: H) -> Self {
        Self {
            shell,
            transfer,
            probe,
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        request: &DeployRequest,
        options: &DeployOptions,
    ) -> DashpushResult<DeployOutcome> {
        if !request.artifact.exists() {
            return Err(DashpushError::MissingArtifact {
                path: request.artifact.clone(),
            });
        }

        if options.dry_run {
            return Ok(DeployOutcome {
                url: request.public_url(),
                backup: BackupStatus::Skipped,
                verification: VerifyStatus::Skipped,
            });
        }

        let backup = self.backup(request);
        self.upload(request)?;
        let verification = if options.verify {
            self.verify(request)
        } else {
            VerifyStatus::Skipped
        };

        Ok(DeployOutcome {
            url: request.public_url(),
            backup,
            verification,
        })
    }

    /// Copy the current remote file aside before overwriting it.
    ///
    /// The timestamp suffix is expanded by the remote shell, so backup labels
    /// stay correct under local/remote clock skew.
    fn backup(&self, request: &DeployRequest) -> BackupStatus {
        let command = backup_command(&request.remote_path);
        match self.shell.run(&command) {
            Ok(output) if output.success() => BackupStatus::Created,
            Ok(output) => BackupStatus::Failed {
                detail: format!("backup command exited with {}", output.code),
            },
            Err(err) => BackupStatus::Failed {
                detail: err.to_string(),
            },
        }
    }

    fn upload(&self, request: &DeployRequest) -> DashpushResult<()> {
        let code = self
            .transfer
            .upload(&request.artifact, &request.remote_path)?;
        if code != 0 {
            return Err(DashpushError::TransferFailed { code });
        }
        Ok(())
    }

    fn verify(&self, request: &DeployRequest) -> VerifyStatus {
        let url = request.public_url();
        match self.probe.get(&url, VERIFY_TIMEOUT) {
            Ok(status) if (200..300).contains(&status) => VerifyStatus::Passed { status },
            Ok(status) => VerifyStatus::Failed {
                reason: format!("unexpected HTTP status {}", status),
            },
            Err(err) => VerifyStatus::Failed {
                reason: err.to_string(),
            },
        }
    }
}

/// Build the remote backup command.
///
/// `$(date +%Y%m%d%H%M%S)` is left unexpanded so the remote shell stamps the
/// copy with its own clock. The suffix sorts lexicographically.
pub fn backup_command(remote_path: &str) -> String {
    let quoted = shell_quote(remote_path);
    format!("cp -p {0} {0}.$(date +%Y%m%d%H%M%S)", quoted)
}

/// Quote a path for safe use in a remote shell command
pub fn shell_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', "'\\''"))
}
