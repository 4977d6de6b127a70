//! Deployment Outcome
//!
//! Produced once per run, never persisted. Overall success is decided by the
//! transfer step alone; backup and verification report their status here but
//! cannot fail the run.

/// Result of the best-effort remote backup step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// Remote copy created next to the target file
    Created,
    /// Backup command failed; expected when the remote file does not exist yet
    Failed { detail: String },
    /// Backup was not attempted (dry run)
    Skipped,
}

impl BackupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Result of the best-effort post-deploy HTTP check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    /// 2xx response received within the deadline
    Passed { status: u16 },
    /// Timeout, connection error, or non-2xx status
    Failed { reason: String },
    /// Verification disabled or dry run
    Skipped,
}

impl VerifyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed { .. } => "passed",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// Result of a completed deploy run (transfer succeeded or was skipped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// URL the artifact should be served from
    pub url: String,
    pub backup: BackupStatus,
    pub verification: VerifyStatus,
}

impl DeployOutcome {
    /// Warnings accumulated by the best-effort steps
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let BackupStatus::Failed { detail } = &self.backup {
            warnings.push(format!(
                "remote backup failed ({detail}); the remote file may not exist yet"
            ));
        }
        if let VerifyStatus::Failed { reason } = &self.verification {
            warnings.push(format!(
                "verification failed ({reason}); try: curl -fsS --max-time 10 {}",
                self.url
            ));
        }
        warnings
    }
}
