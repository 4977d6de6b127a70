//! Deployment Request
//!
//! One fully-resolved request per invocation. Host and user are guaranteed
//! non-empty by the time a request is constructed; no further format
//! validation is applied.

use std::path::PathBuf;

/// A single deploy-and-verify request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Local artifact to upload, relative to the invocation directory
    pub artifact: PathBuf,
    /// Deployment target host
    pub host: String,
    /// Remote account for authentication
    pub user: String,
    /// Remote shell/transfer port
    pub port: u16,
    /// Destination file path on the remote host
    pub remote_path: String,
}

impl DeployRequest {
    pub fn new(
        artifact: impl Into<PathBuf>,
        host: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            artifact: artifact.into(),
            host: host.into(),
            user: user.into(),
            port: 22,
            remote_path: String::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_remote_path(mut self, remote_path: impl Into<String>) -> Self {
        self.remote_path = remote_path.into();
        self
    }

    /// ssh/scp destination, `user@host`
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Final segment of the remote path (the filename the web server serves)
    pub fn remote_file_name(&self) -> &str {
        self.remote_path
            .rsplit('/')
            .next()
            .unwrap_or(self.remote_path.as_str())
    }

    /// Public URL the artifact should be reachable at after deploy
    pub fn public_url(&self) -> String {
        format!("https://{}/{}", self.host, self.remote_file_name())
    }
}
