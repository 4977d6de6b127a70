//! Deploy Options
//!
//! Configuration for a single deploy run.

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Run the post-deploy HTTP check
    pub verify: bool,
    /// Show the plan without touching the remote host
    pub dry_run: bool,
    /// Verbosity level (passed through to the transfer mechanism)
    pub verbose: u8,
    /// JSON mode (suppress interactive output)
    pub json: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self {
            verify: true,
            dry_run: false,
            verbose: 0,
            json: false,
        }
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new()
    }
}
