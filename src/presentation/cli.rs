//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Every deploy parameter is optional; missing host/user fall back to config
//!   and then to interactive prompts

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Dashpush - single-file dashboard deploy tool
#[derive(Parser, Debug)]
#[command(name = "dashpush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload the dashboard artifact to the remote host
    Deploy {
        /// Local artifact to upload
        #[arg(short, long)]
        artifact: Option<PathBuf>,

        /// Deployment target host
        #[arg(long)]
        host: Option<String>,

        /// Remote account for authentication (prompted when missing)
        #[arg(short, long)]
        user: Option<String>,

        /// Remote shell/transfer port
        #[arg(short, long)]
        port: Option<u16>,

        /// Destination file path on the remote host
        #[arg(long)]
        remote_path: Option<String>,

        /// Skip the post-deploy HTTP check
        #[arg(long)]
        no_verify: bool,

        /// Show the plan without touching the remote host
        #[arg(long)]
        dry_run: bool,
    },

    /// Check the local environment and configuration
    Check,
}
