//! Dashpush CLI - deploy a single dashboard file to a remote host
//!
//! Usage: dashpush <COMMAND>
//!
//! Commands:
//!   deploy  Upload the dashboard artifact (backup, transfer, verify)
//!   check   Validate the local environment and configuration

use clap::Parser;

use dashpush::commands;
use dashpush::presentation::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deploy {
            artifact,
            host,
            user,
            port,
            remote_path,
            no_verify,
            dry_run,
        } => commands::deploy::cmd_deploy(&commands::deploy::DeployArgs {
            artifact,
            host,
            user,
            port,
            remote_path,
            no_verify,
            dry_run,
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
        }),
        Commands::Check => commands::check::cmd_check(cli.json, cli.color),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("✗ {err:#}");
            std::process::exit(1);
        }
    }
}
