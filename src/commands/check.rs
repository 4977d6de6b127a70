//! Check command
//!
//! Validates the local environment before a deploy: artifact present,
//! OpenSSH tools on PATH, config file clean.

use std::path::Path;

use anyhow::Result;

use crate::config;
use crate::infrastructure::{ScpTransfer, SshShell};
use crate::presentation::cli::ColorWhen;
use crate::ui::theme::{colors, icons, icons_ascii, paint};
use crate::ui::UiContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

/// Gather all environment checks for the given invocation directory.
pub fn run_checks(invocation_dir: &Path) -> Vec<CheckItem> {
    let (config, warnings) = config::load_or_default(invocation_dir);
    let mut checks = Vec::new();

    let artifact = invocation_dir.join(&config.deploy.artifact);
    checks.push(if artifact.exists() {
        CheckItem {
            name: "artifact",
            status: CheckStatus::Pass,
            message: format!("{} found", config.deploy.artifact),
        }
    } else {
        CheckItem {
            name: "artifact",
            status: CheckStatus::Error,
            message: format!("{} not found in invocation directory", config.deploy.artifact),
        }
    });

    checks.push(tool_check("ssh", SshShell::check_available()));
    checks.push(tool_check("scp", ScpTransfer::check_available()));

    for warning in warnings {
        checks.push(CheckItem {
            name: "config",
            status: CheckStatus::Warning,
            message: format!(
                "unknown key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        });
    }

    checks
}

fn tool_check(name: &'static str, available: bool) -> CheckItem {
    if available {
        CheckItem {
            name,
            status: CheckStatus::Pass,
            message: "available".to_string(),
        }
    } else {
        CheckItem {
            name,
            status: CheckStatus::Error,
            message: "not found on PATH".to_string(),
        }
    }
}

pub fn cmd_check(json: bool, color: Option<ColorWhen>) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let ui = UiContext::new(json, color);
    let checks = run_checks(&cwd);

    let errors = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();

    if json {
        let items: Vec<_> = checks
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "status": match c.status {
                        CheckStatus::Pass => "pass",
                        CheckStatus::Warning => "warning",
                        CheckStatus::Error => "error",
                    },
                    "message": c.message,
                })
            })
            .collect();
        let event = serde_json::json!({
            "event": "check",
            "checks": items,
            "errors": errors,
            "warnings": warnings,
            "success": errors == 0,
        });
        println!("{}", event);
    } else {
        let check_icon = if ui.unicode {
            icons::CHECK
        } else {
            icons_ascii::CHECK
        };
        println!("{} Dashpush Check\n", check_icon);

        for check in &checks {
            let (icon, icon_color) = match check.status {
                CheckStatus::Pass => (
                    if ui.unicode {
                        icons::SUCCESS
                    } else {
                        icons_ascii::SUCCESS
                    },
                    colors::SUCCESS,
                ),
                CheckStatus::Warning => (
                    if ui.unicode {
                        icons::WARNING
                    } else {
                        icons_ascii::WARNING
                    },
                    colors::WARNING,
                ),
                CheckStatus::Error => (
                    if ui.unicode {
                        icons::ERROR
                    } else {
                        icons_ascii::ERROR
                    },
                    colors::ERROR,
                ),
            };
            println!(
                "  {} {} - {}",
                paint(icon, icon_color, ui.color),
                check.name,
                check.message
            );
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} errors",
            checks.len() - errors - warnings,
            warnings,
            errors
        );
    }

    Ok(if errors > 0 { 1 } else { 0 })
}
