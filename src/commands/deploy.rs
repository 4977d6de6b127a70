//! Deploy command
//!
//! Glue between the CLI surface and the deploy use case: configuration
//! resolution with interactive prompts, adapter wiring, output rendering,
//! and exit-code mapping.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::deploy::{DeployOptions, DeployUseCase};
use crate::config::{self, DeployConfig};
use crate::domain::outcome::DeployOutcome;
use crate::domain::ports::Prompter;
use crate::domain::request::DeployRequest;
use crate::error::{DashpushError, DashpushResult};
use crate::infrastructure::{ScpTransfer, SshShell, TerminalPrompter, UreqProbe};
use crate::presentation::cli::ColorWhen;
use crate::ui::theme::{colors, icons, icons_ascii, paint};
use crate::ui::views::deploy::{
    render_deploy_header, render_deploy_summary, render_transfer_failure,
};
use crate::ui::UiContext;

/// Resolved CLI arguments for the deploy command
#[derive(Debug, Clone, Default)]
pub struct DeployArgs {
    pub artifact: Option<PathBuf>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub remote_path: Option<String>,
    pub no_verify: bool,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

pub fn cmd_deploy(args: &DeployArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = config::load_or_default(&cwd);
    let ui = UiContext::new(args.json, args.color);

    if !args.json {
        for warning in &warnings {
            eprintln!(
                "{} Unknown config key '{}' in {}",
                paint(warning_icon(ui.unicode), colors::WARNING, ui.color),
                warning.key,
                warning.file.display()
            );
        }
    }

    // Preflight before any prompting: a missing artifact aborts the run
    // without asking the operator for anything else.
    let artifact = args
        .artifact
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.deploy.artifact));
    if !artifact.exists() {
        let err = DashpushError::MissingArtifact { path: artifact };
        report_failure(&err, None, args, &ui);
        return Ok(err.exit_code());
    }

    let request = match resolve_request(artifact, args, &config.deploy, &TerminalPrompter) {
        Ok(request) => request,
        Err(err) => {
            report_failure(&err, None, args, &ui);
            return Ok(err.exit_code());
        }
    };

    if !args.json {
        print!(
            "{}",
            render_deploy_header(&request, args.dry_run, ui.color, ui.unicode)
        );
    }

    let shell = SshShell::new(request.destination(), request.port);
    let transfer = ScpTransfer::new(request.destination(), request.port)
        .with_verbose(args.verbose > 0)
        .with_quiet(args.json);
    let use_case = DeployUseCase::new(shell, transfer, UreqProbe);

    let options = DeployOptions::new()
        .with_verify(!args.no_verify && config.deploy.verify)
        .with_dry_run(args.dry_run)
        .with_verbose(args.verbose)
        .with_json(args.json);

    match use_case.execute(&request, &options) {
        Ok(outcome) => {
            if args.json {
                println!("{}", deploy_event(&outcome));
            } else {
                print!("{}", render_deploy_summary(&outcome, ui.color, ui.unicode));
            }
            Ok(0)
        }
        Err(err) => {
            report_failure(&err, Some(&request), args, &ui);
            Ok(err.exit_code())
        }
    }
}

/// Merge CLI flags, config file values, and interactive answers into a
/// complete request. Host and user are prompted for when still empty; no
/// other validation is applied.
pub fn resolve_request(
    artifact: PathBuf,
    args: &DeployArgs,
    config: &DeployConfig,
    prompter: &dyn Prompter,
) -> DashpushResult<DeployRequest> {
    let mut host = args.host.clone().unwrap_or_else(|| config.host.clone());
    if host.trim().is_empty() {
        host = prompter
            .ask("Target host")
            .map_err(|e| DashpushError::Prompt(e.to_string()))?;
    }
    if host.trim().is_empty() {
        return Err(DashpushError::Prompt("host must not be empty".to_string()));
    }

    let mut user = args.user.clone().unwrap_or_else(|| config.user.clone());
    if user.trim().is_empty() {
        user = prompter
            .ask(&format!("Remote user for {}", host.trim()))
            .map_err(|e| DashpushError::Prompt(e.to_string()))?;
    }
    if user.trim().is_empty() {
        return Err(DashpushError::Prompt("user must not be empty".to_string()));
    }

    let port = args.port.unwrap_or(config.port);
    let remote_path = args
        .remote_path
        .clone()
        .unwrap_or_else(|| config.remote_path.clone());

    Ok(DeployRequest::new(artifact, host.trim(), user.trim())
        .with_port(port)
        .with_remote_path(remote_path))
}

fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

fn error_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::ERROR
    } else {
        icons_ascii::ERROR
    }
}

fn deploy_event(outcome: &DeployOutcome) -> String {
    serde_json::json!({
        "event": "deploy",
        "status": "success",
        "url": outcome.url,
        "backup": outcome.backup.as_str(),
        "verification": outcome.verification.as_str(),
        "warnings": outcome.warnings(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
    .to_string()
}

fn failure_event(err: &DashpushError) -> String {
    serde_json::json!({
        "event": "deploy",
        "status": "failed",
        "error": err.to_string(),
        "code": err.exit_code(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
    .to_string()
}

fn report_failure(
    err: &DashpushError,
    request: Option<&DeployRequest>,
    args: &DeployArgs,
    ui: &UiContext,
) {
    if args.json {
        println!("{}", failure_event(err));
        return;
    }

    match (err, request) {
        (DashpushError::TransferFailed { code }, Some(request)) => {
            eprint!(
                "{}",
                render_transfer_failure(request, *code, ui.color, ui.unicode)
            );
        }
        _ => {
            eprintln!(
                "{} {}",
                paint(error_icon(ui.unicode), colors::ERROR, ui.color),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct FakePrompter {
        answers: RefCell<VecDeque<String>>,
        asked: RefCell<Vec<String>>,
    }

    impl FakePrompter {
        fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for FakePrompter {
        fn ask(&self, prompt: &str) -> std::io::Result<String> {
            self.asked.borrow_mut().push(prompt.to_string());
            Ok(self.answers.borrow_mut().pop_front().unwrap_or_default())
        }
    }

    fn args_with_user(user: Option<&str>) -> DeployArgs {
        DeployArgs {
            user: user.map(|u| u.to_string()),
            ..DeployArgs::default()
        }
    }

    #[test]
    fn resolve_prompts_for_missing_user() {
        let prompter = FakePrompter::with_answers(&["ops"]);
        let request = resolve_request(
            PathBuf::from("dashboard.html"),
            &args_with_user(None),
            &DeployConfig::default(),
            &prompter,
        )
        .unwrap();

        assert_eq!(request.user, "ops");
        assert_eq!(prompter.asked.borrow().len(), 1);
        assert!(prompter.asked.borrow()[0].contains("dashboard.finsight.in"));
    }

    #[test]
    fn resolve_does_not_prompt_when_user_given() {
        let prompter = FakePrompter::with_answers(&[]);
        let request = resolve_request(
            PathBuf::from("dashboard.html"),
            &args_with_user(Some("ops")),
            &DeployConfig::default(),
            &prompter,
        )
        .unwrap();

        assert_eq!(request.user, "ops");
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn resolve_prompts_for_host_when_config_blank() {
        let prompter = FakePrompter::with_answers(&["staging.finsight.in", "ops"]);
        let config = DeployConfig {
            host: String::new(),
            ..DeployConfig::default()
        };
        let request = resolve_request(
            PathBuf::from("dashboard.html"),
            &args_with_user(None),
            &config,
            &prompter,
        )
        .unwrap();

        assert_eq!(request.host, "staging.finsight.in");
        assert_eq!(prompter.asked.borrow().len(), 2);
    }

    #[test]
    fn resolve_rejects_empty_user_answer() {
        let prompter = FakePrompter::with_answers(&["   "]);
        let err = resolve_request(
            PathBuf::from("dashboard.html"),
            &args_with_user(None),
            &DeployConfig::default(),
            &prompter,
        )
        .unwrap_err();

        assert!(matches!(err, DashpushError::Prompt(_)));
    }

    #[test]
    fn resolve_cli_flags_override_config() {
        let prompter = FakePrompter::with_answers(&[]);
        let args = DeployArgs {
            host: Some("override.finsight.in".to_string()),
            user: Some("ops".to_string()),
            port: Some(2222),
            remote_path: Some("/srv/www/index.html".to_string()),
            ..DeployArgs::default()
        };
        let request = resolve_request(
            PathBuf::from("dashboard.html"),
            &args,
            &DeployConfig::default(),
            &prompter,
        )
        .unwrap();

        assert_eq!(request.host, "override.finsight.in");
        assert_eq!(request.port, 2222);
        assert_eq!(request.remote_path, "/srv/www/index.html");
    }

    #[test]
    fn deploy_event_is_valid_json() {
        use crate::domain::outcome::{BackupStatus, VerifyStatus};

        let outcome = DeployOutcome {
            url: "https://dashboard.finsight.in/dashboard.html".to_string(),
            backup: BackupStatus::Created,
            verification: VerifyStatus::Passed { status: 200 },
        };
        let event: serde_json::Value = serde_json::from_str(&deploy_event(&outcome)).unwrap();
        assert_eq!(event["event"], "deploy");
        assert_eq!(event["status"], "success");
        assert_eq!(event["backup"], "created");
    }

    #[test]
    fn failure_event_carries_exit_code() {
        let err = DashpushError::TransferFailed { code: 12 };
        let event: serde_json::Value = serde_json::from_str(&failure_event(&err)).unwrap();
        assert_eq!(event["status"], "failed");
        assert_eq!(event["code"], 12);
    }
}
