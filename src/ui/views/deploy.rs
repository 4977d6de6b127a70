//! Deploy command views

use crate::domain::outcome::{DeployOutcome, VerifyStatus};
use crate::domain::request::DeployRequest;
use crate::ui::theme::{colors, icons, icons_ascii, paint};

fn icon_set(unicode: bool) -> (&'static str, &'static str, &'static str, &'static str) {
    if unicode {
        (
            icons::DEPLOY,
            icons::SUCCESS,
            icons::WARNING,
            icons::ERROR,
        )
    } else {
        (
            icons_ascii::DEPLOY,
            icons_ascii::SUCCESS,
            icons_ascii::WARNING,
            icons_ascii::ERROR,
        )
    }
}

pub fn render_deploy_header(
    request: &DeployRequest,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (deploy, _, _, _) = icon_set(supports_unicode);
    let mut out = String::new();
    out.push_str(&format!("{} Dashpush Deploy\n", deploy));
    out.push_str(&format!("Artifact: {}\n", request.artifact.display()));
    out.push_str(&format!(
        "Remote: {}:{} {}\n",
        request.destination(),
        request.port,
        paint(&request.remote_path, colors::DIM, supports_color)
    ));
    if dry_run {
        out.push_str("Mode: Dry run\n");
    }
    out.push('\n');
    out
}

pub fn render_deploy_summary(
    outcome: &DeployOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (_, success, warning, _) = icon_set(supports_unicode);
    let mut out = String::new();

    out.push_str(&format!(
        "{} Deploy complete\n",
        paint(success, colors::SUCCESS, supports_color)
    ));
    out.push_str(&format!("  Backup: {}\n", outcome.backup.as_str()));
    match &outcome.verification {
        VerifyStatus::Passed { status } => {
            out.push_str(&format!("  Verified: HTTP {}\n", status));
        }
        other => {
            out.push_str(&format!("  Verification: {}\n", other.as_str()));
        }
    }
    out.push_str(&format!("  URL: {}\n", outcome.url));

    for message in outcome.warnings() {
        out.push_str(&format!(
            "  {} {}\n",
            paint(warning, colors::WARNING, supports_color),
            message
        ));
    }

    out
}

/// Advisory manual fallback shown when the transfer fails. Never executed
/// automatically.
pub fn render_transfer_failure(
    request: &DeployRequest,
    code: i32,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (_, _, _, error) = icon_set(supports_unicode);
    let arrow = if supports_unicode {
        icons::ARROW
    } else {
        icons_ascii::ARROW
    };
    let filename = request.remote_file_name();

    let mut out = String::new();
    out.push_str(&format!(
        "{} Transfer failed with exit code {}\n",
        paint(error, colors::ERROR, supports_color),
        code
    ));
    out.push_str("Manual fallback (run these yourself):\n");
    out.push_str(&format!(
        "  {} scp -P {} {} {}:/tmp/{}\n",
        arrow,
        request.port,
        request.artifact.display(),
        request.destination(),
        filename
    ));
    out.push_str(&format!(
        "  {} ssh -p {} {} \"sudo mv /tmp/{} {}\"\n",
        arrow,
        request.port,
        request.destination(),
        filename,
        request.remote_path
    ));
    out
}
