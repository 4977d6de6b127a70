use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn project_config_overrides_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    fs::write(
        dir.path().join("dashpush.toml"),
        r#"
[deploy]
artifact = "index.html"
host = "staging.finsight.in"
user = "ops"
port = 2222
remote_path = "/srv/www/index.html"
"#,
    )
    .unwrap();

    let bin = env!("CARGO_BIN_EXE_dashpush");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy", "--dry-run"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("ops@staging.finsight.in:2222"),
        "stdout was: {stdout}"
    );
    assert!(
        stdout.contains("https://staging.finsight.in/index.html"),
        "stdout was: {stdout}"
    );
}

#[test]
fn cli_flags_override_project_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("dashboard.html"), "<html></html>").unwrap();
    fs::write(
        dir.path().join("dashpush.toml"),
        "[deploy]\nuser = \"ops\"\nhost = \"staging.finsight.in\"\n",
    )
    .unwrap();

    let bin = env!("CARGO_BIN_EXE_dashpush");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy", "--host", "prod.finsight.in", "--dry-run"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("https://prod.finsight.in/dashboard.html"),
        "stdout was: {stdout}"
    );
}

#[test]
fn unknown_config_key_warns_but_does_not_fail() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("dashboard.html"), "<html></html>").unwrap();
    fs::write(
        dir.path().join("dashpush.toml"),
        "[deploy]\nuser = \"ops\"\nremote_pth = \"/srv/typo\"\n",
    )
    .unwrap();

    let bin = env!("CARGO_BIN_EXE_dashpush");
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy", "--dry-run"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown config key 'remote_pth'"),
        "stderr was: {stderr}"
    );
}
