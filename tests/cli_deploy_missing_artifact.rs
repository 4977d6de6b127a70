use std::process::Command;

use tempfile::tempdir;

#[test]
fn missing_artifact_exits_one_without_prompting() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_dashpush");

    // No --user on purpose: the preflight failure must come before any
    // interactive prompt, so this must not block on stdin.
    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("artifact not found"),
        "stderr was: {stderr}"
    );
}

#[test]
fn missing_artifact_json_event() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_dashpush");

    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy", "--json"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["event"], "deploy");
    assert_eq!(event["status"], "failed");
    assert_eq!(event["code"], 1);
}

#[test]
fn explicit_artifact_flag_is_honored() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_dashpush");

    let output = Command::new(bin)
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["deploy", "--artifact", "build/out.html"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("build/out.html"), "stderr was: {stderr}");
}
