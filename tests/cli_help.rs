use std::process::Command;

#[test]
fn help_lists_both_commands() {
    let bin = env!("CARGO_BIN_EXE_dashpush");
    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("deploy"));
    assert!(stdout.contains("check"));
}

#[test]
fn deploy_help_documents_parameters() {
    let bin = env!("CARGO_BIN_EXE_dashpush");
    let output = Command::new(bin).args(["deploy", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--host", "--user", "--port", "--remote-path", "--dry-run"] {
        assert!(stdout.contains(flag), "missing {flag} in: {stdout}");
    }
}
