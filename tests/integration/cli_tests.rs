//! Integration tests for the CLI binary.
//!
//! Runs the `acme` binary against temporary configuration directories.
//!
//! This test is registered as a [[test]] in the acme-account-cli crate
//! so that CARGO_BIN_EXE_acme is available.

use std::path::Path;
use std::process::{Command, Output};

/// Get a Command pointing to the `acme` binary with a clean environment.
fn acme_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_acme"));
    cmd.env_remove("ACME_CONFIG");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    acme_binary()
        .arg("-c")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to execute acme")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_responds_to_help() {
    let output = acme_binary()
        .arg("--help")
        .output()
        .expect("failed to execute acme --help");

    assert!(
        output.status.success(),
        "acme --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = acme_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute acme");

    assert!(!output.status.success());
}

#[test]
fn cli_init_then_whoami() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("acme");

    let output = run_in(
        &dir,
        &[
            "init",
            "--ca",
            "https://ca.example/directory",
            "--contact",
            "mailto:admin@example.com",
        ],
    );
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.join("account.json").exists());
    assert!(dir.join("account.key").exists());

    let output = run_in(&dir, &["whoami"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Contact:  mailto:admin@example.com"));
    assert!(text.contains("Accepted: no"));
    assert!(text.contains(&dir.join("account.key").display().to_string()));

    // A second init without --force must refuse.
    let output = run_in(&dir, &["init", "--ca", "https://other.example/directory"]);
    assert!(!output.status.success());
}

#[test]
fn cli_whoami_without_account_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_in(tmp.path(), &["whoami"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no account found"));
}

#[test]
fn cli_key_no_generate_creates_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_in(tmp.path(), &["key", "--no-generate"]);
    assert!(!output.status.success());
    assert!(!tmp.path().join("account.key").exists());

    let output = run_in(tmp.path(), &["key"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Size:      2048 bits"));
    assert!(tmp.path().join("account.key").exists());
}

#[test]
fn cli_config_from_env() {
    let tmp = tempfile::tempdir().unwrap();
    let output = acme_binary()
        .env("ACME_CONFIG", tmp.path())
        .arg("key")
        .output()
        .expect("failed to execute acme");
    assert!(output.status.success());
    assert!(tmp.path().join("account.key").exists());
}

#[test]
fn cli_cert_prints_subject() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cert.pem");
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    std::fs::write(&path, certified.cert.pem()).unwrap();

    let output = run_in(tmp.path(), &["cert", path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Subject:"));
    assert!(text.contains("Serial:"));
}
