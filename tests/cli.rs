//! End-to-end checks of the binary's exit codes and stream routing.

use std::process::{Command, Output};

fn portscout(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_portscout"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run portscout")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_arguments_prints_usage_on_stdout() {
    let output = portscout(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"), "stdout: {}", stdout(&output));
}

#[test]
fn address_without_mode_is_a_usage_error() {
    let output = portscout(&["127.0.0.1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn non_numeric_port_is_a_usage_error() {
    let output = portscout(&["127.0.0.1", "--port", "ssh"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("Scanning for"));
}

#[test]
fn help_and_version_exit_zero() {
    let help = portscout(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(stdout(&help).contains("--fast"));

    let version = portscout(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_target_fails_on_stderr() {
    let output = portscout(&["", "--fast"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn ipv6_target_fails_on_stderr() {
    let output = portscout(&["::1", "--port", "22"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn out_of_range_port_is_clamped() {
    let output = portscout(&["127.0.0.1", "--port", "70000"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Scanning for 127.0.0.1\n\n65535/tcp, Not open.\n\nEnd.\n"
    );
}
