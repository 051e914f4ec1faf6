// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ProcessBuilder, ProcessFlags, StdioMode};
use crate::error::ProcessError;

#[test]
fn test_builder_collects_args() {
    let builder = ProcessBuilder::new("ckan")
        .arg("install")
        .args(["--no-recommends", "--gamedir"])
        .arg("/opt/ksp")
        .arg("AwesomeMod");
    assert_eq!(
        builder.args_slice(),
        ["install", "--no-recommends", "--gamedir", "/opt/ksp", "AwesomeMod"]
    );
}

#[test]
fn test_which_unknown_executable() {
    let err = ProcessBuilder::which("definitely-not-a-real-binary-kspdev").unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { .. }));
    assert!(!ProcessBuilder::exists("definitely-not-a-real-binary-kspdev"));
}

#[cfg(unix)]
#[test]
fn test_which_resolves_and_caches() {
    let first = ProcessBuilder::find("sh").expect("sh should be in PATH");
    let second = ProcessBuilder::find("sh").expect("cached lookup");
    assert_eq!(first, second);
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_captures_output() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo hello"])
        .capture_output()
        .run()
        .await
        .unwrap();
    assert!(output.success());
    assert_eq!(output.stdout().trim(), "hello");
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_nonzero_exit_is_error() {
    let result = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .stdio(StdioMode::Null)
        .run()
        .await;
    assert!(result.is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn test_allow_failure_ignores_exit_code() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .stdio(StdioMode::Null)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .unwrap();
    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
}

#[tokio::test]
async fn test_spawn_failure_is_error() {
    let result = ProcessBuilder::new("/no/such/binary/kspdev")
        .stdio(StdioMode::Null)
        .run()
        .await;
    assert!(result.is_err());
}
