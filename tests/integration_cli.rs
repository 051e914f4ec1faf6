// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for command-line parsing.

use std::path::PathBuf;

use kspdev_rs::cli::{self, Command};

#[test]
fn cli_version_command() {
    let cli = cli::parse_from(["kspdev", "version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = cli::parse_from(["kspdev", "-v"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_and_inis_commands() {
    assert!(matches!(
        cli::parse_from(["kspdev", "options"]).command,
        Some(Command::Options)
    ));
    assert!(matches!(
        cli::parse_from(["kspdev", "inis"]).command,
        Some(Command::Inis)
    ));
}

#[test]
fn cli_setup_with_all_flags() {
    let cli = cli::parse_from([
        "kspdev",
        "--ini",
        "extra.toml",
        "--log-level",
        "4",
        "--file-log-level",
        "6",
        "--log-file",
        "/tmp/kspdev.log",
        "--no-default-inis",
        "setup",
        "--game-dir",
        "/opt/ksp",
        "--repo",
        "/src/my-mod",
        "--yes",
    ]);

    assert_eq!(cli.global.inis, vec![PathBuf::from("extra.toml")]);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("/tmp/kspdev.log")));
    assert!(cli.global.no_default_inis);

    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert_eq!(args.game_dir, Some(PathBuf::from("/opt/ksp")));
    assert_eq!(args.repo, Some(PathBuf::from("/src/my-mod")));
    assert!(args.url.is_none());
    assert!(args.yes);
}

#[test]
fn cli_repeated_set_options_accumulate() {
    let cli = cli::parse_from([
        "kspdev",
        "-s",
        "tools/git=/usr/local/bin/git",
        "-s",
        "paths/clone_root=/home/dev/src",
        "options",
    ]);

    assert_eq!(
        cli.global.options,
        vec!["tools/git=/usr/local/bin/git", "paths/clone_root=/home/dev/src"]
    );
}

#[test]
fn cli_rejects_unknown_command() {
    use clap::Parser;
    assert!(kspdev_rs::cli::Cli::try_parse_from(["kspdev", "teardown"]).is_err());
}
