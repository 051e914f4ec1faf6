// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.tools.git, "git");
    assert_eq!(config.tools.ckan, "ckan");
    assert!(config.paths.game_dir.is_none());
    assert!(config.paths.clone_root.is_none());
}

#[test]
fn test_parse_toml() {
    let config = Config::parse(
        r#"
        [global]
        dry = true
        output_log_level = 4

        [tools]
        ckan = "/opt/ckan/ckan"

        [paths]
        game_dir = "/home/dev/KSP"
        "#,
    )
    .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.tools.ckan, "/opt/ckan/ckan");
    assert_eq!(config.tools.git, "git");
    assert_eq!(config.paths.game_dir, Some(PathBuf::from("/home/dev/KSP")));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse(
        r"
        [global]
        not_a_real_key = 1
        ",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let result = Config::parse(
        r"
        [global]
        output_log_level = 9
        ",
    );
    assert!(result.is_err());
}

#[test]
fn test_set_option_override() {
    let config = Config::builder()
        .set_option("tools/ckan=ckan-nightly")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.tools.ckan, "ckan-nightly");
}

#[test]
fn test_set_option_rejects_missing_equals() {
    assert!(Config::builder().set_option("tools/ckan").is_err());
}

#[test]
fn test_format_options_lists_sections() {
    let config = Config::default();
    let lines = config.format_options();
    assert!(lines.iter().any(|l| l == "tools/git=git"));
    assert!(lines.iter().any(|l| l == "global/dry=false"));
    assert!(lines.iter().any(|l| l == "global/output_log_level=3"));
}

#[test]
fn test_clone_root_prefers_configured_path() {
    let mut config = Config::default();
    config.paths.clone_root = Some(PathBuf::from("/srv/clones"));
    assert_eq!(config.clone_root().unwrap(), PathBuf::from("/srv/clones"));
}

#[test]
fn test_clone_root_falls_back_to_exe_dir() {
    let config = Config::default();
    let root = config.clone_root().unwrap();
    assert!(root.is_absolute());
}
