// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use super::ckan::CkanTool;
use super::git::GitTool;
use super::{Tool, ToolContext};
use crate::config::Config;

fn dry_context() -> ToolContext {
    ToolContext::new(Arc::new(Config::default()), true)
}

#[test]
fn test_tool_names() {
    let git = GitTool::clone_repo("https://example.com/mod.git", "/tmp/mod");
    let ckan = CkanTool::install("AwesomeMod", "/opt/ksp");
    assert_eq!(git.name(), "git");
    assert_eq!(ckan.name(), "ckan");
}

#[test]
fn test_git_tool_accessors() {
    let git = GitTool::clone_repo("https://example.com/mod.git", "/tmp/mod");
    assert_eq!(git.url(), "https://example.com/mod.git");
    assert_eq!(git.dest(), Path::new("/tmp/mod"));
}

#[tokio::test]
async fn test_dry_run_spawns_nothing() {
    // Binaries that cannot exist; dry-run must succeed without resolving them.
    let ctx = {
        let mut config = Config::default();
        config.tools.git = "no-such-git-kspdev".to_string();
        config.tools.ckan = "no-such-ckan-kspdev".to_string();
        ToolContext::new(Arc::new(config), true)
    };

    GitTool::clone_repo("https://example.com/mod.git", "/tmp/mod")
        .run(&ctx)
        .await
        .unwrap();
    CkanTool::install("AwesomeMod", "/opt/ksp")
        .run(&ctx)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_missing_binary_is_error_when_not_dry() {
    let mut config = Config::default();
    config.tools.ckan = "no-such-ckan-kspdev".to_string();
    let ctx = ToolContext::new(Arc::new(config), false);

    let result = CkanTool::install("AwesomeMod", "/opt/ksp").run(&ctx).await;
    assert!(result.is_err());
}

#[test]
fn test_context_accessors() {
    let ctx = dry_context();
    assert!(ctx.is_dry_run());
    assert_eq!(ctx.config().tools.git, "git");
}
