// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CKAN tool for installing a mod and its transitive dependencies.
//!
//! Runs `ckan install --no-recommends --gamedir <install> <identifier>` and
//! waits for it to exit. Dependency resolution, version negotiation, and
//! failure reporting are entirely CKAN's job; the exit status is ignored.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use tracing::info;

use super::{Tool, ToolContext};
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// CKAN tool that installs one mod identifier into a game directory.
#[derive(Debug, Clone)]
pub struct CkanTool {
    identifier: String,
    game_dir: PathBuf,
}

impl CkanTool {
    /// Creates an install operation for the given identifier.
    pub fn install(identifier: impl Into<String>, game_dir: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            game_dir: game_dir.into(),
        }
    }

    /// Returns the mod identifier to install.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Tool for CkanTool {
    fn name(&self) -> &str {
        "ckan"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(identifier = %self.identifier, "dry: would install through CKAN");
                return Ok(());
            }

            info!(identifier = %self.identifier, "installing through CKAN");

            ProcessBuilder::which(&ctx.config().tools.ckan)?
                .arg("install")
                .arg("--no-recommends")
                .arg("--gamedir")
                .arg(&self.game_dir)
                .arg(&self.identifier)
                .flag(ProcessFlags::ALLOW_FAILURE)
                .run()
                .await?;

            Ok(())
        })
    }
}
