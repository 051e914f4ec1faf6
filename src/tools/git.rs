// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git tool for cloning the mod repository.
//!
//! Shells out to the configured git binary with `clone <url> <dest>`. The
//! clone is the only mutation this tool performs; read-only repository
//! validation lives in [`crate::setup::repo`] on top of gix.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use tracing::info;

use super::{Tool, ToolContext};
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// Git tool that clones a repository to a destination path.
#[derive(Debug, Clone)]
pub struct GitTool {
    url: String,
    dest: PathBuf,
}

impl GitTool {
    /// Creates a clone operation for the given URL and destination.
    pub fn clone_repo(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
        }
    }

    /// Returns the clone URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the destination path.
    #[must_use]
    pub fn dest(&self) -> &std::path::Path {
        &self.dest
    }
}

impl Tool for GitTool {
    fn name(&self) -> &str {
        "git"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(url = %self.url, dest = %self.dest.display(), "dry: would clone");
                return Ok(());
            }

            info!(url = %self.url, dest = %self.dest.display(), "cloning");

            ProcessBuilder::which(&ctx.config().tools.git)?
                .arg("clone")
                .arg(&self.url)
                .arg(&self.dest)
                .flag(ProcessFlags::ALLOW_FAILURE)
                .run()
                .await?;

            Ok(())
        })
    }
}
