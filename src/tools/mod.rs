// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tool wrappers.
//!
//! ```text
//! setup flow --> ToolContext --> ProcessBuilder --> Tools
//!   Git (clone), Ckan (install)
//! ```
//!
//! Both tools run with inherited stdio so their own console interaction
//! reaches the user, and both ignore the child's exit status
//! (`ProcessFlags::ALLOW_FAILURE`): a ckan- or git-side failure is the
//! subprocess's business, not this tool's. `ToolContext::dry_run` turns every
//! tool into a logged no-op.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::error::Result;

pub mod ckan;
pub mod git;

#[cfg(test)]
mod tests;

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    /// Whether this is a dry-run execution.
    /// When true, tools log what they would do without making changes.
    dry_run: bool,

    /// Reference to the configuration.
    config: Arc<Config>,
}

impl ToolContext {
    /// Creates a new `ToolContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self { dry_run, config }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Trait for tools that execute external processes.
///
/// Each tool encapsulates one external operation (git clone, ckan install).
/// Isolating the subprocess behind this seam keeps the setup flow testable:
/// tests run with `dry_run` set and assert on the flow, not on real
/// subprocesses.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "git", "ckan").
    fn name(&self) -> &str;

    /// Executes the tool's operation, waiting for the subprocess to exit.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}
