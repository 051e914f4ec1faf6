// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup flow building blocks.
//!
//! ```text
//! install   KSPDEVPATH / prompt --> validated install dir
//! repo      existing clone (gix) | URL clone (git)
//! netkan    *.netkan --> identifier --> ckan install
//! gamedata  GameData/<mod> --> symlink into install
//! csproj    *.csproj --> resolved ReferencePath --> *.csproj.user
//! ```
//!
//! Each step takes the resolved paths through [`SetupContext`] rather than
//! process-wide state, and performs all user interaction through an injected
//! [`crate::prompt::Prompt`].

use std::path::{Path, PathBuf};

pub mod csproj;
pub mod gamedata;
pub mod install;
pub mod netkan;
pub mod repo;


/// Resolved paths shared by the setup steps.
///
/// Both paths are absolute, validated by the steps that produced them, and
/// immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct SetupContext {
    game_dir: PathBuf,
    repo_dir: PathBuf,
}

impl SetupContext {
    /// Creates a context from the resolved install and repository paths.
    #[must_use]
    pub const fn new(game_dir: PathBuf, repo_dir: PathBuf) -> Self {
        Self { game_dir, repo_dir }
    }

    /// The KSP install directory.
    #[must_use]
    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// The mod repository directory.
    #[must_use]
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// The install's assets root (`<game_dir>/GameData`).
    #[must_use]
    pub fn install_game_data(&self) -> PathBuf {
        self.game_dir.join("GameData")
    }
}
