// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command arguments.
//!
//! # Flag Effects
//!
//! ```text
//! --game-dir DIR    skips the install prompt when DIR is valid
//! --repo PATH       use an existing clone (conflicts with --url)
//! --url URL         clone URL into the configured clone root
//! --yes (-y)        answer every yes/no question with its default
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// KSP install directory. Skips the KSPDEVPATH/prompt resolution when
    /// it points to an existing directory.
    #[arg(long = "game-dir", value_name = "DIR")]
    pub game_dir: Option<PathBuf>,

    /// Path to an already-cloned mod repository.
    #[arg(long = "repo", value_name = "PATH", conflicts_with = "url")]
    pub repo: Option<PathBuf>,

    /// URL of the mod repository to clone.
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Answers every yes/no question with its default, making the run
    /// non-interactive as long as paths resolve without prompting.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}
