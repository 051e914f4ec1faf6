// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The setup command: the full environment preparation flow.
//!
//! ```text
//! resolve install  --game-dir / KSPDEVPATH / config / prompt
//! acquire repo     --repo / --url / prompt (decline ends the run)
//! netkan           offer CKAN install per manifest
//! gamedata         offer symlink per GameData folder
//! csproj           offer .csproj.user generation
//! ```

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::info;

use crate::cli::setup::SetupArgs;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::setup::SetupContext;
use crate::setup::csproj::generate_user_files;
use crate::setup::gamedata::link_gamedata;
use crate::setup::install::resolve_game_dir;
use crate::setup::netkan::discover_and_install;
use crate::setup::repo::acquire_repository;
use crate::tools::ToolContext;

/// Runs the whole setup flow over the given console streams.
///
/// # Errors
///
/// Returns an error on console stream failure, end of input, or an
/// unrecoverable filesystem failure. Per-item failures inside the netkan and
/// gamedata steps are reported and skipped instead.
pub async fn run_setup_command<R: BufRead, W: Write>(
    args: &SetupArgs,
    config: &Config,
    prompt: &mut Prompt<R, W>,
    dry_run: bool,
) -> Result<()> {
    let game_dir = resolve_game_dir(args.game_dir.as_deref(), config, prompt)?;
    prompt.say(format!("KSP dev install selected: {}", game_dir.display()))?;

    let tool_ctx = ToolContext::new(Arc::new(config.clone()), dry_run);
    let Some(repo_dir) = acquire_repository(args, config, &tool_ctx, prompt).await? else {
        info!("setup ended at clone confirmation");
        return Ok(());
    };

    let ctx = SetupContext::new(game_dir, repo_dir);

    prompt.say("")?;
    discover_and_install(&ctx, &tool_ctx, prompt).await?;

    prompt.say("")?;
    link_gamedata(&ctx, prompt, dry_run).await?;

    prompt.say("")?;
    generate_user_files(&ctx, prompt, dry_run)?;

    Ok(())
}
