// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Netkan discovery and CKAN installation.
//!
//! Every `*.netkan` found in the repository is a JSON document whose
//! `identifier` names the mod package. A usable identifier leads to an
//! install offer; an unreadable file or a missing identifier is reported and
//! falls back to a free-text identifier prompt. Zero netkans triggers that
//! same fallback exactly once.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use super::SetupContext;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::tools::ckan::CkanTool;
use crate::tools::{Tool, ToolContext};
use crate::utility::fs::walk::find_files_with_extension;

/// Discovers netkan manifests and offers to install each through CKAN.
///
/// # Errors
///
/// Returns an error on console stream failure or end of input. CKAN-side
/// failures are reported and swallowed.
pub async fn discover_and_install<R: BufRead, W: Write>(
    ctx: &SetupContext,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let netkans = find_files_with_extension(ctx.repo_dir(), "netkan")?;

    for netkan in &netkans {
        let file_name = netkan
            .file_name()
            .map_or_else(|| netkan.display().to_string(), |n| n.to_string_lossy().into_owned());
        prompt.say(format!("Found netkan: {file_name}"))?;
        install_from_netkan(netkan, ctx, tool_ctx, prompt).await?;
    }

    if netkans.is_empty() {
        prompt.say("No .netkan files found in the repo.")?;
        fallback_install(
            "Do you wish to install a mod through CKAN anyway?",
            ctx,
            tool_ctx,
            prompt,
        )
        .await?;
    }

    Ok(())
}

/// Parses one netkan and offers to install its identifier.
async fn install_from_netkan<R: BufRead, W: Write>(
    netkan: &Path,
    ctx: &SetupContext,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    match read_identifier(netkan) {
        Some(identifier) => {
            prompt.say(format!(
                "Do you want to install mod {identifier} and its dependencies through CKAN?"
            ))?;
            if prompt.ask_yes_no("You can decline if you have already installed it.", true)? {
                run_ckan(&identifier, ctx, tool_ctx, prompt).await?;
            }
        }
        None => {
            prompt.say(format!("No identifier found in {}.", netkan.display()))?;
            fallback_install(
                "Do you wish to install a mod through CKAN anyway?",
                ctx,
                tool_ctx,
                prompt,
            )
            .await?;
        }
    }
    Ok(())
}

/// Extracts a non-empty `identifier` from a netkan JSON document.
///
/// An unreadable or malformed file counts as "no identifier"; the caller's
/// fallback path covers it either way.
fn read_identifier(netkan: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(netkan) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %netkan.display(), error = %e, "failed to read netkan");
            return None;
        }
    };
    let document: serde_json::Value = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            warn!(path = %netkan.display(), error = %e, "failed to parse netkan");
            return None;
        }
    };
    document
        .get("identifier")
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

/// Offers to install an arbitrary identifier after a missing manifest or
/// missing identifier was reported.
async fn fallback_install<R: BufRead, W: Write>(
    request_message: &str,
    ctx: &SetupContext,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    if !prompt.ask_yes_no(request_message, true)? {
        return Ok(());
    }

    let identifier = prompt.ask_nonempty("Input the identifier of the mod(s): ")?;
    run_ckan(&identifier, ctx, tool_ctx, prompt).await
}

/// Runs the CKAN install; a ckan-side problem (including a missing binary)
/// is reported and does not fail the setup flow.
async fn run_ckan<R: BufRead, W: Write>(
    identifier: &str,
    ctx: &SetupContext,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let tool = CkanTool::install(identifier, ctx.game_dir());
    if let Err(e) = tool.run(tool_ctx).await {
        warn!(identifier = %identifier, error = %e, "CKAN invocation failed");
        prompt.say(format!("CKAN invocation failed: {e}"))?;
    }
    Ok(())
}
