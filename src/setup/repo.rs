// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository acquisition.
//!
//! Two modes, chosen interactively (or forced by `--repo` / `--url`):
//!
//! - existing clone: the path must open as a git repository (gix, read-only);
//! - fresh clone: a URL matching [`REPO_URL_PATTERN`] is cloned into
//!   `clone_root/<name>` by the git binary, after one final confirmation.
//!
//! Declining that confirmation ends the entire run: `acquire_repository`
//! returns `Ok(None)` and the caller stops. The git subprocess's exit status
//! is ignored, like every other external tool here.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::cli::setup::SetupArgs;
use crate::config::Config;
use crate::error::{FsError, Result};
use crate::prompt::Prompt;
use crate::tools::git::GitTool;
use crate::tools::{Tool, ToolContext};

/// Accepted repository URL shapes: `git://`, `ssh://`, `http(s)://`, and
/// SCP-style `user@host:path`.
pub const REPO_URL_PATTERN: &str =
    r"^(?:(?:git|ssh|https?)://[\w.@:/~-]+|git@[\w.-]+:[\w.@/~-]+)/?$";

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(REPO_URL_PATTERN).expect("valid URL pattern"))
}

/// Checks whether `url` looks like a cloneable repository URL.
#[must_use]
pub fn is_valid_repo_url(url: &str) -> bool {
    url_regex().is_match(url)
}

/// Derives the repository name from a URL's final path segment, stripping an
/// optional trailing `.git`.
///
/// `https://github.com/user/my-mod.git` yields `my-mod`.
#[must_use]
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    // SCP-style URLs without a path separator: user@host:repo.git
    let segment = segment.rsplit(':').next()?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Checks whether `path` is the working directory of a git repository.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    gix::open(path).is_ok()
}

/// Acquires the mod repository: validates an existing clone or performs a
/// fresh one.
///
/// Returns `Ok(None)` when the user declines the clone confirmation; the
/// caller treats that as an intentional end of the whole run.
///
/// # Errors
///
/// Returns an error on console stream failure, end of input, path
/// canonicalization failure, or a git spawn failure.
pub async fn acquire_repository<R: BufRead, W: Write>(
    args: &SetupArgs,
    config: &Config,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.repo {
        if is_git_repo(path) {
            return Ok(Some(normalize_dir(path)?));
        }
        prompt.say(format!(
            "'{}' does not point to a valid git repo.",
            path.display()
        ))?;
        return ask_existing_clone(prompt).map(Some);
    }

    if args.url.is_some() {
        return clone_fresh(args.url.as_deref(), config, tool_ctx, prompt).await;
    }

    if prompt.ask_yes_no("Have you already cloned the repo?", true)? {
        ask_existing_clone(prompt).map(Some)
    } else {
        clone_fresh(None, config, tool_ctx, prompt).await
    }
}

/// Prompts for an existing clone until the path opens as a git repository.
fn ask_existing_clone<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<PathBuf> {
    let answer = prompt.ask_until(
        "Enter git repository path: ",
        "Path does not exist or does not point to a valid git repo.",
        |s| is_git_repo(Path::new(s)),
    )?;
    normalize_dir(Path::new(&answer))
}

/// Prompts for (or validates) a URL, confirms the destination, and clones.
async fn clone_fresh<R: BufRead, W: Write>(
    preset_url: Option<&str>,
    config: &Config,
    tool_ctx: &ToolContext,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<PathBuf>> {
    let url = match preset_url {
        Some(url) if is_valid_repo_url(url) => url.to_string(),
        Some(url) => {
            prompt.say(format!("Invalid URL: {url}"))?;
            ask_repo_url(prompt)?
        }
        None => ask_repo_url(prompt)?,
    };

    let name = repo_name_from_url(&url)
        .ok_or_else(|| anyhow::anyhow!("could not derive a repository name from '{url}'"))?;
    let dest = config.clone_root()?.join(&name);

    let proceed = prompt.ask_yes_no(
        &format!(
            "Repo {name} found. It will be cloned at {}. Continue?",
            dest.display()
        ),
        true,
    )?;
    if !proceed {
        debug!("clone confirmation declined");
        return Ok(None);
    }

    GitTool::clone_repo(&url, &dest).run(tool_ctx).await?;
    Ok(Some(dest))
}

fn ask_repo_url<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<String> {
    Ok(prompt.ask_until("Enter the mod repo url: ", "Invalid URL.", is_valid_repo_url)?)
}

fn normalize_dir(path: &Path) -> Result<PathBuf> {
    let normalized = std::fs::canonicalize(path).map_err(|e| FsError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(normalized)
}
