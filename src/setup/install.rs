// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game install resolution.
//!
//! Candidate order: `--game-dir` flag, the `KSPDEVPATH` environment variable,
//! `paths.game_dir` from config, then interactive prompting. Whatever the
//! source, the path only counts once it exists as a directory; invalid input
//! reprompts without limit. The returned path is canonical, absolute, and
//! carries no trailing separator.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{FsError, Result};
use crate::prompt::Prompt;

/// Environment variable holding the default KSP install path.
pub const GAME_PATH_ENV_VAR: &str = "KSPDEVPATH";

/// Resolves the KSP install directory.
///
/// Never gives up on invalid input; the only failure modes are I/O errors on
/// the console streams and end of input.
///
/// # Errors
///
/// Returns an error if the console streams fail, the input stream ends, or
/// the accepted path cannot be canonicalized.
pub fn resolve_game_dir<R: BufRead, W: Write>(
    cli_override: Option<&Path>,
    config: &Config,
    prompt: &mut Prompt<R, W>,
) -> Result<PathBuf> {
    let mut candidate: Option<PathBuf> = cli_override.map(Path::to_path_buf);

    if candidate.is_none() {
        candidate = candidate_from_env(prompt)?;
    }

    if candidate.is_none()
        && let Some(configured) = &config.paths.game_dir
    {
        debug!(path = %configured.display(), "using paths.game_dir from config");
        candidate = Some(configured.clone());
    }

    let dir = match candidate {
        Some(path) if path.is_dir() => path,
        Some(path) => {
            prompt.say(format!(
                "'{}' does not point to a valid directory.",
                path.display()
            ))?;
            ask_for_dir(prompt)?
        }
        None => ask_for_dir(prompt)?,
    };

    normalize_dir(&dir)
}

/// Reads `KSPDEVPATH`, reporting why it was not usable.
fn candidate_from_env<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<Option<PathBuf>> {
    match std::env::var(GAME_PATH_ENV_VAR) {
        Ok(value) if !value.is_empty() => {
            let path = PathBuf::from(&value);
            if path.is_dir() {
                Ok(Some(path))
            } else {
                prompt.say(format!(
                    "The {GAME_PATH_ENV_VAR} env variable was found, but it doesn't point to a valid directory."
                ))?;
                Ok(None)
            }
        }
        _ => {
            prompt.say(format!("Environment variable {GAME_PATH_ENV_VAR} not found."))?;
            Ok(None)
        }
    }
}

/// Nags until the answer is an existing directory.
fn ask_for_dir<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<PathBuf> {
    let answer = prompt.ask_until(
        "Input the path of your KSP install: ",
        "Invalid Path.",
        |s| Path::new(s).is_dir(),
    )?;
    Ok(PathBuf::from(answer))
}

/// Canonicalizes a directory path; canonical paths are absolute and carry no
/// trailing separator.
fn normalize_dir(path: &Path) -> Result<PathBuf> {
    let normalized = std::fs::canonicalize(path).map_err(|e| FsError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(normalized)
}
