// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GameData symlinking.
//!
//! Each immediate subdirectory of the repository's `GameData` is one mod
//! payload. After a per-folder confirmation, the matching folder in the
//! install's `GameData` is removed (directory or stale symlink, with a
//! bounded wait for the removal to settle) and replaced by a symlink to the
//! repository's copy. A failure on one folder is reported and the loop moves
//! on; it never aborts the run.

use std::io::{BufRead, Write};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tracing::{debug, info, warn};

use super::SetupContext;
use crate::error::{FsError, Result};
use crate::prompt::Prompt;
use crate::utility::fs::remove::{
    DEFAULT_REMOVAL_TIMEOUT, remove_dir_and_wait, remove_file_and_wait,
};
use crate::utility::fs::walk::find_dirs_named;

/// Offers to symlink every repository GameData folder into the install.
///
/// # Errors
///
/// Returns an error on console stream failure or end of input. Filesystem
/// failures are isolated per folder.
pub async fn link_gamedata<R: BufRead, W: Write>(
    ctx: &SetupContext,
    prompt: &mut Prompt<R, W>,
    dry_run: bool,
) -> Result<()> {
    let roots = find_dirs_named(ctx.repo_dir(), "GameData")?;
    let Some(root) = roots.first() else {
        // Realistically there's at most one GameData per repo.
        debug!(repo = %ctx.repo_dir().display(), "no GameData directory in the repo");
        return Ok(());
    };

    let mod_dirs = immediate_subdirs(root)?;
    if mod_dirs.is_empty() {
        prompt.say("No GameData found in the repo. Cannot symlink.")?;
        return Ok(());
    }

    prompt.say("GameData found in the repo: found folder(s):")?;
    for dir in &mod_dirs {
        prompt.say(dir.display().to_string())?;
    }
    prompt.say(
        "NOTE: symlinking will delete and replace the old mod folder in your KSP install with a link to the same folder in the repo.",
    )?;
    prompt.say(
        "Answer yes only if you are sure there are no changes in your KSP GameData that you can't lose.",
    )?;

    for mod_dir in &mod_dirs {
        let Some(name) = mod_dir.file_name() else {
            continue;
        };

        let confirmed = prompt.ask_yes_no(
            &format!(
                "Do you want to symlink GameData{MAIN_SEPARATOR}{} to your install?",
                name.to_string_lossy()
            ),
            true,
        )?;
        if !confirmed {
            continue;
        }

        let dest = ctx.install_game_data().join(name);
        match replace_with_symlink(&dest, mod_dir, dry_run).await {
            Ok(()) => {
                prompt.say(format!(
                    "Symlink created from {} to {}",
                    mod_dir.display(),
                    dest.display()
                ))?;
            }
            Err(e) => {
                warn!(dest = %dest.display(), error = %e, "symlink failed");
                prompt.say(format!("{e}"))?;
            }
        }
    }

    Ok(())
}

/// Removes whatever occupies `dest` and links it to `src`.
async fn replace_with_symlink(dest: &Path, src: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        info!(src = %src.display(), dest = %dest.display(), "dry: would symlink");
        return Ok(());
    }

    // symlink_metadata: an existing symlink must be treated as the link
    // itself, not the directory it points at.
    match std::fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => {
            remove_dir_and_wait(dest, DEFAULT_REMOVAL_TIMEOUT).await?;
        }
        Ok(_) => {
            remove_file_and_wait(dest, DEFAULT_REMOVAL_TIMEOUT).await?;
        }
        Err(_) => {}
    }

    let target = std::fs::canonicalize(src).map_err(|e| FsError::IoError {
        path: src.display().to_string(),
        source: e,
    })?;
    create_dir_symlink(&target, dest).map_err(|e| FsError::IoError {
        path: dest.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// The immediate subdirectories of `root`, sorted by name.
fn immediate_subdirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)
        .map_err(|e| FsError::IoError {
            path: root.display().to_string(),
            source: e,
        })?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    Ok(dirs)
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
