// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.csproj.user` generation.
//!
//! For every `*.csproj` in the repository, after one overall confirmation,
//! emits a sibling `.csproj.user` listing `ReferencePath` entries: the
//! install's managed-binaries directory first, then the deduplicated parent
//! directory of every reference whose `<name>.dll` resolves under the
//! install's `GameData`. References that resolve nowhere are skipped;
//! resolution is best-effort by design.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use super::SetupContext;
use crate::error::{FsError, Result};
use crate::prompt::Prompt;
use crate::utility::fs::walk::{find_files, find_files_with_extension};

/// MSBuild project namespace carried by the generated file's root element.
pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

fn reference_regex() -> &'static Regex {
    static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    REFERENCE_REGEX.get_or_init(|| {
        Regex::new(r#"<Reference\s+Include\s*=\s*"([^"]+)""#).expect("valid reference pattern")
    })
}

/// Finds build descriptors and emits `.csproj.user` files beside them.
///
/// # Errors
///
/// Returns an error on console stream failure, end of input, or a failed
/// read/write of a descriptor.
pub fn generate_user_files<R: BufRead, W: Write>(
    ctx: &SetupContext,
    prompt: &mut Prompt<R, W>,
    dry_run: bool,
) -> Result<()> {
    let csprojs = find_files_with_extension(ctx.repo_dir(), "csproj")?;
    if csprojs.is_empty() {
        prompt.say("No .csproj files found in the repo.")?;
        return Ok(());
    }

    prompt.say(format!(
        "Found {} .csproj file(s) in the mod repo.",
        csprojs.len()
    ))?;
    let confirmed = prompt.ask_yes_no(
        "Do you want to add corresponding .csproj.user files referencing dependencies to your install?",
        true,
    )?;
    if !confirmed {
        return Ok(());
    }

    for csproj in &csprojs {
        prompt.say(format!("Creating {}.user", csproj.display()))?;
        if dry_run {
            info!(path = %csproj.display(), "dry: would write user file");
            continue;
        }
        write_user_file_for(csproj, ctx, prompt)?;
    }

    Ok(())
}

/// Resolves one descriptor's references and writes its `.user` sibling.
fn write_user_file_for<R: BufRead, W: Write>(
    csproj: &Path,
    ctx: &SetupContext,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let content = std::fs::read_to_string(csproj).map_err(|e| FsError::IoError {
        path: csproj.display().to_string(),
        source: e,
    })?;

    let references = parse_references(&content);
    if references.is_empty() {
        prompt.say("No references found.")?;
    }

    let reference_dirs = resolve_reference_dirs(&ctx.install_game_data(), &references);
    let rendered = render_user_file(&managed_dir(ctx.game_dir()), &reference_dirs);

    let mut user_path = OsString::from(csproj.as_os_str());
    user_path.push(".user");
    let user_path = PathBuf::from(user_path);

    std::fs::write(&user_path, rendered).map_err(|e| FsError::IoError {
        path: user_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// Extracts reference names from a descriptor, keeping only the portion
/// before the first comma (strips version/culture qualifiers).
#[must_use]
pub fn parse_references(content: &str) -> Vec<String> {
    reference_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|include| include.as_str().split(',').next())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Resolves each reference to the directory containing `<name>.dll` under
/// the install's `GameData`, deduplicated.
///
/// A reference with no match on disk is skipped silently (the original tool
/// behaves the same); a debug event records it for `-l 4` runs.
#[must_use]
pub fn resolve_reference_dirs(game_data: &Path, references: &[String]) -> BTreeSet<PathBuf> {
    let mut dirs = BTreeSet::new();
    if !game_data.is_dir() {
        debug!(path = %game_data.display(), "install has no GameData, skipping resolution");
        return dirs;
    }

    for reference in references {
        let matches = match find_files(game_data, &format!("**/{reference}.dll")) {
            Ok(matches) => matches,
            Err(e) => {
                debug!(reference = %reference, error = %e, "reference lookup failed");
                continue;
            }
        };
        match matches.first().and_then(|p| p.parent()) {
            // First match wins, hopefully there's only one.
            Some(parent) => {
                dirs.insert(parent.to_path_buf());
            }
            None => debug!(reference = %reference, "no matching dll under GameData"),
        }
    }
    dirs
}

/// The managed-binaries directory: `KSP_x64_Data/Managed` when the
/// platform-specific directory exists, else `KSP_Data/Managed` (the Linux
/// layout).
#[must_use]
pub fn managed_dir(game_dir: &Path) -> PathBuf {
    if game_dir.join("KSP_x64_Data").is_dir() {
        game_dir.join("KSP_x64_Data").join("Managed")
    } else {
        game_dir.join("KSP_Data").join("Managed")
    }
}

/// Renders the `.csproj.user` document: declaration, project root, one
/// `PropertyGroup`, one `ReferencePath` per path.
#[must_use]
pub fn render_user_file(managed: &Path, reference_dirs: &BTreeSet<PathBuf>) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str(&format!(
        "<Project ToolsVersion=\"Current\" xmlns=\"{MSBUILD_NAMESPACE}\">\n"
    ));
    out.push_str("  <PropertyGroup>\n");
    push_reference_path(&mut out, managed);
    for dir in reference_dirs {
        push_reference_path(&mut out, dir);
    }
    out.push_str("  </PropertyGroup>\n");
    out.push_str("</Project>\n");
    out
}

fn push_reference_path(out: &mut String, path: &Path) {
    out.push_str("    <ReferencePath>");
    out.push_str(&xml_escape(&path.display().to_string()));
    out.push_str("</ReferencePath>\n");
}

/// Escapes the characters XML text content cannot carry verbatim.
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
