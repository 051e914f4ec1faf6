// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for kspdev using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! kspdev [global options] <command>
//! setup [--game-dir DIR] [--repo PATH | --url URL] [-y]
//! version
//! options
//! inis
//! ```

pub mod global;
pub mod setup;


use crate::cli::global::GlobalOptions;
use crate::cli::setup::SetupArgs;
use clap::{Parser, Subcommand};

/// KSP Mod Development Environment Setup Tool - Rust Port
///
/// Prepares a Kerbal Space Program install for mod development.
#[derive(Debug, Parser)]
#[command(
    name = "kspdev",
    author,
    version,
    about = "KSP Mod Development Environment Setup Tool",
    long_about = "kspdev-rs Copyright (C) 2026 kspdev-rs contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prepares a Kerbal Space Program install for mod development:\n\
                  locates the install, clones or validates the mod repository,\n\
                  installs its CKAN package, symlinks the repository's GameData\n\
                  folders into the install, and generates .csproj.user files\n\
                  pointing at the install's assemblies. See `kspdev <command>\n\
                  --help` for more information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, kspdev will look for a master INI `kspdev.toml` in\n\
                  the current directory. Additional INIs can be specified with\n\
                  --ini, those will be loaded after the master. Use\n\
                  --no-default-inis to disable auto detection and only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by kspdev.
    Inis,

    /// Sets up the mod development environment.
    Setup(SetupArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
