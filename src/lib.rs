// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              setup / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--------+---------+-------'
//!                       |         |
//!                       v         v
//!                    setup      tools
//!             install / repo   git / ckan
//!             netkan / gamedata / csproj
//!                       |
//!                       v
//!                    prompt
//!             injected console I/O
//!
//!   +-----------------------------------------+
//!   |  core     process spawning, which cache |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod setup;
pub mod tools;
pub mod utility;
