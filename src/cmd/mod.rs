// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   setup, config
//! ```

pub mod config;
pub mod setup;
