// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! External process execution.
//!
//! ```text
//! builder.rs  ProcessBuilder (args, cwd, flags, stdio, which-cache)
//! runner.rs   async spawn + wait  -->  ProcessOutput
//! ```

pub mod builder;
mod runner;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StdioMode};

#[cfg(test)]
mod tests;
