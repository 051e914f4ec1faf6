// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:    parallel_walk()            ignore::WalkParallel (multi-core)
//!          find_files()               glob pattern matching
//!          find_files_with_extension / find_dirs_named
//! remove:  remove_dir_and_wait()      delete + bounded settle-wait
//!          remove_file_and_wait()
//! ```

pub mod remove;
pub mod walk;

#[cfg(test)]
mod tests;
