// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!    |
//!    v
//! build_command()  args, cwd, stdio
//!    |
//!    v
//! spawn() --> wait / wait_with_output
//!    |
//!    v
//! validate exit_code (skip if ALLOW_FAILURE)
//!    |
//!    v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Execution is fully blocking from the caller's perspective: `run()` only
//! resolves once the child has exited.

use crate::error::Result;
use anyhow::Context;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StdioMode};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag is not set).
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let output = match self.stdio_mode() {
            StdioMode::Capture => {
                let child = command
                    .spawn()
                    .with_context(|| format!("Failed to spawn: {cmd_line}"))?;
                trace!(process = %name, pid = ?child.id(), "spawned");

                let out = child
                    .wait_with_output()
                    .await
                    .with_context(|| format!("Failed to wait for: {cmd_line}"))?;
                ProcessOutput::new(
                    out.status.code().unwrap_or(-1),
                    String::from_utf8_lossy(&out.stdout).into_owned(),
                    String::from_utf8_lossy(&out.stderr).into_owned(),
                )
            }
            StdioMode::Inherit | StdioMode::Null => {
                let mut child = command
                    .spawn()
                    .with_context(|| format!("Failed to spawn: {cmd_line}"))?;
                trace!(process = %name, pid = ?child.id(), "spawned");

                let status = child
                    .wait()
                    .await
                    .with_context(|| format!("Failed to wait for: {cmd_line}"))?;
                ProcessOutput::new(status.code().unwrap_or(-1), String::new(), String::new())
            }
        };

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            anyhow::bail!("{} exited with code {}", name, output.exit_code());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        match self.stdio_mode() {
            StdioMode::Inherit => {
                command.stdin(Stdio::inherit());
                command.stdout(Stdio::inherit());
                command.stderr(Stdio::inherit());
            }
            StdioMode::Capture => {
                command.stdin(Stdio::null());
                command.stdout(Stdio::piped());
                command.stderr(Stdio::piped());
            }
            StdioMode::Null => {
                command.stdin(Stdio::null());
                command.stdout(Stdio::null());
                command.stderr(Stdio::null());
            }
        }

        command
    }
}
