// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Removal helpers that absorb asynchronous deletion latency.
//!
//! Recursive directory deletion is not instantaneous on every platform; a
//! symlink created immediately afterwards can fail because the OS still
//! reports the old path as present. The helpers here delete, then poll with a
//! short sleep until the path is actually gone, bounded by a deadline, so a
//! platform that never reports the removal produces an explicit
//! [`FsError::RemovalTimeout`] instead of an unrecoverable hang.

use std::path::Path;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::trace;

use crate::error::{FsError, KspdevResult};

/// Poll interval while waiting for a removal to be visible.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Default deadline for [`remove_dir_and_wait`] / [`remove_file_and_wait`].
pub const DEFAULT_REMOVAL_TIMEOUT: Duration = Duration::from_secs(2);

/// Recursively removes a directory, then waits until the path is gone.
///
/// # Errors
///
/// Returns an [`FsError`] if the removal fails or if the path is still
/// present once `timeout` has elapsed.
pub async fn remove_dir_and_wait(path: &Path, timeout: Duration) -> KspdevResult<()> {
    std::fs::remove_dir_all(path).map_err(|e| FsError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    wait_until_gone(path, timeout).await
}

/// Removes a file (or a symlink, which reads as a file on some platforms),
/// then waits until the path is gone.
///
/// # Errors
///
/// Returns an [`FsError`] if the removal fails or if the path is still
/// present once `timeout` has elapsed.
pub async fn remove_file_and_wait(path: &Path, timeout: Duration) -> KspdevResult<()> {
    std::fs::remove_file(path).map_err(|e| FsError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    wait_until_gone(path, timeout).await
}

/// Polls until `path` no longer exists (symlinks checked without following).
async fn wait_until_gone(path: &Path, timeout: Duration) -> KspdevResult<()> {
    let start = Instant::now();
    while std::fs::symlink_metadata(path).is_ok() {
        if start.elapsed() >= timeout {
            return Err(FsError::RemovalTimeout {
                path: path.display().to_string(),
                waited_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into());
        }
        trace!(path = %path.display(), "waiting for removal to settle");
        sleep(POLL_INTERVAL).await;
    }
    Ok(())
}
