// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns the skip directories list.
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Creates options for scanning a mod repository or a game install.
    ///
    /// Everything is visible (dotfiles included, matching a plain recursive
    /// directory listing), except the `.git` metadata directory itself.
    #[must_use]
    pub fn for_mod_scan() -> Self {
        Self::builder()
            .with_include_hidden(true)
            .with_skip_dirs(vec![".git".to_string()])
            .build()
    }
}

/// Result of a parallel walk operation.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    pub(crate) const fn new(
        files: Vec<PathBuf>,
        directories: Vec<PathBuf>,
        error_count: usize,
    ) -> Self {
        Self {
            files,
            directories,
            error_count,
        }
    }

    /// Returns the files found during traversal.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the directories found during traversal.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Returns the number of errors encountered.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

/// An entry reported by a walker thread.
enum WalkEntry {
    File(PathBuf),
    Dir(PathBuf),
}

/// Builds a `WalkBuilder` with the given options, using `filter_entry` for directory skipping.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.hidden(!options.include_hidden());

    // Ignore files must never hide mod content from a scan.
    builder.git_ignore(false);
    builder.git_global(false);
    builder.git_exclude(false);

    // filter_entry is evaluated BEFORE descending
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

/// Performs parallel directory traversal using `ignore::WalkParallel`.
///
/// Walker threads push entries into a bounded flume channel that a dedicated
/// collector thread drains while the traversal runs, so a tree larger than
/// the channel capacity never stalls the walkers. Returned paths are sorted
/// so callers see a stable order regardless of traversal scheduling.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    // Bounded channel to keep memory flat on huge directory trees
    let (tx, rx) = bounded::<WalkEntry>(1000);
    let error_count = Arc::new(AtomicUsize::new(0));

    let collector = std::thread::spawn(move || {
        let mut files = Vec::new();
        let mut directories = Vec::new();
        for entry in rx.iter() {
            match entry {
                WalkEntry::File(path) => files.push(path),
                WalkEntry::Dir(path) => directories.push(path),
            }
        }
        (files, directories)
    });

    let builder = build_walker(root, options);
    let parallel = builder.build_parallel();

    parallel.run(|| {
        let tx = tx.clone();
        let error_count = Arc::clone(&error_count);

        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    let path = entry.path();

                    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        let _ = tx.send(WalkEntry::Dir(path.to_path_buf()));
                    } else if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        let _ = tx.send(WalkEntry::File(path.to_path_buf()));
                    }
                }
                Err(e) => {
                    warn!(error = %e, "walk error");
                    error_count.fetch_add(1, Ordering::Relaxed);
                }
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);

    let (mut files, mut directories) = collector
        .join()
        .map_err(|_| anyhow::anyhow!("walk collector thread panicked"))?;
    files.sort();
    directories.sort();
    let error_count = error_count.load(Ordering::Relaxed);

    Ok(WalkResult::new(files, directories, error_count))
}

/// Finds files matching a glob pattern using parallel traversal.
///
/// Uses the `wax` crate for glob matching combined with
/// `ignore::WalkParallel`. Matches are drained on a collector thread while
/// the walkers run, same as [`parallel_walk`]. Results are sorted.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use kspdev_rs::utility::fs::walk::find_files;
///
/// let netkans = find_files("/path/to/repo", "**/*.netkan")?;
/// for file in netkans {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    use wax::{Glob, Program};

    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let (tx, rx) = bounded::<PathBuf>(1000);
    let glob = Arc::new(glob);
    let root_path = root.to_path_buf();

    let collector = std::thread::spawn(move || rx.iter().collect::<Vec<PathBuf>>());

    let builder = build_walker(root, &WalkOptions::for_mod_scan());
    let parallel = builder.build_parallel();

    parallel.run(|| {
        let tx = tx.clone();
        let glob = Arc::clone(&glob);
        let root_path = root_path.clone();

        Box::new(move |entry_result| {
            if let Ok(entry) = entry_result
                && entry.file_type().is_some_and(|ft| ft.is_file())
                && let Ok(rel_path) = entry.path().strip_prefix(&root_path)
                && glob.is_match(rel_path)
            {
                let _ = tx.send(entry.path().to_path_buf());
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files = collector
        .join()
        .map_err(|_| anyhow::anyhow!("walk collector thread panicked"))?;
    files.sort();
    Ok(files)
}

/// Finds files with the given extension (without the leading dot), sorted.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn find_files_with_extension<P: AsRef<Path>>(
    root: P,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let result = parallel_walk(root, &WalkOptions::for_mod_scan())?;
    Ok(result
        .files()
        .iter()
        .filter(|p| p.extension().is_some_and(|e| e.eq_ignore_ascii_case(extension)))
        .cloned()
        .collect())
}

/// Finds directories whose final component equals `name`, sorted.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn find_dirs_named<P: AsRef<Path>>(root: P, name: &str) -> Result<Vec<PathBuf>> {
    let result = parallel_walk(root, &WalkOptions::for_mod_scan())?;
    Ok(result
        .directories()
        .iter()
        .filter(|p| p.file_name().is_some_and(|n| n == name))
        .cloned()
        .collect())
}
