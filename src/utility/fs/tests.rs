// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::remove::{DEFAULT_REMOVAL_TIMEOUT, remove_dir_and_wait, remove_file_and_wait};
use super::walk::{
    WalkOptions, find_dirs_named, find_files, find_files_with_extension, parallel_walk,
};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_parallel_walk() {
    let temp = temp_dir();

    std::fs::create_dir(temp.path().join("subdir")).unwrap();
    std::fs::write(temp.path().join("file1.txt"), "").unwrap();
    std::fs::write(temp.path().join("subdir/file2.txt"), "").unwrap();

    let result = parallel_walk(temp.path(), &WalkOptions::default()).unwrap();

    assert_eq!(result.files().len(), 2);
    // root + subdir
    assert_eq!(result.directories().len(), 2);
    assert_eq!(result.error_count(), 0);
}

// Trees larger than the channel capacity must not stall the walkers.
#[test]
fn test_parallel_walk_exceeding_channel_capacity() {
    let temp = temp_dir();

    for d in 0..25 {
        let dir = temp.path().join(format!("dir{d:02}"));
        std::fs::create_dir(&dir).unwrap();
        for f in 0..100 {
            std::fs::write(dir.join(format!("file{f:03}.cfg")), "").unwrap();
        }
    }

    let result = parallel_walk(temp.path(), &WalkOptions::default()).unwrap();

    assert_eq!(result.files().len(), 2500);
    // root + 25 subdirs
    assert_eq!(result.directories().len(), 26);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn test_find_files_exceeding_channel_capacity() {
    let temp = temp_dir();

    for d in 0..15 {
        let dir = temp.path().join(format!("dir{d:02}"));
        std::fs::create_dir(&dir).unwrap();
        for f in 0..100 {
            std::fs::write(dir.join(format!("Lib{f:03}.dll")), "").unwrap();
        }
    }

    let found = find_files(temp.path(), "**/*.dll").unwrap();
    assert_eq!(found.len(), 1500);
}

#[test]
fn test_parallel_walk_missing_root() {
    let temp = temp_dir();
    let missing = temp.path().join("nope");
    assert!(parallel_walk(&missing, &WalkOptions::default()).is_err());
}

#[test]
fn test_mod_scan_sees_dotfiles_but_not_git_dir() {
    let temp = temp_dir();

    std::fs::create_dir(temp.path().join(".git")).unwrap();
    std::fs::write(temp.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    std::fs::write(temp.path().join(".hidden.netkan"), "{}").unwrap();
    std::fs::write(temp.path().join("mod.netkan"), "{}").unwrap();

    let result = parallel_walk(temp.path(), &WalkOptions::for_mod_scan()).unwrap();
    let names: Vec<_> = result
        .files()
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();

    assert!(names.contains(&".hidden.netkan".to_string()));
    assert!(names.contains(&"mod.netkan".to_string()));
    assert!(!names.contains(&"HEAD".to_string()));
}

#[test]
fn test_find_files_glob() {
    let temp = temp_dir();

    std::fs::write(temp.path().join("AwesomeMod.netkan"), "{}").unwrap();
    std::fs::create_dir(temp.path().join("extras")).unwrap();
    std::fs::write(temp.path().join("extras/Other.netkan"), "{}").unwrap();
    std::fs::write(temp.path().join("readme.md"), "").unwrap();

    let netkans = find_files(temp.path(), "**/*.netkan").unwrap();
    assert_eq!(netkans.len(), 2);
    assert!(
        netkans
            .iter()
            .all(|p| p.extension().unwrap() == "netkan")
    );
    // sorted output
    let mut sorted = netkans.clone();
    sorted.sort();
    assert_eq!(netkans, sorted);
}

#[test]
fn test_find_files_with_extension_case_insensitive() {
    let temp = temp_dir();

    std::fs::write(temp.path().join("Mod.csproj"), "").unwrap();
    std::fs::write(temp.path().join("Other.CSPROJ"), "").unwrap();
    std::fs::write(temp.path().join("notes.txt"), "").unwrap();

    let found = find_files_with_extension(temp.path(), "csproj").unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_find_dirs_named() {
    let temp = temp_dir();

    std::fs::create_dir_all(temp.path().join("mod/GameData/AwesomeMod")).unwrap();
    std::fs::create_dir_all(temp.path().join("other/gamedata")).unwrap();

    let dirs = find_dirs_named(temp.path(), "GameData").unwrap();
    assert_eq!(dirs.len(), 1);
    assert!(dirs[0].ends_with("mod/GameData"));
}

#[tokio::test]
async fn test_remove_dir_and_wait() {
    let temp = temp_dir();
    let dir = temp.path().join("doomed");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("payload.cfg"), "x").unwrap();

    remove_dir_and_wait(&dir, DEFAULT_REMOVAL_TIMEOUT).await.unwrap();
    assert!(std::fs::symlink_metadata(&dir).is_err());
}

#[tokio::test]
async fn test_remove_file_and_wait() {
    let temp = temp_dir();
    let file = temp.path().join("doomed.txt");
    std::fs::write(&file, "x").unwrap();

    remove_file_and_wait(&file, DEFAULT_REMOVAL_TIMEOUT).await.unwrap();
    assert!(std::fs::symlink_metadata(&file).is_err());
}

#[tokio::test]
async fn test_remove_missing_dir_is_error() {
    let temp = temp_dir();
    let missing = temp.path().join("never-existed");
    assert!(
        remove_dir_and_wait(&missing, DEFAULT_REMOVAL_TIMEOUT)
            .await
            .is_err()
    );
}
