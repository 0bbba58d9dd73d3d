// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::git::availability;
use crate::git::probe::{ProbeConfig, ProbeError, SyncStatus, check_sync, parse_count_line};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Runs a git command in `cwd`, panicking on failure (test setup only).
fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initializes a repository with one empty commit.
/// Returns the name of the default branch (master or main depending on git config).
fn init_repo_with_commit(path: &Path) -> String {
    git(&["init", "--quiet"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
    git(
        &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
        path,
    );

    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .current_dir(path)
        .output()
        .expect("failed to run git branch");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

// --- parsing ---

#[test]
fn test_parse_count_line_valid() {
    // field order is <behind>\t<ahead>
    assert_eq!(parse_count_line("3\t5"), Some((3, 5)));
    assert_eq!(parse_count_line("0\t0"), Some((0, 0)));
    assert_eq!(parse_count_line("12\t7"), Some((12, 7)));
}

#[test]
fn test_parse_count_line_invalid() {
    assert_eq!(parse_count_line(""), None);
    assert_eq!(parse_count_line("3"), None);
    assert_eq!(parse_count_line("3 5"), None);
    assert_eq!(parse_count_line("a\tb"), None);
    assert_eq!(parse_count_line("3\t5\t7"), None);
    assert_eq!(parse_count_line("-1\t5"), None);
}

// --- summary formatting ---

#[test]
fn test_summary_displays_ahead_first() {
    // parsed (behind=3, ahead=5) renders with ahead first
    let status = SyncStatus::new("main".to_string(), 5, 3);
    insta::assert_snapshot!(status.summary(), @"Ahead: 5 | Behind: 3");
    assert!(status.out_of_sync());
}

#[test]
fn test_summary_in_sync_zeros() {
    let status = SyncStatus::new("main".to_string(), 0, 0);
    insta::assert_snapshot!(status.summary(), @"Ahead: 0 | Behind: 0");
    assert!(!status.out_of_sync());
}

#[test]
fn test_out_of_sync_either_direction() {
    assert!(SyncStatus::new("main".to_string(), 1, 0).out_of_sync());
    assert!(SyncStatus::new("main".to_string(), 0, 1).out_of_sync());
}

// --- availability ---

#[tokio::test]
async fn test_availability_is_memoized() {
    let first = availability::check().await;
    let second = availability::check().await;
    // same &'static result, computed once per process
    assert!(std::ptr::eq(first, second));
    // the test suite requires git in PATH
    assert!(first.is_available(), "git must be installed to run tests");
    assert!(first.version().is_some());
    assert!(first.error().is_none());
}

// --- check_sync ---

#[tokio::test]
async fn test_check_sync_missing_dir_is_not_found() {
    let temp = temp_dir();
    let missing = temp.path().join("does_not_exist");
    let report = check_sync(&missing, &ProbeConfig::default()).await;
    assert_eq!(report, Err(ProbeError::NotFound));
}

#[tokio::test]
async fn test_check_sync_plain_dir_is_not_a_repository() {
    let temp = temp_dir();
    let report = check_sync(temp.path(), &ProbeConfig::default()).await;
    assert_eq!(report, Err(ProbeError::NotARepository));
}

#[tokio::test]
async fn test_check_sync_no_remote_is_no_upstream() {
    let temp = temp_dir();
    let _ = init_repo_with_commit(temp.path());
    let report = check_sync(temp.path(), &ProbeConfig::default()).await;
    assert_eq!(report, Err(ProbeError::NoUpstream));
}

#[tokio::test]
async fn test_check_sync_timeout_is_internal() {
    let temp = temp_dir();
    let _ = init_repo_with_commit(temp.path());

    // A timeout this short expires before any git invocation can finish
    let config = ProbeConfig {
        timeout: std::time::Duration::from_nanos(1),
        ..ProbeConfig::default()
    };
    let report = check_sync(temp.path(), &config).await;
    match report {
        Err(ProbeError::Internal(message)) => {
            assert!(message.contains("timed out"), "unexpected message: {message}");
        }
        other => panic!("expected Internal timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_check_sync_fresh_clone_is_in_sync() {
    let upstream = temp_dir();
    let branch = init_repo_with_commit(upstream.path());

    let work = temp_dir();
    let clone = work.path().join("clone");
    git(
        &[
            "clone",
            "--quiet",
            &upstream.path().display().to_string(),
            &clone.display().to_string(),
        ],
        work.path(),
    );

    let status = check_sync(&clone, &ProbeConfig::default())
        .await
        .expect("fresh clone should probe cleanly");
    assert_eq!(status.branch(), branch);
    assert_eq!(status.ahead(), 0);
    assert_eq!(status.behind(), 0);
    assert!(!status.out_of_sync());
}

#[tokio::test]
async fn test_check_sync_unknown_remote_is_no_upstream() {
    let upstream = temp_dir();
    let _ = init_repo_with_commit(upstream.path());

    let work = temp_dir();
    let clone = work.path().join("clone");
    git(
        &[
            "clone",
            "--quiet",
            &upstream.path().display().to_string(),
            &clone.display().to_string(),
        ],
        work.path(),
    );

    let config = ProbeConfig {
        remote: "nonexistent".to_string(),
        ..ProbeConfig::default()
    };
    let report = check_sync(&clone, &config).await;
    assert_eq!(report, Err(ProbeError::NoUpstream));
}
