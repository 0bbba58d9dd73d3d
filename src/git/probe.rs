// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git sync-status probe.
//!
//! ```text
//! check_sync(dir, config) -> SyncReport
//!   1. availability cache       -> ToolUnavailable
//!   2. dir exists?              -> NotFound (no git invocation)
//!   3. rev-parse is-inside-work-tree != "true"  -> NotARepository
//!   4. rev-parse --abbrev-ref HEAD empty        -> NoBranch
//!   5. rev-list --left-right --count <remote>/<b>...<b>
//!      stdout "<behind>\t<ahead>"; unparseable  -> NoUpstream
//!   6. SyncStatus { branch, ahead, behind }
//! ```
//!
//! The count line is parsed as `<behind>\t<ahead>` while the summary
//! displays ahead first; the mapping is deliberate and pinned by tests.
//! Unexpected failures (spawn, timeout) are logged and surfaced as
//! `Internal` outcomes: callers always receive a report.

use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::availability;
use super::cmd::{GitOutput, git_output};

/// Settings for a single sync check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Timeout applied to each git invocation.
    pub timeout: Duration,
    /// Remote the ahead/behind counts are computed against.
    pub remote: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            remote: "origin".to_string(),
        }
    }
}

/// Successful sync-check outcome. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncStatus {
    branch: String,
    ahead: u32,
    behind: u32,
}

impl SyncStatus {
    /// Builds a status from already-known counts.
    #[must_use]
    pub const fn new(branch: String, ahead: u32, behind: u32) -> Self {
        Self {
            branch,
            ahead,
            behind,
        }
    }

    /// Current branch name.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Commits present only locally.
    #[must_use]
    pub const fn ahead(&self) -> u32 {
        self.ahead
    }

    /// Commits present only on the remote.
    #[must_use]
    pub const fn behind(&self) -> u32 {
        self.behind
    }

    /// True if the branch and its upstream have diverged in either direction.
    #[must_use]
    pub const fn out_of_sync(&self) -> bool {
        self.ahead != 0 || self.behind != 0
    }

    /// Human-readable summary, ahead first, plain decimal integers.
    /// Any highlighting of non-zero counts is the consumer's concern.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Ahead: {} | Behind: {}", self.ahead, self.behind)
    }
}

/// Expected sync-check failures.
///
/// Every variant is recoverable per item: a failed check for one mod never
/// affects another and never aborts anything.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ProbeError {
    /// The git executable is absent or not runnable.
    #[error("git is not available: {0}")]
    ToolUnavailable(String),

    /// The directory does not exist.
    #[error("directory not found")]
    NotFound,

    /// The directory is not a git working tree.
    #[error("not a git repository")]
    NotARepository,

    /// The current branch cannot be determined.
    #[error("cannot determine branch")]
    NoBranch,

    /// The branch tracks no remote, or the count output was unparseable.
    #[error("not tracking a remote branch")]
    NoUpstream,

    /// Unexpected failure: spawn error, timeout, and the like.
    #[error("sync check failed: {0}")]
    Internal(String),
}

/// Outcome of one probe invocation, produced exactly once.
pub type SyncReport = std::result::Result<SyncStatus, ProbeError>;

/// Checks the git sync status of `dir` against its upstream remote.
///
/// Never panics and never propagates an unexpected error; the caller always
/// receives a report.
pub async fn check_sync(dir: &Path, config: &ProbeConfig) -> SyncReport {
    let avail = availability::check().await;
    if !avail.is_available() {
        let reason = avail.error().unwrap_or("unknown error").to_string();
        return Err(ProbeError::ToolUnavailable(reason));
    }

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "directory not found");
        return Err(ProbeError::NotFound);
    }

    // Classification follows stdout, not the exit code: rev-parse outside a
    // work tree prints nothing and exits non-zero, which lands here too.
    let out = run_step(&["rev-parse", "--is-inside-work-tree"], dir, config).await?;
    if out.stdout() != "true" {
        debug!(dir = %dir.display(), "not a git repository");
        return Err(ProbeError::NotARepository);
    }

    let out = run_step(&["rev-parse", "--abbrev-ref", "HEAD"], dir, config).await?;
    let branch = out.stdout().to_string();
    if branch.is_empty() {
        debug!(dir = %dir.display(), "cannot determine branch");
        return Err(ProbeError::NoBranch);
    }

    let range = format!("{}/{}...{}", config.remote, branch, branch);
    let out = run_step(&["rev-list", "--left-right", "--count", &range], dir, config).await?;
    // A non-zero exit here does not itself fail the check; stdout is parsed
    // best-effort and an unparseable line means the branch has no upstream.
    match parse_count_line(out.stdout()) {
        Some((behind, ahead)) => {
            debug!(dir = %dir.display(), branch, ahead, behind, "sync check done");
            Ok(SyncStatus {
                branch,
                ahead,
                behind,
            })
        }
        None => {
            debug!(dir = %dir.display(), branch, "branch tracks no remote");
            Err(ProbeError::NoUpstream)
        }
    }
}

/// Runs one git invocation, mapping subprocess failures to `Internal`.
async fn run_step(args: &[&str], dir: &Path, config: &ProbeConfig) -> Result<GitOutput, ProbeError> {
    git_output(args, Some(dir), config.timeout)
        .await
        .map_err(|e| {
            warn!(dir = %dir.display(), error = %e, "git invocation failed");
            ProbeError::Internal(e.to_string())
        })
}

/// Parses the `rev-list --left-right --count` output line.
///
/// The line is `<behind>\t<ahead>` for a `<remote>/<branch>...<branch>`
/// range. Returns `(behind, ahead)`; `None` if either field is missing or
/// non-numeric.
pub(crate) fn parse_count_line(line: &str) -> Option<(u32, u32)> {
    let (behind, ahead) = line.split_once('\t')?;
    Some((behind.trim().parse().ok()?, ahead.trim().parse().ok()?))
}
