// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-wide memoized git availability check.
//!
//! ```text
//! check() --> OnceCell --> which("git") --> git --version
//!                |
//!                v
//!    GitAvailability { available, version, error }
//! ```
//!
//! The check runs at most once per process, even when the first attempt
//! fails; callers needing a retry must restart the process. Concurrent first
//! callers are serialized by the cell, so probes never race a half-written
//! result or spawn redundant `--version` processes.

use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::cmd::git_output;

const VERSION_TIMEOUT: Duration = Duration::from_secs(10);

static AVAILABILITY: OnceCell<GitAvailability> = OnceCell::const_new();

/// Result of the one-time git availability check.
#[derive(Debug, Clone)]
pub struct GitAvailability {
    available: bool,
    version: Option<String>,
    error: Option<String>,
}

impl GitAvailability {
    /// Returns true if the git executable is present and runnable.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the trimmed `git --version` line, if available.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the failure reason, if the check failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn found(version: String) -> Self {
        Self {
            available: true,
            version: Some(version),
            error: None,
        }
    }

    fn missing(error: String) -> Self {
        Self {
            available: false,
            version: None,
            error: Some(error),
        }
    }
}

/// Returns the memoized availability result, computing it on first call.
pub async fn check() -> &'static GitAvailability {
    AVAILABILITY.get_or_init(probe_availability).await
}

async fn probe_availability() -> GitAvailability {
    let path = match which::which("git") {
        Ok(path) => path,
        Err(e) => {
            warn!(error = %e, "git not found in PATH");
            return GitAvailability::missing(format!("git not found in PATH: {e}"));
        }
    };
    debug!(path = %path.display(), "resolved git executable");

    match git_output(&["--version"], None, VERSION_TIMEOUT).await {
        Ok(out) if out.success() => {
            debug!(version = out.stdout(), "git available");
            GitAvailability::found(out.stdout().to_string())
        }
        Ok(out) => {
            warn!(
                exit_code = out.exit_code(),
                stderr = out.stderr(),
                "git --version failed"
            );
            GitAvailability::missing(format!(
                "git --version exited with code {}: {}",
                out.exit_code(),
                out.stderr()
            ))
        }
        Err(e) => {
            warn!(error = %e, "failed to run git --version");
            GitAvailability::missing(e.to_string())
        }
    }
}
