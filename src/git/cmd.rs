// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Timeout-bounded git subprocess runner.
//!
//! ```text
//! git_output(args, cwd, timeout)
//!        |
//!        v
//!   tokio::process::Command("git")
//!   GCM_INTERACTIVE=never  GIT_TERMINAL_PROMPT=0
//!   stdin null, stdout/stderr captured, kill_on_drop
//!        |
//!        v
//!   GitOutput { exit_code, stdout, stderr }   (streams trimmed, lossy UTF-8)
//! ```
//!
//! A non-zero exit code is not an error at this layer; callers classify it.
//! Only spawn failures and timeouts are.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::GitCmdError;

/// Output from a completed git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl GitOutput {
    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns trimmed stdout.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns trimmed stderr.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Full command line as a string (for logging and error messages).
fn command_line(args: &[&str]) -> String {
    let mut cmd = String::from("git");
    for arg in args {
        cmd.push(' ');
        cmd.push_str(arg);
    }
    cmd
}

/// Runs git with the given arguments and captures its output.
///
/// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so an
/// unconfigured remote can never block on a credential prompt.
///
/// # Errors
///
/// Returns a `GitCmdError` if the process cannot be spawned or does not exit
/// within `timeout`. On timeout the child is killed (`kill_on_drop`).
pub async fn git_output(
    args: &[&str],
    cwd: Option<&Path>,
    timeout: Duration,
) -> Result<GitOutput, GitCmdError> {
    let cmd_line = command_line(args);

    let mut command = Command::new("git");
    command
        .args(args)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(cwd) = cwd {
        command.current_dir(cwd);
        debug!(cwd = %cwd.display(), cmd = %cmd_line, "exec");
    } else {
        debug!(cmd = %cmd_line, "exec");
    }

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(GitCmdError::SpawnFailed {
                command: cmd_line,
                source,
            });
        }
        // Dropping the output future kills the child
        Err(_) => {
            return Err(GitCmdError::Timeout {
                command: cmd_line,
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let result = GitOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    };

    trace!(cmd = %cmd_line, exit_code = result.exit_code, "completed");
    Ok(result)
}
