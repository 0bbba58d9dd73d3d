// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git probe module.
//!
//! ```text
//!            probe::check_sync(dir)
//!                      |
//!        availability::check() (once per process)
//!                      |
//!                      v
//!          cmd::git_output(args, cwd, timeout)
//!                      |
//!                      v
//!              git executable
//!   --version
//!   rev-parse --is-inside-work-tree
//!   rev-parse --abbrev-ref HEAD
//!   rev-list --left-right --count <remote>/<branch>...<branch>
//! ```
//!
//! Every invocation is timeout-bounded; a hung git process fails that one
//! probe with an `Internal` outcome instead of stalling the batch.

pub mod availability;
pub mod cmd;
pub mod probe;

#[cfg(test)]
mod tests;
