// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modwatch using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modwatch [global options] <command>
//! check [--json] <DIR>...
//! version
//! ```

pub mod check;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::check::CheckArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Local Mod Git Sync Watcher
///
/// Reports the git sync status of locally developed mod folders.
#[derive(Debug, Parser)]
#[command(
    name = "modwatch",
    author,
    version,
    about = "Git sync-status watcher for locally developed mods",
    long_about = "modwatch Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reports, per mod folder, the current branch and the number of\n\
                  commits it is ahead of and behind its upstream remote. Folders\n\
                  that are missing, are not repositories, or track no remote are\n\
                  reported with the specific reason instead.",
    after_help = "CONFIG FILES:\n\n\
                  By default, modwatch loads `modwatch.toml` from the current\n\
                  directory if present. Additional TOML files can be layered with\n\
                  --config; later files override earlier ones, MODWATCH_* environment\n\
                  variables override files, and command-line flags override\n\
                  everything. Use --no-default-config to skip the auto-loaded file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the git sync status of the given mod folders
    Check(CheckArgs),

    /// Print the modwatch version
    Version,
}

/// Parses the command line.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
