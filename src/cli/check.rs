// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `check` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `modwatch check`.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Mod folders to check. The identifier shown per row is the final
    /// path component.
    #[arg(value_name = "DIR", required = true, num_args = 1..)]
    pub dirs: Vec<PathBuf>,

    /// Print the snapshot as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
