// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation.
//!
//! ```text
//! run_check_command
//!   availability (reported once, globally)
//!   registry.track(dirs) --> wait_done --> snapshot
//!   table or --json
//! ```

use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::check::CheckArgs;
use crate::config::WatchConfig;
use crate::error::Result;
use crate::git::availability;
use crate::git::probe::SyncStatus;
use crate::registry::{ProbeStatus, SyncStatusRegistry, TrackedItem};

/// One snapshot row in `--json` output.
#[derive(Debug, Serialize)]
struct CheckRow<'a> {
    id: &'a str,
    path: String,
    status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    sync: Option<&'a SyncStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_of_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> CheckRow<'a> {
    fn from_item(item: &'a TrackedItem) -> Self {
        let (sync, out_of_sync, error) = match item.report() {
            Some(Ok(status)) => (Some(status), Some(status.out_of_sync()), None),
            Some(Err(e)) => (None, None, Some(e.to_string())),
            None => (None, None, None),
        };
        Self {
            id: item.id(),
            path: item.path().display().to_string(),
            status: item.status(),
            sync,
            out_of_sync,
            error,
        }
    }
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if git is unavailable or any tracked folder failed its
/// sync check. Per-item failures are still printed; the error only drives
/// the exit code.
pub async fn run_check_command(args: &CheckArgs, config: &WatchConfig) -> Result<()> {
    let avail = availability::check().await;
    if !avail.is_available() {
        // One global report instead of a per-item ToolUnavailable cascade
        eprintln!(
            "git not found: {}",
            avail.error().unwrap_or("unknown error")
        );
        anyhow::bail!("git is not available");
    }
    if let Some(version) = avail.version() {
        debug!(version, "git available");
    }

    let items: Vec<(String, PathBuf)> = args
        .dirs
        .iter()
        .map(|path| (mod_id(path), path.clone()))
        .collect();

    let registry = match config.registry.max_concurrent {
        Some(jobs) => SyncStatusRegistry::with_concurrency(config.probe.to_probe_config(), jobs),
        None => SyncStatusRegistry::new(config.probe.to_probe_config()),
    };
    registry.track(items);
    registry.wait_done().await;

    let snapshot = registry.snapshot();

    if args.json {
        let rows: Vec<CheckRow<'_>> = snapshot.iter().map(CheckRow::from_item).collect();
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize snapshot")?;
        println!("{json}");
    } else {
        print_table(&snapshot);
    }

    let failed = snapshot
        .iter()
        .filter(|item| matches!(item.report(), Some(Err(_))))
        .count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} mod checks failed", snapshot.len());
    }
    Ok(())
}

fn print_table(snapshot: &[TrackedItem]) {
    for item in snapshot {
        match item.report() {
            Some(Ok(status)) => {
                let marker = if status.out_of_sync() {
                    "  [out of sync]"
                } else {
                    ""
                };
                println!(
                    "{:24} {:16} {}{marker}",
                    item.id(),
                    status.branch(),
                    status.summary()
                );
            }
            Some(Err(e)) => println!("{:24} {e}", item.id()),
            None => println!("{:24} (pending)", item.id()),
        }
    }
}

/// Identifier for a mod folder: its final path component.
fn mod_id(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
