// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modwatch::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["modwatch", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn cli_check_single_dir() {
    let cli = Cli::try_parse_from(["modwatch", "check", "mods/my-mod"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.dirs, vec![PathBuf::from("mods/my-mod")]);
    assert!(!args.json);
}

#[test]
fn cli_check_multiple_dirs_json() {
    let cli =
        Cli::try_parse_from(["modwatch", "check", "--json", "mods/alpha", "mods/beta"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.dirs.len(), 2);
    assert!(args.json);
}

#[test]
fn cli_check_requires_at_least_one_dir() {
    assert!(Cli::try_parse_from(["modwatch", "check"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "modwatch",
        "-l",
        "4",
        "--timeout",
        "30",
        "-j",
        "2",
        "--remote",
        "upstream",
        "check",
        "mods/my-mod",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.timeout, Some(30));
    assert_eq!(cli.global.jobs, Some(2));
    assert_eq!(cli.global.remote.as_deref(), Some("upstream"));
    assert!(matches!(cli.command, Some(Command::Check(_))));
}

#[test]
fn cli_repeated_config_files_keep_order() {
    let cli = Cli::try_parse_from([
        "modwatch",
        "-c",
        "base.toml",
        "--config",
        "override.toml",
        "--no-default-config",
        "version",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("base.toml"), PathBuf::from("override.toml")]
    );
    assert!(cli.global.no_default_config);
}

#[test]
fn cli_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["modwatch", "-l", "6", "version"]).is_err());
    assert!(Cli::try_parse_from(["modwatch", "--file-log-level", "9", "version"]).is_err());
}

#[test]
fn cli_log_file_with_file_level() {
    let cli = Cli::try_parse_from([
        "modwatch",
        "--log-file",
        "modwatch.log",
        "--file-log-level",
        "5",
        "version",
    ])
    .unwrap();
    assert_eq!(cli.global.log_file, Some(PathBuf::from("modwatch.log")));
    assert_eq!(cli.global.file_log_level, Some(5));
}
