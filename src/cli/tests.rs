// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modwatch", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_check_dirs() {
    let cli = Cli::try_parse_from(["modwatch", "check", "mods/alpha", "mods/beta"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(
        args.dirs,
        vec![PathBuf::from("mods/alpha"), PathBuf::from("mods/beta")]
    );
    assert!(!args.json);
}

#[test]
fn test_parse_check_requires_dirs() {
    let result = Cli::try_parse_from(["modwatch", "check"]);
    assert!(result.is_err(), "check without dirs should be rejected");
}

#[test]
fn test_parse_check_json() {
    let cli = Cli::try_parse_from(["modwatch", "check", "--json", "mods/alpha"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert!(args.json);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modwatch", "-l", "5", "-t", "3", "-j", "2", "--remote", "upstream", "check", "mods/alpha",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.timeout, Some(3));
    assert_eq!(cli.global.jobs, Some(2));
    assert_eq!(cli.global.remote.as_deref(), Some("upstream"));
}

#[test]
fn test_parse_log_level_range() {
    let result = Cli::try_parse_from(["modwatch", "-l", "6", "version"]);
    assert!(result.is_err(), "log level above 5 should be rejected");
}

#[test]
fn test_parse_config_files_repeatable() {
    let cli = Cli::try_parse_from([
        "modwatch",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--no-default-config",
        "version",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_config);
}
