// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     <- Additional TOML config files (can repeat)
//! --log-level N     <- Console verbosity (0-5)
//! --file-log-level  <- File verbosity (overrides --log-level)
//! --timeout SECS    <- probe.timeout_secs override
//! --jobs N          <- registry.max_concurrent override
//! --remote NAME     <- probe.remote override
//!
//! Precedence: CLI flags > MODWATCH_* env > --config > modwatch.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Timeout in seconds for each git invocation.
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of concurrent probes (default: CPU cores).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Remote to compare against (default: origin).
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Disables auto loading of modwatch.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}
