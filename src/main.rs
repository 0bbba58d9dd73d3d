// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Check | Version
//! ```

use std::process::ExitCode;

use modwatch::cli::global::GlobalOptions;
use modwatch::cli::{self, Command};
use modwatch::cmd::check::run_check_command;
use modwatch::config::WatchConfig;
use modwatch::config::loader::ConfigLoader;
use modwatch::logging::init_logging;
use modwatch::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Check(args)) => match load_config(&cli.global) {
            Ok(config) => run_check_command(args, &config).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> modwatch::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("modwatch.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("MODWATCH");

    // CLI flags are the highest-priority overrides
    if let Some(secs) = global.timeout {
        loader = loader.set("probe.timeout_secs", i64::try_from(secs).unwrap_or(i64::MAX))?;
    }
    if let Some(jobs) = global.jobs {
        loader = loader.set(
            "registry.max_concurrent",
            i64::try_from(jobs).unwrap_or(i64::MAX),
        )?;
    }
    if let Some(remote) = &global.remote {
        loader = loader.set("probe.remote", remote.as_str())?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> modwatch::error::Result<WatchConfig> {
    let loader = build_config_loader(global)?;
    for (kind, path) in loader.loaded_files() {
        tracing::debug!(kind = %kind, path = %path.display(), "config source");
    }
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
