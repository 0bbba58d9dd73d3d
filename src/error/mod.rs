// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          WatchError (~16 bytes)
//!                 |
//!      +------+---+---+--------+
//!      |      |       |        |
//!      v      v       v        v
//!     Git   Config   Io     Other
//!     Box    Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   GitCmd  SpawnFailed, Timeout
//!   Config  ParseError, InvalidValue, NotFound
//! ```
//!
//! Expected probe outcomes (not a repo, no upstream, ...) are NOT part of
//! this tree; they live in `git::probe::ProbeError` and are returned as
//! values, never propagated as failures.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WatchError`].
pub type WatchResult<T> = std::result::Result<T, WatchError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Git subprocess invocation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitCmdError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WatchError {
                fn from(err: $error) -> Self {
                    WatchError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitCmdError => Git,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Git Command Errors ---

/// Errors from running the git executable.
///
/// These cover the mechanics of the subprocess only; the sync-check outcome
/// taxonomy is `git::probe::ProbeError`.
#[derive(Debug, Error)]
pub enum GitCmdError {
    /// Failed to spawn the git process.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The git process did not exit within the configured timeout.
    #[error("'{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration source.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
