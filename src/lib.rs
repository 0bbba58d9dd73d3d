// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!          |                   check
//!          +----------+----------+
//!                     v
//!        ,---------------------------,
//!        |          config           |
//!        |   TOML, layered settings  |
//!        '-----+---------------+-----'
//!              |               |
//!              v               v
//!          registry           git
//!       tracked set,      availability,
//!       worker pool        cmd, probe
//!              \               /
//!               v             v
//!   +------------------------------------+
//!   |  foundation    error, logging      |
//!   +------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod registry;
