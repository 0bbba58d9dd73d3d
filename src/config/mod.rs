// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modwatch.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. modwatch.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MODWATCH_* env vars
//! 5. CLI overrides (--timeout, --jobs, --remote)
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore:
//!
//! ```text
//! MODWATCH_PROBE__TIMEOUT_SECS=5      -> probe.timeout_secs = 5
//! MODWATCH_PROBE__REMOTE=upstream     -> probe.remote = "upstream"
//! MODWATCH_REGISTRY__MAX_CONCURRENT=2 -> registry.max_concurrent = 2
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::git::probe::ProbeConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Probe settings (`[probe]` section).
    pub probe: ProbeSection,
    /// Registry settings (`[registry]` section).
    pub registry: RegistrySection,
}

/// `[probe]` section: how each git sync check runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeSection {
    /// Per-invocation timeout in seconds. A hung git process never stalls
    /// the whole batch.
    pub timeout_secs: u64,

    /// Remote the ahead/behind counts are computed against.
    pub remote: String,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            remote: "origin".to_string(),
        }
    }
}

impl ProbeSection {
    /// Convert to the probe-level config consumed by `git::probe`.
    #[must_use]
    pub fn to_probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            remote: self.remote.clone(),
        }
    }
}

/// `[registry]` section: worker-pool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySection {
    /// Cap on concurrent probes. Defaults to the number of CPU cores
    /// when unset.
    pub max_concurrent: Option<usize>,
}
