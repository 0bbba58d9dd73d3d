// modwatch: Local Mod Git Sync Watcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync-status registry: tracked mod set plus a bounded worker pool.
//!
//! ```text
//! SyncStatusRegistry::new(probe)  [.with_concurrency(n)]
//!   .track(items)      replace the tracked set, spawn one probe per item
//!   .snapshot()        non-blocking view, Pending | Done
//!   .wait_done().await drain the current generation
//!
//! per item:  Pending --(probe completes)--> Done   (once, irreversible)
//! workers share a semaphore; re-track cancels the abandoned generation
//! ```
//!
//! Each slot publishes its completed report through a `OnceLock`, so a
//! snapshot reader observes either no report or a whole one, never a
//! half-written record. Abandoned generations keep no registry reference;
//! their late completions write into slots nobody reads.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::git::probe::{ProbeConfig, SyncReport, check_sync};

/// Lifecycle of one tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// Probe scheduled, no report yet.
    Pending,
    /// Probe completed, report available.
    Done,
}

/// Internal write-once slot owned by exactly one worker task.
#[derive(Debug)]
struct TrackedSlot {
    id: String,
    path: PathBuf,
    report: OnceLock<SyncReport>,
}

/// Snapshot view of one tracked item.
#[derive(Debug, Clone)]
pub struct TrackedItem {
    id: String,
    path: PathBuf,
    report: Option<SyncReport>,
}

impl TrackedItem {
    /// Item identifier (in practice the mod folder name).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tracked directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pending until the probe has published its report.
    #[must_use]
    pub const fn status(&self) -> ProbeStatus {
        if self.report.is_some() {
            ProbeStatus::Done
        } else {
            ProbeStatus::Pending
        }
    }

    /// The probe outcome, present once `status()` is `Done`.
    #[must_use]
    pub const fn report(&self) -> Option<&SyncReport> {
        self.report.as_ref()
    }
}

/// One tracked set and its in-flight workers. Replaced wholesale on re-track.
struct Generation {
    slots: Vec<Arc<TrackedSlot>>,
    cancel: CancellationToken,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Generation {
    fn empty() -> Self {
        Self {
            slots: Vec::new(),
            cancel: CancellationToken::new(),
            handles: Mutex::new(Vec::new()),
        }
    }
}

/// Registry of mod folders and their latest git sync reports.
///
/// `track` is fire-and-forget; consumers poll `snapshot` (e.g. once per
/// render pass) and tolerate arbitrary completion order. A failure for one
/// item never affects any other item and never aborts the registry.
pub struct SyncStatusRegistry {
    probe: ProbeConfig,
    semaphore: Arc<Semaphore>,
    generation: RwLock<Arc<Generation>>,
}

impl SyncStatusRegistry {
    /// Creates a registry whose worker cap is the number of CPU cores.
    #[must_use]
    pub fn new(probe: ProbeConfig) -> Self {
        let max_concurrent = std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(4); // Fallback to 4 if unavailable
        Self::with_concurrency(probe, max_concurrent)
    }

    /// Creates a registry with a specific worker cap.
    #[must_use]
    pub fn with_concurrency(probe: ProbeConfig, max_concurrent: usize) -> Self {
        Self {
            probe,
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            generation: RwLock::new(Arc::new(Generation::empty())),
        }
    }

    /// Replaces the full tracked set and schedules one probe per item.
    ///
    /// Does not block on probes. The prior set and its in-flight tasks are
    /// abandoned: queued probes are cancelled, and results from probes that
    /// already started are discarded with their generation.
    pub fn track(&self, items: Vec<(String, PathBuf)>) {
        let generation = Arc::new(Generation {
            slots: items
                .into_iter()
                .map(|(id, path)| {
                    Arc::new(TrackedSlot {
                        id,
                        path,
                        report: OnceLock::new(),
                    })
                })
                .collect(),
            cancel: CancellationToken::new(),
            handles: Mutex::new(Vec::new()),
        });

        let previous = {
            let mut guard = self
                .generation
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, Arc::clone(&generation))
        };
        previous.cancel.cancel();

        debug!(count = generation.slots.len(), "tracking new mod set");

        let mut handles = generation
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for slot in &generation.slots {
            let slot = Arc::clone(slot);
            let semaphore = Arc::clone(&self.semaphore);
            let cancel = generation.cancel.clone();
            let probe = self.probe.clone();
            handles.push(tokio::spawn(async move {
                let _permit = tokio::select! {
                    () = cancel.cancelled() => {
                        trace!(id = %slot.id, "probe abandoned before start");
                        return;
                    }
                    permit = semaphore.acquire_owned() => match permit {
                        Ok(permit) => permit,
                        Err(_) => return,
                    },
                };
                let report = check_sync(&slot.path, &probe).await;
                trace!(id = %slot.id, ok = report.is_ok(), "probe done");
                // Pending -> Done, exactly once
                let _ = slot.report.set(report);
            }));
        }
    }

    /// Returns the current state of all tracked items without blocking.
    ///
    /// Safe to call concurrently with in-flight workers; items complete in
    /// arbitrary order and show `Pending` until their report is published.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TrackedItem> {
        let generation = Arc::clone(
            &*self
                .generation
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        );
        generation
            .slots
            .iter()
            .map(|slot| TrackedItem {
                id: slot.id.clone(),
                path: slot.path.clone(),
                report: slot.report.get().cloned(),
            })
            .collect()
    }

    /// Waits for every probe of the current generation to finish.
    ///
    /// Abandoned generations are never awaited.
    pub async fn wait_done(&self) {
        let generation = Arc::clone(
            &*self
                .generation
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        );
        let handles: Vec<_> = {
            let mut guard = generation
                .handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            guard.drain(..).collect()
        };
        for handle in handles {
            // JoinError only surfaces worker panics; the slot stays Pending
            let _ = handle.await;
        }
    }
}
