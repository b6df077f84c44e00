//! Scan coordination
//!
//! Wires the walker to the selector and the optional progress reporter:
//!
//! ```text
//! SimpleWalker ──matching files──▶ TopKSelector ──drain──▶ ScanReport
//!      │
//!      └──stats snapshots──▶ ProgressReporter (time-gated, display only)
//! ```

use crate::config::ScanConfig;
use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::selector::TopKSelector;
use crate::types::{FileRecord, ScanStats};
use crate::walker::{Filesystem, LocalFs, SimpleWalker};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a completed (or interrupted) scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Resolved root the walk started from
    pub root: PathBuf,
    /// Selected records, largest first
    pub records: Vec<FileRecord>,
    /// Final statistics snapshot
    pub stats: ScanStats,
}

/// Runs one scan: walk, select, report
pub struct ScanCoordinator<F = LocalFs> {
    config: ScanConfig,
    walker: SimpleWalker<F>,
}

impl ScanCoordinator<LocalFs> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_walker(config, SimpleWalker::new())
    }
}

impl<F: Filesystem> ScanCoordinator<F> {
    pub fn with_walker(config: ScanConfig, walker: SimpleWalker<F>) -> Self {
        Self { config, walker }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Flag that interrupts the walk when set
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        self.walker.shutdown_flag()
    }

    /// Run the scan, drawing progress if the configuration asks for it
    pub fn run(&self) -> Result<ScanReport> {
        let progress = self.config.show_progress.then(ProgressReporter::new);
        self.run_with_progress(progress)
    }

    /// Run the scan with an explicit (or no) progress reporter
    pub fn run_with_progress(&self, mut progress: Option<ProgressReporter>) -> Result<ScanReport> {
        let start = Instant::now();
        let root = self.walker.resolve_root(&self.config.root)?;
        info!(root = %root.display(), mask = %self.config.mask, "Starting scan");

        let mut selector = TopKSelector::new(self.config.limit);

        let stats = self.walker.walk_resolved(
            &root,
            &self.config,
            |record| {
                selector.offer(record);
            },
            |stats| {
                if let Some(p) = progress.as_mut() {
                    p.notify(stats);
                }
            },
        );

        if let Some(mut p) = progress {
            p.finish();
        }

        let limit = selector.limit();
        let records = selector.drain_sorted_descending();

        debug!(
            files = stats.files_visited,
            dirs = stats.dirs_visited,
            inaccessible = stats.inaccessible_count,
            selected = records.len(),
            limit = ?limit,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scan finished"
        );

        Ok(ScanReport {
            root,
            records,
            stats,
        })
    }
}

/// Scan the local filesystem with `config`
pub fn scan(config: ScanConfig) -> Result<ScanReport> {
    ScanCoordinator::new(config).run()
}
