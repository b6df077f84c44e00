//! Depth-bounded, failure-tolerant directory walker
//!
//! Traversal is driven by an explicit work list instead of recursion:
//! 1. Pop a directory and check its depth against the configured bound
//! 2. Enumerate its entries; subdirectories go back onto the work list
//! 3. Regular files whose names match the mask are measured and handed to
//!    the caller as [`FileRecord`]s
//!
//! A failure on one entry or one directory is counted, logged and skipped.
//! Only an invalid root aborts the walk.

use crate::config::ScanConfig;
use crate::error::{AccessError, Result, ScanError};
use crate::matcher::NameMatcher;
use crate::types::{EntryKind, FileRecord, ScanStats};
use crate::walker::fs::{Filesystem, LocalFs};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Directory work item
#[derive(Debug, Clone)]
struct DirWork {
    path: PathBuf,
    depth: usize,
}

/// Single-threaded walker over a [`Filesystem`]
pub struct SimpleWalker<F = LocalFs> {
    fs: F,
    shutdown: Arc<AtomicBool>,
}

impl SimpleWalker<LocalFs> {
    /// Walker over the local filesystem
    pub fn new() -> Self {
        Self::with_fs(LocalFs)
    }
}

impl Default for SimpleWalker<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> SimpleWalker<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the walk before the next directory is popped
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Resolve the configured root, failing if it is missing or not a directory
    pub fn resolve_root(&self, root: &Path) -> Result<PathBuf> {
        let resolved = self
            .fs
            .canonicalize(root)
            .map_err(|e| ScanError::root_invalid(root, e.to_string()))?;

        match self.fs.entry_kind(&resolved) {
            Ok(kind) if kind.is_dir() => Ok(resolved),
            Ok(_) => Err(ScanError::root_invalid(root, "not a directory")),
            Err(e) => Err(ScanError::root_invalid(root, e.to_string())),
        }
    }

    /// Resolve the root, then walk it
    pub fn walk<M, P>(&self, config: &ScanConfig, on_match: M, on_progress: P) -> Result<ScanStats>
    where
        M: FnMut(FileRecord),
        P: FnMut(&ScanStats),
    {
        let root = self.resolve_root(&config.root)?;
        Ok(self.walk_resolved(&root, config, on_match, on_progress))
    }

    /// Walk an already validated root
    pub fn walk_resolved<M, P>(
        &self,
        root: &Path,
        config: &ScanConfig,
        mut on_match: M,
        mut on_progress: P,
    ) -> ScanStats
    where
        M: FnMut(FileRecord),
        P: FnMut(&ScanStats),
    {
        let matcher = NameMatcher::new(&config.mask);
        let mut stats = ScanStats::default();
        let mut stack = Vec::with_capacity(64);

        stack.push(DirWork {
            path: root.to_path_buf(),
            depth: 0,
        });

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                debug!(pending = stack.len(), "Shutdown requested, stopping walk");
                stats.completed = false;
                break;
            }

            let Some(work) = stack.pop() else {
                stats.completed = true;
                break;
            };

            if !config.allows_depth(work.depth) {
                continue;
            }

            let entries = match self.fs.read_dir(&work.path) {
                Ok(entries) => entries,
                Err(source) => {
                    self.record_failure(
                        &mut stats,
                        config.verbose,
                        AccessError::DirectoryInaccessible {
                            path: work.path,
                            source,
                        },
                    );
                    on_progress(&stats);
                    continue;
                }
            };

            stats.enter_directory(work.depth);

            for entry in entries {
                let path = match entry {
                    Ok(path) => path,
                    Err(source) => {
                        self.record_failure(
                            &mut stats,
                            config.verbose,
                            AccessError::EntryInaccessible {
                                path: work.path.clone(),
                                source,
                            },
                        );
                        continue;
                    }
                };

                match self.fs.entry_kind(&path) {
                    Ok(EntryKind::Directory) => stack.push(DirWork {
                        path,
                        depth: work.depth + 1,
                    }),
                    Ok(EntryKind::File) => {
                        let matched = path
                            .file_name()
                            .is_some_and(|name| matcher.is_match(&name.to_string_lossy()));

                        if matched {
                            stats.files_visited += 1;
                            match self.fs.file_size(&path) {
                                Ok(size) => on_match(FileRecord { size, path }),
                                Err(source) => self.record_failure(
                                    &mut stats,
                                    config.verbose,
                                    AccessError::EntryInaccessible { path, source },
                                ),
                            }
                        }
                    }
                    Ok(EntryKind::Other) => {}
                    Err(source) => self.record_failure(
                        &mut stats,
                        config.verbose,
                        AccessError::EntryInaccessible { path, source },
                    ),
                }

                on_progress(&stats);
            }
        }

        on_progress(&stats);
        stats
    }

    fn record_failure(&self, stats: &mut ScanStats, verbose: bool, err: AccessError) {
        stats.inaccessible_count += 1;

        if verbose {
            warn!(path = %err.path().display(), "{}", err);
        } else {
            debug!(path = %err.path().display(), kind = ?err.kind(), "Skipping inaccessible entry");
        }
    }
}
