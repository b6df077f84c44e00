//! largest - Find the Largest Files in a Directory Tree
//!
//! Walks a directory tree and reports the K largest files whose names match
//! a wildcard mask, largest first.
//!
//! # Features
//!
//! - **Bounded Memory**: A size-ordered min-heap keeps only the current
//!   top K records, so memory is O(K) instead of O(files).
//!
//! - **Failure Tolerant**: Unreadable files and directories are counted and
//!   skipped; a single locked subtree never aborts the scan.
//!
//! - **Depth Bound**: Directories deeper than the configured level are not
//!   enumerated at all.
//!
//! - **Live Progress**: Optional time-gated status line on stderr.
//!
//! # Architecture
//!
//! ```text
//!   ScanConfig
//!       │
//!       ▼
//! ┌─────────────┐  name   ┌─────────────┐  record  ┌──────────────┐
//! │SimpleWalker │────────▶│ NameMatcher │─────────▶│ TopKSelector │
//! └──────┬──────┘         └─────────────┘          └──────┬───────┘
//!        │ stats                                          │ drain
//!        ▼                                                ▼
//! ┌──────────────────┐                          ┌─────────────────┐
//! │ ProgressReporter │                          │ ResultFormatter │
//! └──────────────────┘                          └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Top 50 files under the current directory
//! largest
//!
//! # Ten biggest logs, two levels deep, paths only
//! largest /var/log '*.log' -n 10 -d 2 -b
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod progress;
pub mod scan;
pub mod selector;
pub mod types;
pub mod walker;

pub use config::{CliArgs, ScanConfig};
pub use error::{AccessError, Result, ScanError};
pub use matcher::NameMatcher;
pub use output::{format_size, ResultFormatter};
pub use progress::ProgressReporter;
pub use scan::{scan, ScanCoordinator, ScanReport};
pub use selector::TopKSelector;
pub use types::{EntryKind, FileRecord, ScanStats};
pub use walker::{Filesystem, LocalFs, SimpleWalker};
