//! Local directory walker
//!
//! This module implements a single-threaded, depth-bounded walk over a
//! pluggable filesystem layer.
//!
//! # Architecture
//!
//! ```text
//!              ┌──────────────────────────┐
//!              │       SimpleWalker       │
//!              │  - explicit work list    │
//!              │  - depth bound           │
//!              │  - per-entry isolation   │
//!              └────────────┬─────────────┘
//!                           │
//!              ┌────────────▼─────────────┐
//!              │   Filesystem (trait)     │
//!              │  read_dir / entry_kind / │
//!              │  file_size / canonicalize│
//!              └────────────┬─────────────┘
//!                           │
//!                   ┌───────▼───────┐
//!                   │    LocalFs    │
//!                   └───────────────┘
//! ```

pub mod fs;
pub mod simple;

pub use fs::{Filesystem, LocalFs};
pub use simple::SimpleWalker;
