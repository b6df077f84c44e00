//! Filesystem access layer used by the walker
//!
//! The walker never touches `std::fs` directly; it goes through the
//! [`Filesystem`] trait so every call site can fail per entry and so tests
//! can inject trees with unreadable parts without needing real permissions.

use crate::types::EntryKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory enumeration, classification and size lookup
pub trait Filesystem {
    /// Iterator over the entries of one directory
    type Entries: Iterator<Item = io::Result<PathBuf>>;

    /// Resolve a path to an absolute, symlink-free form
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// List the immediate entries of `dir`
    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries>;

    /// Classify an entry found during enumeration
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Size in bytes of a regular file
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// [`Filesystem`] backed by the local OS
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

/// Entries of a local directory, as full paths
pub struct LocalEntries(fs::ReadDir);

impl Iterator for LocalEntries {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| entry.map(|e| e.path()))
    }
}

impl Filesystem for LocalFs {
    type Entries = LocalEntries;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries> {
        fs::read_dir(dir).map(LocalEntries)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = fs::symlink_metadata(path)?;
        let ft = meta.file_type();

        if ft.is_dir() {
            return Ok(EntryKind::Directory);
        }
        if ft.is_file() {
            return Ok(EntryKind::File);
        }
        if ft.is_symlink() {
            // Links to files count as files; directory links are not followed
            return Ok(match fs::metadata(path) {
                Ok(target) if target.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            });
        }

        Ok(EntryKind::Other)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|m| m.len())
    }
}
