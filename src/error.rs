//! Error types for largest
//!
//! This module defines the error hierarchy for a scan:
//! - Scan-level errors that abort before traversal starts
//! - Per-item access errors that are absorbed by the walker
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Only an invalid root stops a scan; everything below the root is
//!   converted into statistics and log lines

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for a scan
#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured root does not exist or is not a directory
    #[error("Invalid root '{}': {reason}", .path.display())]
    RootInvalid { path: PathBuf, reason: String },

    /// I/O errors outside of traversal (current directory lookup)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Build a `RootInvalid` error for `path`
    pub fn root_invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ScanError::RootInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to access a single item during traversal
#[derive(Error, Debug)]
pub enum AccessError {
    /// An entry could not be classified or measured
    #[error("Cannot access '{}': {source}", .path.display())]
    EntryInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be enumerated; its subtree is abandoned
    #[error("Cannot read directory '{}': {source}", .path.display())]
    DirectoryInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AccessError {
    /// Returns the path associated with this error
    pub fn path(&self) -> &Path {
        match self {
            AccessError::EntryInaccessible { path, .. } => path,
            AccessError::DirectoryInaccessible { path, .. } => path,
        }
    }

    /// Returns the underlying I/O error kind
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            AccessError::EntryInaccessible { source, .. } => source.kind(),
            AccessError::DirectoryInaccessible { source, .. } => source.kind(),
        }
    }
}

/// Result type alias for ScanError
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_access_error_accessors() {
        let entry = AccessError::EntryInaccessible {
            path: "/data/secret.bin".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(entry.path(), Path::new("/data/secret.bin"));
        assert_eq!(entry.kind(), io::ErrorKind::PermissionDenied);

        let dir = AccessError::DirectoryInaccessible {
            path: "/data/locked".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(dir.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "boom");
        let scan_err: ScanError = io_err.into();
        assert!(matches!(scan_err, ScanError::Io(_)));
    }

    #[test]
    fn test_root_invalid_message() {
        let err = ScanError::root_invalid("/missing", "path does not exist");
        assert_eq!(
            err.to_string(),
            "Invalid root '/missing': path does not exist"
        );
    }
}
