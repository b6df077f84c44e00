//! Core data types shared by the walker, selector and formatter

use std::path::PathBuf;

/// Kind of filesystem entry, as far as a scan cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file (or a symlink resolving to one)
    File,
    /// Directory that may be descended into
    Directory,
    /// Anything else: devices, sockets, broken or directory symlinks
    Other,
}

impl EntryKind {
    /// Check if this is a directory
    pub fn is_dir(&self) -> bool {
        *self == EntryKind::Directory
    }
}

/// A matching file and its size in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub size: u64,
    pub path: PathBuf,
}

impl FileRecord {
    pub fn new(size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

/// Running statistics for a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files whose name matched the mask
    pub files_visited: u64,
    /// Directories that were enumerated
    pub dirs_visited: u64,
    /// Entries or directories that could not be accessed
    pub inaccessible_count: u64,
    /// Depth of the directory currently being enumerated
    pub current_depth: usize,
    /// Deepest directory enumerated so far
    pub max_depth_seen: usize,
    /// False if the scan was interrupted before the work list drained
    pub completed: bool,
}

impl ScanStats {
    /// Record that a directory at `depth` is being enumerated
    pub fn enter_directory(&mut self, depth: usize) {
        self.dirs_visited += 1;
        self.current_depth = depth;
        self.max_depth_seen = self.max_depth_seen.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_directory_tracks_max_depth() {
        let mut stats = ScanStats::default();
        stats.enter_directory(0);
        stats.enter_directory(3);
        stats.enter_directory(1);

        assert_eq!(stats.dirs_visited, 3);
        assert_eq!(stats.current_depth, 1);
        assert_eq!(stats.max_depth_seen, 3);
    }

    #[test]
    fn test_entry_kind() {
        assert!(!EntryKind::File.is_dir());
        assert!(EntryKind::Directory.is_dir());
        assert!(!EntryKind::Other.is_dir());
    }
}
