//! Integration tests for largest
//!
//! These tests build small trees on disk with tempfile and run full scans
//! through the public API.

use largest::config::ScanConfig;
use largest::output::ResultFormatter;
use largest::progress::ProgressReporter;
use largest::scan::{scan, ScanCoordinator};
use largest::types::EntryKind;
use largest::walker::{Filesystem, LocalFs, SimpleWalker};
use largest::ScanError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
}

/// Root with files at depths 0..=3
fn layered_tree() -> TempDir {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("d0.bin"), 10);
    write_file(&dir.path().join("a/d1.bin"), 20);
    write_file(&dir.path().join("a/b/d2.bin"), 30);
    write_file(&dir.path().join("a/b/c/d3.bin"), 40);
    dir
}

fn sizes(report: &largest::ScanReport) -> Vec<u64> {
    report.records.iter().map(|r| r.size).collect()
}

#[test]
fn test_end_to_end_top_two() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("ten.dat"), 10);
    write_file(&dir.path().join("two-k.dat"), 2000);
    write_file(&dir.path().join("half-meg.dat"), 500_000);
    write_file(&dir.path().join("three.dat"), 3);

    let config = ScanConfig::new(dir.path()).with_limit(Some(2));
    let report = scan(config.clone()).unwrap();
    assert_eq!(sizes(&report), vec![500_000, 2000]);

    let formatter = ResultFormatter::new(&config, &report.root);
    let lines = formatter.format_all(&report.records);
    let root = fs::canonicalize(dir.path()).unwrap();

    assert_eq!(
        lines[0].trim_start(),
        format!("500 KB {}", root.join("half-meg.dat").display())
    );
    assert_eq!(
        lines[1].trim_start(),
        format!("2 KB {}", root.join("two-k.dat").display())
    );
}

#[test]
fn test_unbounded_returns_everything_sorted() {
    let dir = layered_tree();
    let report = scan(ScanConfig::new(dir.path()).with_limit(None)).unwrap();

    assert_eq!(sizes(&report), vec![40, 30, 20, 10]);
    assert_eq!(report.stats.files_visited, 4);
    assert!(report.stats.completed);
}

#[test]
fn test_limit_larger_than_matches() {
    let dir = layered_tree();
    let report = scan(ScanConfig::new(dir.path()).with_limit(Some(100))).unwrap();
    assert_eq!(report.records.len(), 4);

    let report = scan(ScanConfig::new(dir.path()).with_limit(Some(0))).unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.stats.files_visited, 4);
}

#[test]
fn test_depth_bound() {
    let dir = layered_tree();

    for (depth, expected) in [
        (0, vec![10]),
        (1, vec![20, 10]),
        (2, vec![30, 20, 10]),
        (3, vec![40, 30, 20, 10]),
    ] {
        let config = ScanConfig::new(dir.path()).with_max_depth(Some(depth));
        let report = scan(config).unwrap();
        assert_eq!(sizes(&report), expected, "depth {}", depth);
        assert_eq!(report.stats.max_depth_seen, depth);
    }
}

#[test]
fn test_mask_filtering() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), 5);
    write_file(&dir.path().join("a.txt.bak"), 500);
    write_file(&dir.path().join("sub/B.TXT"), 50);
    write_file(&dir.path().join("abc"), 7);

    let report = scan(ScanConfig::new(dir.path()).with_mask("*.txt")).unwrap();
    assert_eq!(sizes(&report), vec![50, 5]);

    let report = scan(ScanConfig::new(dir.path()).with_mask("a?c")).unwrap();
    assert_eq!(sizes(&report), vec![7]);
}

#[test]
fn test_relative_and_bare_output() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("sub/file.bin"), 1500);

    let config = ScanConfig::new(dir.path()).with_relative(true).with_bare(true);
    let report = scan(config.clone()).unwrap();
    let lines = ResultFormatter::new(&config, &report.root).format_all(&report.records);

    let expected = Path::new("sub").join("file.bin");
    assert_eq!(lines, vec![expected.display().to_string()]);
}

#[test]
fn test_idempotent() {
    let dir = tempdir().unwrap();
    for i in 0..20 {
        write_file(&dir.path().join(format!("d{}/f{}.bin", i % 4, i)), (i % 5) * 100 + 1);
    }

    let config = ScanConfig::new(dir.path()).with_limit(Some(7));
    let first = scan(config.clone()).unwrap();
    let second = scan(config).unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(first.records.len(), 7);
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let err = scan(ScanConfig::new(dir.path().join("nope"))).unwrap_err();
    assert!(matches!(err, ScanError::RootInvalid { .. }));
}

#[test]
fn test_file_root_is_fatal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    write_file(&file, 1);

    let err = scan(ScanConfig::new(&file)).unwrap_err();
    assert!(matches!(err, ScanError::RootInvalid { .. }));
}

#[test]
fn test_progress_does_not_change_results() {
    let dir = layered_tree();
    let config = ScanConfig::new(dir.path()).with_limit(Some(3));

    let plain = ScanCoordinator::new(config.clone())
        .run_with_progress(None)
        .unwrap();
    let with_progress = ScanCoordinator::new(config)
        .run_with_progress(Some(ProgressReporter::hidden()))
        .unwrap();

    assert_eq!(plain.records, with_progress.records);
    assert_eq!(plain.stats, with_progress.stats);
}

/// Local filesystem that refuses to list one directory
struct LockedDirFs {
    locked: PathBuf,
}

impl Filesystem for LockedDirFs {
    type Entries = <LocalFs as Filesystem>::Entries;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        LocalFs.canonicalize(path)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries> {
        if dir == self.locked {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        LocalFs.read_dir(dir)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        LocalFs.entry_kind(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        LocalFs.file_size(path)
    }
}

#[test]
fn test_unreadable_subdirectory_does_not_abort() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("keep/one.bin"), 100);
    write_file(&dir.path().join("keep/two.bin"), 300);
    write_file(&dir.path().join("three.bin"), 200);
    write_file(&dir.path().join("locked/huge.bin"), 10_000);

    let root = fs::canonicalize(dir.path()).unwrap();
    let walker = SimpleWalker::with_fs(LockedDirFs {
        locked: root.join("locked"),
    });
    let config = ScanConfig::new(dir.path()).with_limit(Some(2));

    let report = ScanCoordinator::with_walker(config, walker)
        .run_with_progress(None)
        .unwrap();

    assert_eq!(sizes(&report), vec![300, 200]);
    assert!(report.stats.inaccessible_count >= 1);
    assert!(report.stats.completed);
}
