//! Rendering of the final result list
//!
//! One line per record, largest first:
//! - `"<size> <path>"` by default, with the size column right-aligned
//! - `"<path>"` in bare mode
//!
//! Sizes use decimal units and truncating division, so 999999 bytes shows
//! as `999 KB` rather than rounding up to `1 MB`.

use crate::config::ScanConfig;
use crate::types::FileRecord;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// Width of the size column (`"999 bytes"`)
pub const SIZE_COLUMN_WIDTH: usize = 9;

const UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count, scaling by 1000 with truncation
pub fn format_size(size: u64) -> String {
    if size < 1000 {
        return format!("{} bytes", size);
    }

    let mut value = size;
    let mut unit = 0;
    value /= 1000;
    while value >= 1000 && unit + 1 < UNITS.len() {
        value /= 1000;
        unit += 1;
    }

    format!("{} {}", value, UNITS[unit])
}

/// Output options taken from the scan configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter<'a> {
    /// Print paths only
    pub bare: bool,
    /// Strip this prefix from printed paths
    pub relative_to: Option<&'a Path>,
}

impl<'a> ResultFormatter<'a> {
    /// Formatter for `config`, relativizing against the resolved `root`
    pub fn new(config: &ScanConfig, root: &'a Path) -> Self {
        Self {
            bare: config.bare,
            relative_to: config.relative.then_some(root),
        }
    }

    /// Path as it should be printed
    pub fn display_path<'p>(&self, path: &'p Path) -> Cow<'p, str> {
        let shown = self
            .relative_to
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        shown.to_string_lossy()
    }

    /// Render one output line (without trailing newline)
    pub fn format_line(&self, record: &FileRecord) -> String {
        let path = self.display_path(&record.path);
        if self.bare {
            path.into_owned()
        } else {
            format!(
                "{:>width$} {}",
                format_size(record.size),
                path,
                width = SIZE_COLUMN_WIDTH
            )
        }
    }

    /// Render all records, in the order given
    pub fn format_all(&self, records: &[FileRecord]) -> Vec<String> {
        records.iter().map(|r| self.format_line(r)).collect()
    }

    /// Write all records to `out`, one per line
    ///
    /// A reader that goes away early (`largest | head`) is not an error:
    /// writing stops quietly on a broken pipe.
    pub fn write_all<W: Write>(&self, out: &mut W, records: &[FileRecord]) -> io::Result<()> {
        let result = records
            .iter()
            .try_for_each(|record| writeln!(out, "{}", self.format_line(record)))
            .and_then(|()| out.flush());

        match result {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }
}
