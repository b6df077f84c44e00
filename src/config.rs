//! Configuration types for largest
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Lenient parsing of the numeric `-n` / `-d` options
//! - The read-only `ScanConfig` handed to the scan

use crate::error::ScanError;
use crate::matcher::MATCH_ALL;
use clap::Parser;
use std::path::PathBuf;

/// Number of results listed when `-n` is missing or invalid
pub const DEFAULT_LIMIT: usize = 50;

/// Value of `-n` / `-d` meaning "no bound"
const UNBOUNDED: i64 = -1;

/// List the largest files under a directory tree
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "largest",
    version,
    about = "List the largest files under a directory tree",
    long_about = "Walks a directory tree and lists the largest files whose names match a \
                  wildcard mask, largest first.\n\n\
                  Unreadable files and directories are skipped and counted; they never \
                  abort the scan.",
    after_help = "EXAMPLES:\n    \
        largest\n    \
        largest . '*.log'                  (PATH comes before MASK)\n    \
        largest /var/log '*.log' -n 10\n    \
        largest ~/Downloads -d 0 -b\n    \
        largest /data '*.mkv' -n -1 -r -p"
)]
pub struct CliArgs {
    /// Directory to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// File mask: `*` matches any run of characters, `?` exactly one
    #[arg(value_name = "MASK")]
    pub mask: Option<String>,

    /// Number of largest files to list (default: 50, -1 lists all files)
    #[arg(short = 'n', long = "limit", value_name = "NUM", allow_negative_numbers = true)]
    pub limit: Option<String>,

    /// Depth of subdirectories to consider (default: -1, infinite depth)
    #[arg(short = 'd', long = "depth", value_name = "NUM", allow_negative_numbers = true)]
    pub depth: Option<String>,

    /// Display only file paths without file sizes
    #[arg(short = 'b', long)]
    pub bare: bool,

    /// Display paths relative to the scanned directory
    #[arg(short = 'r', long)]
    pub relative: bool,

    /// Show a live progress line while scanning
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Log inaccessible entries and print a summary of skipped ones
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Interpret `-n`: `-1` is unbounded, garbage or values below -1 fall back to the default
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let Some(raw) = raw else {
        return Some(DEFAULT_LIMIT);
    };

    match raw.trim().parse::<i64>() {
        Ok(UNBOUNDED) => None,
        Ok(n) if n >= 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        _ => Some(DEFAULT_LIMIT),
    }
}

/// Interpret `-d`: `-1`, garbage or values below -1 all mean unbounded
pub fn parse_depth(raw: Option<&str>) -> Option<usize> {
    match raw?.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        _ => None,
    }
}

/// Validated scan configuration, read-only for the lifetime of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory the walk starts from
    pub root: PathBuf,

    /// Wildcard mask applied to file names
    pub mask: String,

    /// Deepest directory level to enumerate (root is 0)
    pub max_depth: Option<usize>,

    /// Number of results to keep
    pub limit: Option<usize>,

    /// Print paths only
    pub bare: bool,

    /// Print paths relative to the root
    pub relative: bool,

    /// Show a live progress line
    pub show_progress: bool,

    /// Log inaccessible entries
    pub verbose: bool,
}

impl ScanConfig {
    /// Configuration with defaults for everything but the root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mask: MATCH_ALL.to_string(),
            max_depth: None,
            limit: Some(DEFAULT_LIMIT),
            bare: false,
            relative: false,
            show_progress: false,
            verbose: false,
        }
    }

    /// Create configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ScanError> {
        let root = match args.path {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        let mask = args
            .mask
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| MATCH_ALL.to_string());

        Ok(Self {
            root,
            mask,
            max_depth: parse_depth(args.depth.as_deref()),
            limit: parse_limit(args.limit.as_deref()),
            bare: args.bare,
            relative: args.relative,
            show_progress: args.progress,
            verbose: args.verbose,
        })
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_bare(mut self, bare: bool) -> Self {
        self.bare = bare;
        self
    }

    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check whether a directory at `depth` may be enumerated
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}
