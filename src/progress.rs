//! Progress reporting for the scan
//!
//! Provides a live status line using an indicatif spinner on stderr.
//! Updates are time-gated so a walk that produces millions of entries only
//! redraws the terminal every [`PROGRESS_INTERVAL`]. The reporter only reads
//! statistics; nothing it does feeds back into selection, and drawing
//! failures are ignored.

use crate::types::ScanStats;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Minimum time between two visible status updates
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Time-gated status line for a running scan
pub struct ProgressReporter {
    bar: ProgressBar,
    interval: Duration,
    last_update: Option<Instant>,
    updates: u64,
    /// Terminal whose cursor we hid, restored on finish
    cursor_term: Option<Term>,
}

impl ProgressReporter {
    /// Create a reporter drawing to stderr
    pub fn new() -> Self {
        let term = Term::stderr();
        let cursor_term = if term.is_term() && term.hide_cursor().is_ok() {
            Some(term)
        } else {
            None
        };

        let mut reporter = Self::with_target(ProgressDrawTarget::stderr(), PROGRESS_INTERVAL);
        reporter.cursor_term = cursor_term;
        reporter
    }

    /// Create a reporter that tracks updates without drawing anything
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden(), PROGRESS_INTERVAL)
    }

    /// Create a reporter with an explicit draw target and update interval
    pub fn with_target(target: ProgressDrawTarget, interval: Duration) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);

        if let Ok(spinner) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
            bar.set_style(spinner.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }

        Self {
            bar,
            interval,
            last_update: None,
            updates: 0,
            cursor_term: None,
        }
    }

    /// Offer a statistics snapshot; redraws at most once per interval
    pub fn notify(&mut self, stats: &ScanStats) {
        let now = Instant::now();
        if !self.should_update(now) {
            return;
        }

        self.last_update = Some(now);
        self.updates += 1;
        self.bar.set_message(format_status(stats));
        self.bar.tick();
    }

    /// Check whether an update at `now` passes the time gate
    pub fn should_update(&self, now: Instant) -> bool {
        match self.last_update {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Number of status updates actually rendered
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Clear the status line and restore the cursor
    pub fn finish(&mut self) {
        self.bar.finish_and_clear();
        if let Some(term) = self.cursor_term.take() {
            let _ = term.show_cursor();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(term) = self.cursor_term.take() {
            let _ = term.show_cursor();
        }
    }
}

/// Render the status line for a statistics snapshot
pub fn format_status(stats: &ScanStats) -> String {
    let mut msg = format!(
        "Files: {} | Dirs: {} | Depth: {} (max {})",
        format_number(stats.files_visited),
        format_number(stats.dirs_visited),
        stats.current_depth,
        stats.max_depth_seen,
    );

    if stats.inaccessible_count > 0 {
        msg.push_str(&format!(
            " | {} {}",
            style("Inaccessible:").yellow(),
            format_number(stats.inaccessible_count)
        ));
    }

    msg
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Lines of the verbose end-of-scan summary, empty for a clean scan
pub fn format_summary(stats: &ScanStats) -> Vec<String> {
    let mut lines = Vec::new();

    if stats.inaccessible_count > 0 {
        lines.push(format!(
            "{} {} inaccessible entries",
            style("skipped").yellow().bold(),
            format_number(stats.inaccessible_count)
        ));
    }
    if !stats.completed {
        lines.push(style("scan interrupted, results are partial").yellow().to_string());
    }

    lines
}

/// Print the verbose end-of-scan summary to stderr
pub fn print_summary(stats: &ScanStats) {
    for line in format_summary(stats) {
        eprintln!("{}", line);
    }
}
