//! Progress reporting for conversion runs

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Files completed so far out of the run's total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(processed: usize, total: usize) -> Self {
        Self { processed, total }
    }

    /// Completion as a percentage; an empty run counts as complete
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.processed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }

    /// Human-readable completion status
    pub fn status_text(&self) -> String {
        if self.is_complete() {
            "Completed".to_string()
        } else {
            format!("{}/{} files processed", self.processed, self.total)
        }
    }
}

/// Receives progress updates from a running conversion
pub trait ProgressSink {
    fn report(&mut self, progress: Progress);
}

impl<F> ProgressSink for F
where
    F: FnMut(Progress),
{
    fn report(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Sink that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: Progress) {}
}

/// Terminal progress bar
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// A bar that renders nothing, for quiet mode
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Leave the bar where it is and stop drawing it
    pub fn finish(&self) {
        self.bar.abandon();
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&mut self, progress: Progress) {
        debug!("Progress: {}", progress.status_text());
        self.bar.set_length(progress.total as u64);
        self.bar.set_position(progress.processed as u64);
    }
}
