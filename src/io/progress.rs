//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of solver runs
///
/// Safe to update from worker threads; a hidden manager turns every update
/// into a no-op.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible progress bar for `runs` runs
    pub fn new(runs: usize) -> Self {
        let bar = ProgressBar::new(runs as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one finished run
    pub fn complete_run(&self, found_exit: bool) {
        if !found_exit {
            self.bar.set_message("(failures recorded)");
        }
        self.bar.inc(1);
    }

    /// Number of runs recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
