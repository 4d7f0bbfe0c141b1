//! Progress bars for the long-running simulations

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_STRIDE};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TASK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent:>3}}% {{elapsed_precise}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Hands out progress bars to solvers, or hidden bars when quiet
#[derive(Clone, Copy, Debug)]
pub struct ProgressReporter {
    visible: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressReporter {
    /// Create a reporter; hidden reporters never draw anything
    pub const fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// A reporter that never draws
    pub const fn hidden() -> Self {
        Self::new(false)
    }

    /// Check if bars are drawn
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start a bar for a task of `total` steps
    pub fn start(&self, label: &str, total: usize) -> TaskProgress {
        let bar = if self.visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(TASK_STYLE.clone());
            bar.set_message(label.to_string());
            bar
        } else {
            ProgressBar::hidden()
        };
        TaskProgress {
            bar,
            stride: PROGRESS_STRIDE,
        }
    }
}

/// Progress of one task, refreshed every `PROGRESS_STRIDE` steps
#[derive(Clone, Debug)]
pub struct TaskProgress {
    bar: ProgressBar,
    stride: usize,
}

impl TaskProgress {
    /// A task bar that never draws
    pub fn hidden() -> Self {
        ProgressReporter::hidden().start("", 0)
    }

    /// Record that `step` steps are done; only stride boundaries redraw
    pub fn advance(&self, step: usize) {
        if step % self.stride == 0 {
            self.bar.set_position(step as u64);
        }
    }

    /// Steps recorded at the last redraw
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
