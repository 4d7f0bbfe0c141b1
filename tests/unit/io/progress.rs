//! Tests for progress reporting

#[cfg(test)]
mod tests {
    use aoc2020::io::configuration::PROGRESS_STRIDE;
    use aoc2020::io::progress::{ProgressReporter, TaskProgress};

    // Tests reporter visibility
    // Verified by defaulting to hidden
    #[test]
    fn test_reporter_visibility() {
        assert!(ProgressReporter::default().is_visible());
        assert!(!ProgressReporter::hidden().is_visible());
        assert!(ProgressReporter::new(true).is_visible());
    }

    // Tests positions only move on stride boundaries
    // Verified by updating on every step
    #[test]
    fn test_advance_stride() {
        let task = ProgressReporter::hidden().start("cups", 4 * PROGRESS_STRIDE);
        task.advance(1);
        assert_eq!(task.position(), 0);
        task.advance(PROGRESS_STRIDE);
        assert_eq!(task.position(), PROGRESS_STRIDE as u64);
        task.advance(PROGRESS_STRIDE + 7);
        assert_eq!(task.position(), PROGRESS_STRIDE as u64);
        task.finish();
    }

    // Tests hidden tasks accept updates
    // Verified by panicking on a zero-length bar
    #[test]
    fn test_hidden_task() {
        let task = TaskProgress::hidden();
        task.advance(0);
        task.advance(2 * PROGRESS_STRIDE);
        assert_eq!(task.position(), 2 * PROGRESS_STRIDE as u64);
        task.finish();
    }
}
