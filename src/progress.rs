//! Progress Indicator
//!
//! Derived completion state shown by the progress bar.

/// Completed vs. total task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Completed fraction in `0.0..=1.0`, zero for an empty list
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// CSS width of the fill element, e.g. `"50%"`
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percent())
    }

    /// Numeric label, e.g. `"1/2"`
    pub fn label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    /// All tasks done, and there is at least one
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_progress() {
        let progress = Progress::default();
        assert_eq!(progress.fill_width(), "0%");
        assert_eq!(progress.label(), "0/0");
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_partial_progress() {
        let progress = Progress::new(1, 2);
        assert_eq!(progress.fill_width(), "50%");
        assert_eq!(progress.label(), "1/2");
        assert!(!progress.is_complete());

        assert_eq!(Progress::new(1, 3).fill_width(), "33.33333333333333%");
    }

    #[test]
    fn test_full_progress() {
        let progress = Progress::new(2, 2);
        assert_eq!(progress.fill_width(), "100%");
        assert!(progress.is_complete());
    }

    #[test]
    fn test_nothing_completed() {
        let progress = Progress::new(0, 4);
        assert_eq!(progress.fill_width(), "0%");
        assert_eq!(progress.label(), "0/4");
    }
}
