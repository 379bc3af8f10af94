use crate::ui;
use std::time::{Duration, Instant};

/// Tracks a multi-step operation and reports elapsed time at the end
pub struct ProgressTracker {
    operation: String,
    started: Instant,
    steps: Vec<String>,
    current: usize,
}

impl ProgressTracker {
    /// Create a new progress tracker for the named operation
    pub fn new(operation: &str) -> Self {
        ui::section_header(operation);
        Self {
            operation: operation.to_string(),
            started: Instant::now(),
            steps: Vec::new(),
            current: 0,
        }
    }

    /// Add steps to the tracker
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Announce the step the tracker currently points at
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current) {
            ui::status_message(step);
        }
    }

    /// Mark the current step as done and advance to the next one
    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current) {
            ui::success_message(step);
            self.current += 1;
        }
    }

    /// Report the whole operation as finished
    pub fn complete(&self) {
        let elapsed = self.started.elapsed();
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation,
            Self::format_duration(elapsed)
        ));
    }

    fn format_duration(duration: Duration) -> String {
        let seconds = duration.as_secs();
        if seconds < 60 {
            format!("{seconds} seconds")
        } else {
            format!("{} minutes {} seconds", seconds / 60, seconds % 60)
        }
    }
}
