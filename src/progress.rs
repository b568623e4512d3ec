//! Progress reporting and cancellation for Chisel.
//! One generation run reports one unit of work per written file and a
//! human-readable phase label; cancellation is polled between file writes.

use log::info;

/// Trait for the progress and cancellation context of one generation run.
pub trait ProgressMonitor {
    /// Returns whether the caller has requested cancellation.
    fn is_cancelled(&self) -> bool;

    /// Reports completed units of work together with a phase label.
    fn report(&self, units_completed: usize, phase: &str);
}

/// Monitor that reports phases to the log and never cancels.
pub struct LogProgress;

impl LogProgress {
    /// Creates a new LogProgress instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        LogProgress::new()
    }
}

impl ProgressMonitor for LogProgress {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn report(&self, units_completed: usize, phase: &str) {
        info!("[{}] {}", units_completed, phase);
    }
}
