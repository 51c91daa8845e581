//! Worker statistics tracking

use super::executor::IterationOutcome;
use std::time::Instant;

/// Iteration counts tracked by each worker
///
/// Owned by a single worker; never shared between loops.
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Iterations that ran create through delete
    pub completed: u64,

    /// Iterations abandoned because the table was full
    pub table_full: u64,

    /// Iterations abandoned on an unexpected create failure
    pub create_failed: u64,

    /// Iterations abandoned because the fetched item was gone
    pub item_vanished: u64,

    /// Iterations whose delete found the item already removed
    pub delete_raced: u64,

    /// Iterations ending on an unexpected delete failure
    pub delete_failed: u64,

    /// Worker start time
    pub started_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Count one finished iteration
    pub fn record(&mut self, outcome: IterationOutcome) {
        match outcome {
            IterationOutcome::Completed => self.completed += 1,
            IterationOutcome::TableFull => self.table_full += 1,
            IterationOutcome::CreateFailed => self.create_failed += 1,
            IterationOutcome::ItemVanished => self.item_vanished += 1,
            IterationOutcome::DeleteRaced => self.delete_raced += 1,
            IterationOutcome::DeleteFailed => self.delete_failed += 1,
        }
    }

    /// Total iterations, whatever their outcome
    pub fn iterations(&self) -> u64 {
        self.completed
            + self.table_full
            + self.create_failed
            + self.item_vanished
            + self.delete_raced
            + self.delete_failed
    }

    /// Iterations that hit an expected race or capacity condition
    pub fn expected_failures(&self) -> u64 {
        self.table_full + self.item_vanished + self.delete_raced
    }

    /// Iterations that hit an unexpected failure on a load-bearing step
    pub fn unexpected_failures(&self) -> u64 {
        self.create_failed + self.delete_failed
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        self.started_at.map(|start| start.elapsed())
    }

    /// Get iterations per second
    pub fn iterations_per_second(&self) -> f64 {
        self.elapsed()
            .map(|d| {
                let secs = d.as_secs_f64();
                if secs > 0.0 {
                    self.iterations() as f64 / secs
                } else {
                    0.0
                }
            })
            .unwrap_or(0.0)
    }
}
