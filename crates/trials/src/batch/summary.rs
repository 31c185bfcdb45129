use std::time::Duration;

use jerkcheck_core::Category;

use super::TrialRecord;

/// Indicates whether a batch ran every trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All configured trials ran.
    Complete,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Aggregate counts and timing for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    pub category: Category,
    /// Number of trials that actually ran.
    pub n_tests: usize,
    pub n_failed: usize,
    pub mean_time_per_test: Duration,
}

impl BatchSummary {
    pub(super) fn from_records(category: Category, records: &[TrialRecord]) -> Self {
        let n_tests = records.len();
        let n_failed = records.iter().filter(|record| !record.is_valid()).count();
        let total: Duration = records.iter().map(|record| record.elapsed).sum();

        let mean_time_per_test = match u32::try_from(n_tests) {
            Ok(0) => Duration::ZERO,
            Ok(n) => total / n,
            #[allow(clippy::cast_precision_loss)]
            Err(_) => total.div_f64(n_tests as f64),
        };

        Self {
            category,
            n_tests,
            n_failed,
            mean_time_per_test,
        }
    }

    #[must_use]
    pub fn n_passed(&self) -> usize {
        self.n_tests - self.n_failed
    }

    /// Fraction of trials that failed, or zero for an empty batch.
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        if self.n_tests == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.n_failed as f64 / self.n_tests as f64;
        rate
    }
}

/// The result of running a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub status: Status,
    pub summary: BatchSummary,
    /// One record per trial, in the order the trials ran.
    pub records: Vec<TrialRecord>,
}
