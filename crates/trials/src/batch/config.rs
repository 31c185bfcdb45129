use jerkcheck_core::Constraints;
use jerkcheck_sim::{Tolerance, sample::MAX_SAMPLES};

use crate::ScenarioGenerator;

/// Configuration for one batch of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of axes per scenario.
    pub n_dim: usize,
    /// Number of independent trials.
    pub n_tests: usize,
    /// Sampling interval used to re-simulate each trajectory, in seconds.
    pub dt: f64,
    /// Largest number of samples per axis a trajectory may need at `dt`.
    ///
    /// Longer trajectories fail their trial without being sampled.
    pub max_samples: usize,
    /// Terminal-state comparison tolerance.
    pub tolerance: Tolerance,
    /// Limits and synchronization flags handed to the solver.
    pub constraints: Constraints,
    /// Source of random boundary conditions.
    pub generator: ScenarioGenerator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_dim: 2,
            n_tests: 1000,
            dt: 0.01,
            max_samples: MAX_SAMPLES,
            tolerance: Tolerance::default(),
            constraints: Constraints::default(),
            generator: ScenarioGenerator::default(),
        }
    }
}

impl Config {
    /// Validates the fields that are not checked on construction.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive or `max_samples`
    /// is below 2.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err("dt must be finite and positive");
        }
        if self.max_samples < 2 {
            return Err("max_samples must be at least 2");
        }
        Ok(())
    }
}
