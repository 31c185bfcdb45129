use std::{fmt, time::Duration};

use jerkcheck_core::{KinematicState, Scenario, Trajectory};
use jerkcheck_sim::{SampledTrajectory, Verdict, sample};

/// How a single trial ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The re-simulated terminal state matched the target.
    Valid,
    /// The solver returned an error instead of a trajectory.
    SolverFailed { reason: String },
    /// The returned trajectory could not be sampled.
    SimulationFailed { error: sample::Error },
    /// The re-simulated terminal state did not match the target.
    Mismatch {
        verdict: Verdict,
        final_state: KinematicState,
    },
}

impl Outcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::SolverFailed { reason } => f.write_str(reason),
            Self::SimulationFailed { error } => write!(f, "simulation failed: {error}"),
            Self::Mismatch { verdict, .. } if !verdict.axis_counts_match => {
                f.write_str("terminal state has the wrong number of axes")
            }
            Self::Mismatch { verdict, .. } => {
                write!(f, "terminal state mismatch on axes {:?}", verdict.failing_axes())
            }
        }
    }
}

/// Everything known about one finished trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Position of the trial within its batch (0-based).
    pub index: usize,
    /// The boundary-value problem that was posed.
    pub scenario: Scenario,
    /// The solver's answer, if it produced one.
    pub trajectory: Option<Trajectory>,
    pub outcome: Outcome,
    /// Wall-clock time spent solving, sampling, and verifying.
    pub elapsed: Duration,
}

impl TrialRecord {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    /// Samples the trial's trajectory again at interval `dt`.
    ///
    /// Returns `Ok(None)` if the solver produced no trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if the trajectory cannot be sampled at `dt`.
    pub fn resample(&self, dt: f64) -> Result<Option<SampledTrajectory>, sample::Error> {
        self.trajectory
            .as_ref()
            .map(|trajectory| sample(self.scenario.initial(), trajectory, dt))
            .transpose()
    }
}
