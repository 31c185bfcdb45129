use std::error::Error as StdError;

use jerkcheck_core::{Constraints, Scenario, Solver, Trajectory};
use thiserror::Error;

/// The solver could not produce a trajectory for a scenario.
#[derive(Debug, Error)]
#[error("solver failed: {0}")]
pub struct SolverFailure(#[source] Box<dyn StdError + Send + Sync>);

impl SolverFailure {
    fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self(Box::new(err))
    }
}

/// Drives a [`Solver`] with scenarios under one set of constraints.
///
/// The client does not inspect what the solver returns. Checking the
/// trajectory is left to the sampler and verifier.
#[derive(Debug)]
pub struct SolverClient<'a, S> {
    solver: &'a S,
    constraints: &'a Constraints,
}

impl<'a, S: Solver> SolverClient<'a, S> {
    #[must_use]
    pub fn new(solver: &'a S, constraints: &'a Constraints) -> Self {
        Self {
            solver,
            constraints,
        }
    }

    /// Solves one scenario.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverFailure`] wrapping the solver's own error.
    pub fn solve(&self, scenario: &Scenario) -> Result<Trajectory, SolverFailure> {
        self.solver
            .solve(scenario.initial(), scenario.target(), self.constraints)
            .map_err(SolverFailure::new)
    }
}
