use crate::{Constraints, KinematicState, Trajectory};

/// A minimum-time, jerk-limited trajectory solver.
///
/// Given an initial and target state of equal axis count and a set of
/// constraints, a solver returns a per-axis piecewise-constant jerk
/// [`Trajectory`] that should carry the initial state to the target.
///
/// Implementations must report infeasible or non-convergent problems as an
/// error rather than returning an empty trajectory. The trait takes `&self`
/// so independent problems can be solved from several threads when the
/// implementation is `Sync`.
pub trait Solver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Solves one boundary-value problem.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no trajectory could be produced.
    fn solve(
        &self,
        initial: &KinematicState,
        target: &KinematicState,
        constraints: &Constraints,
    ) -> Result<Trajectory, Self::Error>;
}

impl<S: Solver + ?Sized> Solver for &S {
    type Error = S::Error;

    fn solve(
        &self,
        initial: &KinematicState,
        target: &KinematicState,
        constraints: &Constraints,
    ) -> Result<Trajectory, Self::Error> {
        (**self).solve(initial, target, constraints)
    }
}
