//! A simple, feasible (but not time-optimal) reference solver.
//!
//! # Algorithm
//!
//! Every axis is driven by three constant-jerk segments of equal length
//! `h = T / 3` over a common horizon `T`. For a fixed `T`, the terminal state
//! is affine in the three jerks, and the boundary conditions give a 3×3
//! linear system. Scaling the rows by `h³`, `h²`, and `h` turns it into
//!
//! ```text
//! | 19/6  7/6  1/6 |   | j1 |   | Δp / h³ |
//! |  5/2  3/2  1/2 | · | j2 | = | Δv / h² |
//! |   1    1    1  |   | j3 |   | Δa / h  |
//! ```
//!
//! where `Δ` is the target minus the zero-jerk drift of the initial state
//! over `T`. The matrix has determinant one, so its inverse is fixed and the
//! solve is closed form.
//!
//! Starting from `initial_horizon`, the horizon is multiplied by `growth`
//! until every axis respects the jerk bounds, the acceleration bounds at
//! every switch point, and the velocity bounds at every switch point and
//! in-segment extremum.
//!
//! # Synchronization
//!
//! All axes always end together at `T`. That satisfies `sync_w`, and the
//! phase-level `sync_v` and `sync_a` flags are not otherwise honored.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use jerkcheck_core::{AxisProfile, AxisState, Constraints, KinematicState, Solver, Trajectory};
use tracing::trace;

/// Inverse of the scaled boundary-value matrix in the [module docs](self).
const INVERSE: [[f64; 3]; 3] = [
    [1.0, -1.0, 1.0 / 3.0],
    [-2.0, 3.0, -7.0 / 6.0],
    [1.0, -2.0, 11.0 / 6.0],
];

/// Solves every axis with three equal constant-jerk segments over a common
/// horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedHorizonSolver {
    config: Config,
}

impl FixedHorizonSolver {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Solver for FixedHorizonSolver {
    type Error = Error;

    fn solve(
        &self,
        initial: &KinematicState,
        target: &KinematicState,
        constraints: &Constraints,
    ) -> Result<Trajectory, Self::Error> {
        if initial.n_dim() != target.n_dim() {
            return Err(Error::AxisCountMismatch {
                initial: initial.n_dim(),
                target: target.n_dim(),
            });
        }
        if !initial.is_finite() || !target.is_finite() {
            return Err(Error::NonFiniteInput);
        }

        let axes: Vec<(AxisState, AxisState)> = initial.axes().zip(target.axes()).collect();
        let mut horizon = self.config.initial_horizon();

        for attempt in 1..=self.config.max_attempts() {
            let jerks: Option<Vec<[f64; 3]>> = axes
                .iter()
                .map(|&(start, goal)| {
                    let jerks = segment_jerks(start, goal, horizon);
                    within_limits(start, jerks, horizon / 3.0, constraints).then_some(jerks)
                })
                .collect();

            trace!(attempt, horizon, feasible = jerks.is_some(), "tried horizon");

            if let Some(jerks) = jerks {
                return build(&jerks, horizon);
            }

            if attempt < self.config.max_attempts() {
                horizon *= self.config.growth();
            }
        }

        Err(Error::NoFeasibleHorizon {
            attempts: self.config.max_attempts(),
            horizon,
        })
    }
}

/// Returns the three segment jerks that carry `start` to `goal` in `horizon`.
fn segment_jerks(start: AxisState, goal: AxisState, horizon: f64) -> [f64; 3] {
    let h = horizon / 3.0;
    let drift = start.advance(0.0, horizon);

    let rhs = [
        (goal.position - drift.position) / (h * h * h),
        (goal.velocity - drift.velocity) / (h * h),
        (goal.acceleration - drift.acceleration) / h,
    ];

    INVERSE.map(|row| row[0] * rhs[0] + row[1] * rhs[1] + row[2] * rhs[2])
}

/// Checks jerk, acceleration, and velocity bounds along one axis.
fn within_limits(start: AxisState, jerks: [f64; 3], h: f64, constraints: &Constraints) -> bool {
    let velocity = constraints.velocity();
    let acceleration = constraints.acceleration();
    let jerk_bounds = constraints.jerk();

    let mut state = start;
    if !velocity.contains(state.velocity) || !acceleration.contains(state.acceleration) {
        return false;
    }

    for jerk in jerks {
        if !jerk_bounds.contains(jerk) {
            return false;
        }

        // Velocity peaks where acceleration crosses zero.
        if jerk != 0.0 {
            let tau = -state.acceleration / jerk;
            if tau > 0.0 && tau < h && !velocity.contains(state.advance(jerk, tau).velocity) {
                return false;
            }
        }

        state = state.advance(jerk, h);
        if !velocity.contains(state.velocity) || !acceleration.contains(state.acceleration) {
            return false;
        }
    }

    true
}

fn build(jerks: &[[f64; 3]], horizon: f64) -> Result<Trajectory, Error> {
    let h = horizon / 3.0;
    let times = vec![0.0, h, 2.0 * h, horizon];

    let axes = jerks
        .iter()
        .map(|jerks| AxisProfile::new(times.clone(), jerks.to_vec()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Trajectory::new(axes))
}
