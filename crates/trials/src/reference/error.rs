use jerkcheck_core::ProfileError;
use thiserror::Error;

/// Errors that can occur in the reference solver.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial state has {initial} axes but target has {target}")]
    AxisCountMismatch { initial: usize, target: usize },

    #[error("initial or target state contains a non-finite value")]
    NonFiniteInput,

    #[error("no feasible horizon after {attempts} attempts (last tried {horizon} s)")]
    NoFeasibleHorizon { attempts: usize, horizon: f64 },

    #[error("built an invalid profile: {0}")]
    Profile(#[from] ProfileError),
}
