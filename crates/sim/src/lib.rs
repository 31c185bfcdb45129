//! Forward simulation and verification of piecewise-constant jerk trajectories.
//!
//! - [`sample`] integrates a [`Trajectory`] in closed form on a fixed time grid
//! - [`verify`] compares a simulated terminal state against a target state
//!
//! Both are pure functions of their inputs, so reporting code can resample a
//! trajectory at any resolution without touching the verification path.
//!
//! [`Trajectory`]: jerkcheck_core::Trajectory

pub mod sample;
pub mod verify;

pub use sample::{AxisSamples, SampledTrajectory, sample, sample_with_limit, switch_states};
pub use verify::{AxisVerdict, Tolerance, Verdict, verify};
