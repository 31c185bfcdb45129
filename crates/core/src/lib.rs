//! Core traits and types for verifying jerk-limited trajectory solvers.
//!
//! This crate defines the shared abstractions that the sampler, verifier, and
//! trial runner build on:
//!
//! - [`KinematicState`] — per-axis position, velocity, and acceleration
//! - [`Constraints`] — validated kinematic limits and synchronization flags
//! - [`Scenario`] — a boundary-value problem tagged with its [`Category`]
//! - [`Trajectory`] — per-axis piecewise-constant jerk profiles
//! - [`Solver`] — the seam to an external minimum-time trajectory solver
//! - [`Observer`] — receives runner events and optionally returns control actions

mod constraints;
mod observer;
mod scenario;
mod solver;
mod state;
mod trajectory;

pub use constraints::{Bounds, ConstraintParams, Constraints, ConstraintsError, Quantity, SyncFlags};
pub use observer::Observer;
pub use scenario::{Category, ParseCategoryError, Scenario, ScenarioError};
pub use solver::Solver;
pub use state::{AxisState, KinematicState, StateError};
pub use trajectory::{AxisProfile, ProfileError, Trajectory};
