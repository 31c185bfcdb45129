//! Randomized boundary-value trials for jerk-limited trajectory solvers.
//!
//! A trial draws a [`Scenario`], hands it to a [`Solver`] through a
//! [`SolverClient`], re-simulates the returned trajectory with
//! [`jerkcheck_sim::sample`], and checks the terminal state with
//! [`jerkcheck_sim::verify`]. The [`batch`] runner repeats this for one
//! category and aggregates the results, and [`suite`] runs every category.
//!
//! Nothing here prints or plots. Batches log through [`tracing`] and hand
//! finished trials to an [`Observer`](jerkcheck_core::Observer), so reporting
//! lives with the caller.
//!
//! # Example
//!
//! ```
//! use jerkcheck_core::Category;
//! use jerkcheck_trials::{FixedHorizonSolver, batch};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let config = batch::Config {
//!     n_tests: 20,
//!     ..batch::Config::default()
//! };
//! let mut rng = SmallRng::seed_from_u64(0);
//!
//! let result = batch::run_unobserved(
//!     &FixedHorizonSolver::default(),
//!     &config,
//!     Category::PointToPoint,
//!     &mut rng,
//! )
//! .unwrap();
//!
//! assert_eq!(result.summary.n_failed, 0);
//! ```
//!
//! [`Scenario`]: jerkcheck_core::Scenario
//! [`Solver`]: jerkcheck_core::Solver

pub mod batch;
pub mod generate;
pub mod projection;
pub mod reference;
pub mod suite;

mod client;

pub use batch::{Batch, BatchSummary, Outcome, TrialRecord};
pub use client::{SolverClient, SolverFailure};
pub use generate::{GeneratorError, ScenarioGenerator};
pub use reference::FixedHorizonSolver;
pub use suite::{Suite, SuiteResult};
