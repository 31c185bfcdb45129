//! Runs one batch per scenario category.

use std::collections::BTreeMap;

use jerkcheck_core::{Category, Solver};
use rand::{SeedableRng, rngs::SmallRng};

use crate::batch::{self, Batch, BatchSummary};

/// A full validation suite: one batch per [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    /// Config used for every category without an override.
    pub base: batch::Config,
    /// Per-category replacements for `base`.
    pub overrides: BTreeMap<Category, batch::Config>,
    /// Seed from which each category's generator is derived.
    pub seed: u64,
}

impl Default for Suite {
    fn default() -> Self {
        Self::new(batch::Config::default(), 0)
    }
}

impl Suite {
    #[must_use]
    pub fn new(base: batch::Config, seed: u64) -> Self {
        Self {
            base,
            overrides: BTreeMap::new(),
            seed,
        }
    }

    /// Uses `config` instead of the base config for `category`.
    #[must_use]
    pub fn with_override(mut self, category: Category, config: batch::Config) -> Self {
        self.overrides.insert(category, config);
        self
    }

    /// Returns the config a category runs with.
    #[must_use]
    pub fn config(&self, category: Category) -> &batch::Config {
        self.overrides.get(&category).unwrap_or(&self.base)
    }

    /// Returns the generator a category draws its scenarios from.
    ///
    /// Each category gets its own stream, so overriding or reordering one
    /// category never changes the scenarios drawn for another.
    #[must_use]
    pub fn rng(&self, category: Category) -> SmallRng {
        let stream = category.index().wrapping_mul(0x9E37_79B9_7F4A_7C15);
        SmallRng::seed_from_u64(self.seed ^ stream)
    }
}

/// The batches of a suite run, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteResult {
    pub batches: Vec<Batch>,
}

impl SuiteResult {
    /// Iterates over the per-category summaries.
    pub fn summaries(&self) -> impl Iterator<Item = &BatchSummary> {
        self.batches.iter().map(|batch| &batch.summary)
    }

    /// Number of failed trials per category.
    #[must_use]
    pub fn failures_by_category(&self) -> BTreeMap<Category, usize> {
        self.summaries()
            .map(|summary| (summary.category, summary.n_failed))
            .collect()
    }

    /// Number of failed trials across all categories.
    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.summaries().map(|summary| summary.n_failed).sum()
    }
}

/// Runs every category of `suite` against `solver`.
///
/// All configs are validated before the first trial runs.
///
/// # Errors
///
/// Returns an error if any category's config is invalid.
pub fn run<S: Solver>(solver: &S, suite: &Suite) -> Result<SuiteResult, batch::Error> {
    for category in Category::ALL {
        suite
            .config(category)
            .validate()
            .map_err(|reason| batch::Error::InvalidConfig { reason })?;
    }

    let batches = Category::ALL
        .into_iter()
        .map(|category| {
            let mut rng = suite.rng(category);
            batch::run_unobserved(solver, suite.config(category), category, &mut rng)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SuiteResult { batches })
}

#[cfg(test)]
mod tests {
    use super::*;

    use jerkcheck_core::{Constraints, KinematicState, Trajectory};
    use thiserror::Error;

    use crate::FixedHorizonSolver;

    #[derive(Debug, Error)]
    #[error("refused")]
    struct Refused;

    struct Refuses;

    impl Solver for Refuses {
        type Error = Refused;

        fn solve(
            &self,
            _initial: &KinematicState,
            _target: &KinematicState,
            _constraints: &Constraints,
        ) -> Result<Trajectory, Self::Error> {
            Err(Refused)
        }
    }

    fn small_suite() -> Suite {
        Suite::new(
            batch::Config {
                n_tests: 10,
                ..batch::Config::default()
            },
            3,
        )
    }

    #[test]
    fn runs_categories_in_order() {
        let result = run(&FixedHorizonSolver::default(), &small_suite()).unwrap();

        let categories: Vec<_> = result.summaries().map(|s| s.category).collect();
        assert_eq!(categories, Category::ALL);
        assert_eq!(result.total_failed(), 0);
        assert!(result.failures_by_category().values().all(|&n| n == 0));
    }

    #[test]
    fn overrides_apply_to_one_category() {
        let suite = small_suite().with_override(
            Category::PointToPoint,
            batch::Config {
                n_tests: 2,
                ..batch::Config::default()
            },
        );

        let result = run(&Refuses, &suite).unwrap();
        let failures = result.failures_by_category();

        assert_eq!(failures[&Category::PointToPoint], 2);
        assert_eq!(failures[&Category::ToZero], 10);
        assert_eq!(result.total_failed(), 8 * 10 + 2);
    }

    #[test]
    fn one_bad_config_stops_the_whole_suite() {
        let suite = small_suite().with_override(
            Category::StateToState,
            batch::Config {
                dt: 0.0,
                ..batch::Config::default()
            },
        );

        assert!(matches!(
            run(&Refuses, &suite),
            Err(batch::Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn same_seed_same_scenarios() {
        let suite = small_suite();
        let first = run(&Refuses, &suite).unwrap();
        let second = run(&Refuses, &suite).unwrap();

        for (a, b) in first.batches.iter().zip(&second.batches) {
            let scenarios = |batch: &Batch| -> Vec<_> {
                batch.records.iter().map(|r| r.scenario.clone()).collect()
            };
            assert_eq!(scenarios(a), scenarios(b));
        }
    }

    #[test]
    fn categories_draw_from_distinct_streams() {
        use rand::Rng;

        let suite = Suite::default();
        let draws: Vec<u64> = Category::ALL
            .into_iter()
            .map(|category| suite.rng(category).gen_range(0..u64::MAX))
            .collect();

        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), draws.len());
    }
}
