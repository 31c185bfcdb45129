//! Randomized scenario generation.
//!
//! Every category draws its random components uniformly from
//! `[-half_range, half_range]` and rounds them to `decimals` places. Rounding
//! keeps magnitudes comparable across trials and avoids near-degenerate
//! problems whose tiny switch intervals would stress the solver's numerical
//! edge cases out of proportion.
//!
//! Fixed targets use a sign pattern where axis 0 gets `+1` and every other
//! axis gets `-1` (or the reverse for the acceleration target of
//! [`Category::ToNonzeroPositionVelocityAcceleration`]). The pattern is test
//! data only and carries no meaning for other axis counts.

use jerkcheck_core::{AxisState, Category, Scenario};
use rand::Rng;
use thiserror::Error;

/// Largest supported number of decimal places.
pub const MAX_DECIMALS: u32 = 15;

/// Errors that can occur when configuring a [`ScenarioGenerator`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("half range must be finite and positive")]
    HalfRange,

    #[error("at most {MAX_DECIMALS} decimal places are supported")]
    Decimals,
}

/// Draws batches of scenarios for a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioGenerator {
    half_range: f64,
    decimals: u32,
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1.0, 1).unwrap()
    }
}

impl ScenarioGenerator {
    /// Creates a generator drawing from `[-half_range, half_range]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `half_range` is not finite and positive or
    /// `decimals` exceeds [`MAX_DECIMALS`].
    pub fn new(half_range: f64, decimals: u32) -> Result<Self, GeneratorError> {
        if !half_range.is_finite() || half_range <= 0.0 {
            return Err(GeneratorError::HalfRange);
        }
        if decimals > MAX_DECIMALS {
            return Err(GeneratorError::Decimals);
        }

        Ok(Self {
            half_range,
            decimals,
        })
    }

    #[must_use]
    pub fn half_range(&self) -> f64 {
        self.half_range
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Draws `n_tests` independent scenarios with `n_dim` axes.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_dim: usize,
        n_tests: usize,
        category: Category,
    ) -> Vec<Scenario> {
        (0..n_tests)
            .map(|_| self.scenario(rng, n_dim, category))
            .collect()
    }

    /// Draws a single scenario with `n_dim` axes.
    pub fn scenario<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_dim: usize,
        category: Category,
    ) -> Scenario {
        let axes: Vec<_> = (0..n_dim).map(|axis| self.axis(rng, axis, category)).collect();
        Scenario::from_axes(axes, category)
    }

    fn axis<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        axis: usize,
        category: Category,
    ) -> (AxisState, AxisState) {
        let sign = if axis == 0 { 1.0 } else { -1.0 };

        match category {
            Category::ToZero => (self.state(rng), AxisState::default()),
            Category::ToNonzeroPosition => (self.state(rng), AxisState::new(1.0, 0.0, 0.0)),
            Category::ToNonzeroPositionVelocity => {
                (self.state(rng), AxisState::new(1.0, sign, 0.0))
            }
            Category::ToNonzeroAcceleration => (self.state(rng), AxisState::new(0.0, 0.0, sign)),
            Category::ToNonzeroPositionVelocityAcceleration => {
                (self.state(rng), AxisState::new(1.0, sign, -sign))
            }
            Category::ZeroAccelerationBoundary => {
                let initial = AxisState::new(self.draw(rng), self.draw(rng), 0.0);
                (initial, AxisState::new(1.0, sign, 0.0))
            }
            Category::ZeroVelocityAccelerationBoundary => {
                let initial = AxisState::new(self.draw(rng), 0.0, 0.0);
                (initial, AxisState::new(1.0, 0.0, 0.0))
            }
            Category::PointToPoint => {
                let initial = AxisState::new(self.draw(rng), 0.0, 0.0);
                let target = AxisState::new(self.draw(rng), 0.0, 0.0);
                (initial, target)
            }
            Category::StateToState => (self.state(rng), self.state(rng)),
        }
    }

    fn state<R: Rng + ?Sized>(&self, rng: &mut R) -> AxisState {
        AxisState::new(self.draw(rng), self.draw(rng), self.draw(rng))
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantize(rng.gen_range(-self.half_range..=self.half_range))
    }

    /// Rounds `value` to the configured number of decimal places.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        #[allow(clippy::cast_possible_wrap)]
        let scale = 10f64.powi(self.decimals as i32);
        (value * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};

    fn is_quantized(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-9
    }

    fn batch(category: Category, n_dim: usize) -> Vec<Scenario> {
        let mut rng = SmallRng::seed_from_u64(7);
        ScenarioGenerator::default().generate(&mut rng, n_dim, 50, category)
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(ScenarioGenerator::new(0.0, 1), Err(GeneratorError::HalfRange));
        assert_eq!(ScenarioGenerator::new(f64::NAN, 1), Err(GeneratorError::HalfRange));
        assert_eq!(ScenarioGenerator::new(1.0, 16), Err(GeneratorError::Decimals));
    }

    #[test]
    fn quantizes_to_configured_places() {
        let generator = ScenarioGenerator::default();
        assert_eq!(generator.quantize(0.34), 0.3);
        assert_eq!(generator.quantize(-0.96), -1.0);

        let fine = ScenarioGenerator::new(1.0, 3).unwrap();
        assert_eq!(fine.quantize(0.12345), 0.123);
    }

    #[test]
    fn draws_are_bounded_and_quantized() {
        for scenario in batch(Category::StateToState, 3) {
            for state in [scenario.initial(), scenario.target()] {
                for &value in state
                    .position()
                    .iter()
                    .chain(state.velocity())
                    .chain(state.acceleration())
                {
                    assert!((-1.0..=1.0).contains(&value));
                    assert!(is_quantized(value));
                }
            }
        }
    }

    #[test]
    fn generates_requested_shape() {
        let scenarios = batch(Category::ToZero, 4);

        assert_eq!(scenarios.len(), 50);
        for scenario in &scenarios {
            assert_eq!(scenario.n_dim(), 4);
            assert_eq!(scenario.category(), Category::ToZero);
        }
    }

    #[test]
    fn to_zero_targets_origin() {
        for scenario in batch(Category::ToZero, 2) {
            assert_eq!(scenario.target(), &jerkcheck_core::KinematicState::zeros(2));
        }
    }

    #[test]
    fn fixed_targets_follow_sign_pattern() {
        let pv = &batch(Category::ToNonzeroPositionVelocity, 3)[0];
        assert_eq!(pv.target().position(), &[1.0, 1.0, 1.0]);
        assert_eq!(pv.target().velocity(), &[1.0, -1.0, -1.0]);
        assert_eq!(pv.target().acceleration(), &[0.0, 0.0, 0.0]);

        let a = &batch(Category::ToNonzeroAcceleration, 2)[0];
        assert_eq!(a.target().position(), &[0.0, 0.0]);
        assert_eq!(a.target().acceleration(), &[1.0, -1.0]);

        let pva = &batch(Category::ToNonzeroPositionVelocityAcceleration, 2)[0];
        assert_eq!(pva.target().position(), &[1.0, 1.0]);
        assert_eq!(pva.target().velocity(), &[1.0, -1.0]);
        assert_eq!(pva.target().acceleration(), &[-1.0, 1.0]);
    }

    #[test]
    fn boundary_categories_zero_their_components() {
        for scenario in batch(Category::ZeroAccelerationBoundary, 2) {
            assert_eq!(scenario.initial().acceleration(), &[0.0, 0.0]);
            assert_eq!(scenario.target().acceleration(), &[0.0, 0.0]);
            assert_eq!(scenario.target().velocity(), &[1.0, -1.0]);
        }

        for scenario in batch(Category::ZeroVelocityAccelerationBoundary, 2) {
            assert_eq!(scenario.initial().velocity(), &[0.0, 0.0]);
            assert_eq!(scenario.initial().acceleration(), &[0.0, 0.0]);
            assert_eq!(scenario.target().position(), &[1.0, 1.0]);
        }

        for scenario in batch(Category::PointToPoint, 2) {
            for state in [scenario.initial(), scenario.target()] {
                assert_eq!(state.velocity(), &[0.0, 0.0]);
                assert_eq!(state.acceleration(), &[0.0, 0.0]);
            }
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let generator = ScenarioGenerator::default();
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);

        assert_eq!(
            generator.generate(&mut first, 2, 20, Category::PointToPoint),
            generator.generate(&mut second, 2, 20, Category::PointToPoint),
        );
    }

    #[test]
    fn zero_tests_or_axes_are_empty() {
        let mut rng = SmallRng::seed_from_u64(0);
        let generator = ScenarioGenerator::default();

        assert!(generator.generate(&mut rng, 2, 0, Category::ToZero).is_empty());

        let scenarios = generator.generate(&mut rng, 0, 3, Category::ToZero);
        assert!(scenarios.iter().all(|s| s.n_dim() == 0));
    }
}
