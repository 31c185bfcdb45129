//! Independent verification of simulated terminal states.
//!
//! The verifier only looks at the target state and the last sample of a
//! [`SampledTrajectory`]. It never consults anything the solver reports
//! about its own success.

mod tolerance;
mod verdict;

pub use tolerance::{Tolerance, ToleranceError};
pub use verdict::{AxisVerdict, Verdict};

use jerkcheck_core::KinematicState;

use crate::SampledTrajectory;

/// Checks that the last sample of `sampled` matches `target`.
///
/// Position, velocity, and acceleration are compared independently on every
/// axis with `tolerance`.
#[must_use]
pub fn verify(
    target: &KinematicState,
    sampled: &SampledTrajectory,
    tolerance: &Tolerance,
) -> Verdict {
    verify_state(target, &sampled.final_state(), tolerance)
}

/// Checks that `actual` matches `target` component-wise.
#[must_use]
pub fn verify_state(
    target: &KinematicState,
    actual: &KinematicState,
    tolerance: &Tolerance,
) -> Verdict {
    if target.n_dim() != actual.n_dim() {
        return Verdict {
            axes: Vec::new(),
            axis_counts_match: false,
        };
    }

    let axes = target
        .axes()
        .zip(actual.axes())
        .map(|(expected, got)| AxisVerdict {
            position: tolerance.is_close(got.position, expected.position),
            velocity: tolerance.is_close(got.velocity, expected.velocity),
            acceleration: tolerance.is_close(got.acceleration, expected.acceleration),
        })
        .collect();

    Verdict {
        axes,
        axis_counts_match: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jerkcheck_core::{AxisProfile, Trajectory};

    use crate::sample;

    fn state(position: &[f64], velocity: &[f64], acceleration: &[f64]) -> KinematicState {
        KinematicState::new(position.to_vec(), velocity.to_vec(), acceleration.to_vec())
            .expect("valid state")
    }

    fn abs_only() -> Tolerance {
        Tolerance::new(1e-8, 0.0).unwrap()
    }

    #[test]
    fn just_inside_absolute_tolerance_is_valid() {
        let target = state(&[1.0], &[0.0], &[0.0]);
        let actual = state(&[1.0 + 5e-9], &[0.0], &[0.0]);

        assert!(verify_state(&target, &actual, &abs_only()).is_valid());
    }

    #[test]
    fn just_outside_absolute_tolerance_is_invalid() {
        let target = state(&[1.0], &[0.0], &[0.0]);
        let actual = state(&[1.0 + 5e-7], &[0.0], &[0.0]);

        let verdict = verify_state(&target, &actual, &abs_only());

        assert!(!verdict.is_valid());
        assert_eq!(
            verdict.axes,
            vec![AxisVerdict {
                position: false,
                velocity: true,
                acceleration: true,
            }]
        );
    }

    #[test]
    fn each_component_is_checked() {
        let target = state(&[0.0, 0.0], &[1.0, -1.0], &[0.0, 0.0]);
        let actual = state(&[0.0, 0.0], &[1.0, -1.0], &[0.0, 0.1]);

        let verdict = verify_state(&target, &actual, &Tolerance::default());

        assert!(!verdict.is_valid());
        assert!(verdict.axes[0].is_valid());
        assert!(!verdict.axes[1].acceleration);
        assert_eq!(verdict.failing_axes(), vec![1]);
    }

    #[test]
    fn mismatched_axis_counts_are_invalid() {
        let verdict = verify_state(
            &KinematicState::zeros(2),
            &KinematicState::zeros(3),
            &Tolerance::default(),
        );

        assert!(!verdict.axis_counts_match);
        assert!(!verdict.is_valid());
    }

    #[test]
    fn nan_end_state_is_invalid() {
        let target = KinematicState::zeros(1);
        let actual = state(&[f64::NAN], &[0.0], &[0.0]);

        assert!(!verify_state(&target, &actual, &Tolerance::default()).is_valid());
    }

    #[test]
    fn zero_axes_are_trivially_valid() {
        let verdict = verify_state(
            &KinematicState::zeros(0),
            &KinematicState::zeros(0),
            &Tolerance::default(),
        );
        assert!(verdict.is_valid());
    }

    #[test]
    fn verifies_last_sample_of_trajectory() {
        // Bang-bang profile that moves from rest at 0 to rest at 1.
        let profile = AxisProfile::new(vec![0.0, 1.0, 2.0], vec![1.0, -1.0]).unwrap();
        let trajectory = Trajectory::new(vec![profile]);
        let sampled = sample(&KinematicState::zeros(1), &trajectory, 0.01).unwrap();

        let arrived = state(&[1.0], &[1.0], &[0.0]);
        let at_rest = state(&[1.0], &[0.0], &[0.0]);

        assert!(verify(&arrived, &sampled, &Tolerance::default()).is_valid());
        assert!(!verify(&at_rest, &sampled, &Tolerance::default()).is_valid());
    }
}
