use jerkcheck_core::{AxisProfile, AxisState, KinematicState, Trajectory};
use jerkcheck_sim::{Tolerance, sample, verify};
use proptest::prelude::*;

fn axis_strategy() -> impl Strategy<Value = (AxisState, AxisProfile)> {
    let state = (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64)
        .prop_map(|(p, v, a)| AxisState::new(p, v, a));

    let segments = prop::collection::vec((0.0..0.5f64, -100.0..100.0f64), 0..6).prop_map(
        |segments| {
            let mut times = vec![0.0];
            let mut jerks = Vec::with_capacity(segments.len());
            for (duration, jerk) in segments {
                let last = times[times.len() - 1];
                times.push(last + duration);
                jerks.push(jerk);
            }
            AxisProfile::new(times, jerks).expect("generated profile is valid")
        },
    );

    (state, segments)
}

fn split(axes: Vec<(AxisState, AxisProfile)>) -> (KinematicState, Trajectory) {
    let (states, profiles): (Vec<_>, Vec<_>) = axes.into_iter().unzip();
    (states.into_iter().collect(), Trajectory::new(profiles))
}

proptest! {
    #[test]
    fn sampling_is_a_pure_function(
        axes in prop::collection::vec(axis_strategy(), 1..4),
        dt in 0.005..0.1f64,
    ) {
        let (initial, trajectory) = split(axes);

        let first = sample(&initial, &trajectory, dt).unwrap();
        let second = sample(&initial, &trajectory, dt).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn last_sample_lands_on_final_time(
        axes in prop::collection::vec(axis_strategy(), 1..4),
        dt in 0.005..0.1f64,
    ) {
        let (initial, trajectory) = split(axes);

        let sampled = sample(&initial, &trajectory, dt).unwrap();

        prop_assert_eq!(sampled.final_time(), Some(trajectory.final_time()));
        for window in sampled.time.windows(2) {
            prop_assert!(window[1] > window[0]);
        }
    }

    #[test]
    fn reversing_axes_reverses_samples_and_verdict(
        axes in prop::collection::vec(axis_strategy(), 1..5),
        targets in prop::collection::vec((-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64), 5),
        dt in 0.005..0.1f64,
    ) {
        let n_dim = axes.len();
        let target: KinematicState = targets[..n_dim]
            .iter()
            .map(|&(p, v, a)| AxisState::new(p, v, a))
            .collect();
        let reversed_target: KinematicState = target.axes().rev().collect();

        let mut reversed_axes = axes.clone();
        reversed_axes.reverse();

        let (initial, trajectory) = split(axes);
        let (reversed_initial, reversed_trajectory) = split(reversed_axes);

        let sampled = sample(&initial, &trajectory, dt).unwrap();
        let reversed = sample(&reversed_initial, &reversed_trajectory, dt).unwrap();

        prop_assert_eq!(&sampled.time, &reversed.time);
        let mut expected_axes = sampled.axes.clone();
        expected_axes.reverse();
        prop_assert_eq!(&expected_axes, &reversed.axes);

        // Use each run's own end state as a target so some axes pass.
        let tolerance = Tolerance::default();
        for (goal, reversed_goal) in [
            (target, reversed_target),
            (sampled.final_state(), reversed.final_state()),
        ] {
            let verdict = verify(&goal, &sampled, &tolerance);
            let reversed_verdict = verify(&reversed_goal, &reversed, &tolerance);

            let mut expected = verdict.axes.clone();
            expected.reverse();
            prop_assert_eq!(&expected, &reversed_verdict.axes);
            prop_assert_eq!(verdict.is_valid(), reversed_verdict.is_valid());
        }
    }
}
