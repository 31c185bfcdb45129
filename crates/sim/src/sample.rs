//! Dense forward simulation of piecewise-constant jerk trajectories.
//!
//! Within a segment of constant jerk `j` starting from state `(p, v, a)`, the
//! state after `τ` is the exact polynomial
//!
//! ```text
//! a(τ) = a + j·τ
//! v(τ) = v + a·τ + j·τ²/2
//! p(τ) = p + v·τ + a·τ²/2 + j·τ³/6
//! ```
//!
//! The sampler evaluates this at the start of every segment (the switch
//! states) and then at every grid time from the enclosing segment's switch
//! state, so the error does not grow with the number of samples.
//!
//! # Time grid
//!
//! Samples are taken at `k·dt` for `k = 0..=floor(t_end / dt)`, where `t_end`
//! is the latest final time across all axes. If the last grid point falls
//! short of `t_end`, `t_end` is appended; if it lands on `t_end` (to within
//! a tiny fraction of `dt`), it is snapped to `t_end` exactly. Either way the
//! last sample is the terminal state.
//!
//! Before its first switch time and after its last, an axis coasts with zero
//! jerk. An axis that finishes before `t_end` therefore keeps its terminal
//! acceleration and drifts, which is exactly what the verifier should see
//! when a solver fails to synchronize axes that end in motion.
//!
//! # Example
//!
//! ```
//! use jerkcheck_core::{AxisProfile, KinematicState, Trajectory};
//! use jerkcheck_sim::sample;
//!
//! let initial = KinematicState::zeros(1);
//! let trajectory = Trajectory::new(vec![AxisProfile::new(vec![0.0, 1.0], vec![6.0])?]);
//!
//! let sampled = sample(&initial, &trajectory, 0.25)?;
//! assert_eq!(sampled.time, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(sampled.final_state().position(), &[1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod samples;

pub use error::Error;
pub use samples::{AxisSamples, SampledTrajectory};

use jerkcheck_core::{AxisProfile, AxisState, KinematicState, Trajectory};

/// Default upper bound on samples per axis.
///
/// Each sample stores four values per axis, so one million samples is about
/// 32 MB per axis.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Fraction of `dt` within which the last grid point is snapped to `t_end`.
const GRID_SNAP: f64 = 1e-9;

/// Samples `trajectory` from `initial` every `dt`.
///
/// Each axis is integrated independently over the shared time grid described
/// in the [module docs](self). The result is a pure function of the inputs.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, if the axis counts of
/// `initial` and `trajectory` differ, or if the grid would exceed
/// [`MAX_SAMPLES`].
pub fn sample(
    initial: &KinematicState,
    trajectory: &Trajectory,
    dt: f64,
) -> Result<SampledTrajectory, Error> {
    sample_with_limit(initial, trajectory, dt, MAX_SAMPLES)
}

/// Samples like [`sample`], but with at most `max_samples` samples per axis.
///
/// The limit is checked before anything is allocated, so a trajectory with an
/// absurd final time is rejected cheaply.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, if the axis counts of
/// `initial` and `trajectory` differ, or if the grid would exceed
/// `max_samples`.
pub fn sample_with_limit(
    initial: &KinematicState,
    trajectory: &Trajectory,
    dt: f64,
    max_samples: usize,
) -> Result<SampledTrajectory, Error> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidInterval { dt });
    }

    if initial.n_dim() != trajectory.n_dim() {
        return Err(Error::AxisCountMismatch {
            state: initial.n_dim(),
            trajectory: trajectory.n_dim(),
        });
    }

    let time = time_grid(trajectory.final_time(), dt, max_samples)?;
    let axes = initial
        .axes()
        .zip(trajectory.axes())
        .map(|(state, profile)| sample_axis(state, profile, &time))
        .collect();

    Ok(SampledTrajectory { time, axes })
}

/// Returns the state of one axis at each of its switch times.
///
/// The first entry is the state at the first switch time and the last entry
/// is the axis's terminal state.
#[must_use]
pub fn switch_states(initial: AxisState, profile: &AxisProfile) -> Vec<AxisState> {
    let mut states = Vec::with_capacity(profile.times().len());

    let mut state = initial.advance(0.0, profile.times()[0]);
    states.push(state);

    for (start, end, jerk) in profile.segments() {
        state = state.advance(jerk, end - start);
        states.push(state);
    }

    states
}

/// Builds the shared sample times for a trajectory ending at `final_time`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn time_grid(final_time: f64, dt: f64, max_samples: usize) -> Result<Vec<f64>, Error> {
    let steps = (final_time / dt).floor();

    // The grid holds `steps + 1` points and possibly `final_time` itself.
    // Negated comparison also rejects NaN.
    if !(steps + 2.0 <= max_samples as f64) {
        return Err(Error::TooManySamples {
            final_time,
            dt,
            limit: max_samples,
        });
    }

    let steps = steps as usize;
    let mut time: Vec<f64> = (0..=steps).map(|k| k as f64 * dt).collect();

    if final_time - time[steps] > GRID_SNAP * dt {
        time.push(final_time);
    } else {
        time[steps] = final_time;
    }

    Ok(time)
}

fn sample_axis(initial: AxisState, profile: &AxisProfile, time: &[f64]) -> AxisSamples {
    let switches = switch_states(initial, profile);
    let times = profile.times();
    let jerks = profile.jerks();

    let mut samples = AxisSamples::with_capacity(time.len());

    for &t in time {
        let passed = times.partition_point(|&switch| switch <= t);

        if passed == 0 {
            samples.push(0.0, initial.advance(0.0, t));
            continue;
        }

        let segment = passed - 1;
        let jerk = jerks.get(segment).copied().unwrap_or(0.0);
        samples.push(jerk, switches[segment].advance(jerk, t - times[segment]));
    }

    samples
}
