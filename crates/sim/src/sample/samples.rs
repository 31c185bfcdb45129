use jerkcheck_core::{AxisState, KinematicState};

/// Dense samples of one axis, aligned with [`SampledTrajectory::time`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSamples {
    pub jerk: Vec<f64>,
    pub acceleration: Vec<f64>,
    pub velocity: Vec<f64>,
    pub position: Vec<f64>,
}

impl AxisSamples {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            jerk: Vec::with_capacity(capacity),
            acceleration: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, jerk: f64, state: AxisState) {
        self.jerk.push(jerk);
        self.acceleration.push(state.acceleration);
        self.velocity.push(state.velocity);
        self.position.push(state.position);
    }

    /// The sampled state at `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<AxisState> {
        Some(AxisState::new(
            *self.position.get(index)?,
            self.velocity[index],
            self.acceleration[index],
        ))
    }

    /// The last sampled state, if any.
    #[must_use]
    pub fn last(&self) -> Option<AxisState> {
        self.state(self.position.len().checked_sub(1)?)
    }
}

/// The result of sampling a trajectory on a fixed time grid.
///
/// Every axis is sampled at the same times, and the last sample is the
/// trajectory's terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTrajectory {
    /// Sample times, starting at zero and ending at the trajectory's final time.
    pub time: Vec<f64>,

    /// Per-axis samples, in axis order.
    pub axes: Vec<AxisSamples>,
}

impl SampledTrajectory {
    /// Number of samples per axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if there are no samples.
    ///
    /// Trajectories produced by [`sample`](super::sample) always contain at
    /// least the initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// The time of the last sample.
    #[must_use]
    pub fn final_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    /// The state at the last sample of every axis.
    #[must_use]
    pub fn final_state(&self) -> KinematicState {
        self.axes.iter().filter_map(AxisSamples::last).collect()
    }
}
