use thiserror::Error;

/// Errors that can occur when building an [`AxisProfile`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProfileError {
    #[error("expected one more switch time than jerk values, got {times} times and {jerks} jerks")]
    LengthMismatch { times: usize, jerks: usize },

    #[error("switch time {index} is not finite and non-negative: {value}")]
    InvalidTime { index: usize, value: f64 },

    #[error("switch time {index} ({value}) precedes the previous switch time ({previous})")]
    Decreasing {
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("jerk {index} is not finite: {value}")]
    NonFiniteJerk { index: usize, value: f64 },
}

/// Piecewise-constant jerk profile of a single axis.
///
/// `jerks[i]` is held over `[times[i], times[i + 1]]`, so there is always one
/// more switch time than jerk value. The last switch time is the axis's final
/// time. Switch times are finite, non-negative, and non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisProfile {
    times: Vec<f64>,
    jerks: Vec<f64>,
}

impl AxisProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths disagree or a value is out of range.
    pub fn new(times: Vec<f64>, jerks: Vec<f64>) -> Result<Self, ProfileError> {
        if times.len() != jerks.len() + 1 {
            return Err(ProfileError::LengthMismatch {
                times: times.len(),
                jerks: jerks.len(),
            });
        }

        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidTime { index, value });
            }
        }

        for (index, pair) in times.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ProfileError::Decreasing {
                    index: index + 1,
                    value: pair[1],
                    previous: pair[0],
                });
            }
        }

        if let Some((index, &value)) = jerks.iter().enumerate().find(|(_, j)| !j.is_finite()) {
            return Err(ProfileError::NonFiniteJerk { index, value });
        }

        Ok(Self { times, jerks })
    }

    /// A profile with no segments that ends at time zero.
    #[must_use]
    pub fn stationary() -> Self {
        Self {
            times: vec![0.0],
            jerks: Vec::new(),
        }
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn jerks(&self) -> &[f64] {
        &self.jerks
    }

    /// Iterates over `(start, end, jerk)` for each segment.
    pub fn segments(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.times
            .windows(2)
            .zip(&self.jerks)
            .map(|(span, &jerk)| (span[0], span[1], jerk))
    }

    /// The time at which this axis's profile ends.
    #[must_use]
    pub fn final_time(&self) -> f64 {
        // Construction guarantees at least one switch time.
        self.times[self.times.len() - 1]
    }
}

/// A multi-axis trajectory returned by a solver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    axes: Vec<AxisProfile>,
}

impl Trajectory {
    #[must_use]
    pub fn new(axes: Vec<AxisProfile>) -> Self {
        Self { axes }
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisProfile] {
        &self.axes
    }

    #[must_use]
    pub fn n_dim(&self) -> usize {
        self.axes.len()
    }

    /// Final time of each axis, in axis order.
    ///
    /// These agree when the solver synchronized the whole trajectory.
    #[must_use]
    pub fn final_times(&self) -> Vec<f64> {
        self.axes.iter().map(AxisProfile::final_time).collect()
    }

    /// The latest final time across all axes, or zero for an empty trajectory.
    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.axes
            .iter()
            .map(AxisProfile::final_time)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_profile() {
        let profile = AxisProfile::new(vec![0.0, 0.5, 0.5, 1.25], vec![10.0, 0.0, -10.0])
            .expect("profile is valid");

        assert_eq!(profile.final_time(), 1.25);
        let segments: Vec<_> = profile.segments().collect();
        assert_eq!(
            segments,
            vec![(0.0, 0.5, 10.0), (0.5, 0.5, 0.0), (0.5, 1.25, -10.0)]
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        assert_eq!(
            AxisProfile::new(vec![0.0, 1.0], vec![1.0, 2.0]),
            Err(ProfileError::LengthMismatch { times: 2, jerks: 2 })
        );
        assert_eq!(
            AxisProfile::new(vec![], vec![]),
            Err(ProfileError::LengthMismatch { times: 0, jerks: 0 })
        );
    }

    #[test]
    fn rejects_decreasing_times() {
        assert_eq!(
            AxisProfile::new(vec![0.0, 2.0, 1.0], vec![1.0, 1.0]),
            Err(ProfileError::Decreasing {
                index: 2,
                value: 1.0,
                previous: 2.0,
            })
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AxisProfile::new(vec![-1.0, 0.0], vec![1.0]),
            Err(ProfileError::InvalidTime { index: 0, .. })
        ));
        assert!(matches!(
            AxisProfile::new(vec![0.0, f64::NAN], vec![1.0]),
            Err(ProfileError::InvalidTime { index: 1, .. })
        ));
        assert!(matches!(
            AxisProfile::new(vec![0.0, 1.0], vec![f64::INFINITY]),
            Err(ProfileError::NonFiniteJerk { index: 0, .. })
        ));
    }

    #[test]
    fn final_time_is_latest_axis() {
        let trajectory = Trajectory::new(vec![
            AxisProfile::new(vec![0.0, 1.0], vec![1.0]).unwrap(),
            AxisProfile::new(vec![0.0, 0.5, 2.0], vec![1.0, -1.0]).unwrap(),
            AxisProfile::stationary(),
        ]);

        assert_eq!(trajectory.final_times(), vec![1.0, 2.0, 0.0]);
        assert_eq!(trajectory.final_time(), 2.0);
        assert_eq!(Trajectory::default().final_time(), 0.0);
    }
}
