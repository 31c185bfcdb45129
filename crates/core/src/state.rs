use thiserror::Error;

/// Position, velocity, and acceleration of a single axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisState {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl AxisState {
    /// Creates a new axis state.
    #[must_use]
    pub fn new(position: f64, velocity: f64, acceleration: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Returns the state after holding `jerk` constant for `tau`.
    ///
    /// Uses the exact polynomial solution of the triple integrator:
    ///
    /// ```text
    /// a(τ) = a + j·τ
    /// v(τ) = v + a·τ + j·τ²/2
    /// p(τ) = p + v·τ + a·τ²/2 + j·τ³/6
    /// ```
    #[must_use]
    pub fn advance(&self, jerk: f64, tau: f64) -> Self {
        let tau2 = tau * tau;
        let tau3 = tau2 * tau;

        Self {
            position: self.position
                + self.velocity * tau
                + self.acceleration * tau2 / 2.0
                + jerk * tau3 / 6.0,
            velocity: self.velocity + self.acceleration * tau + jerk * tau2 / 2.0,
            acceleration: self.acceleration + jerk * tau,
        }
    }

    /// Returns `true` if all three components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}

/// Errors that can occur when building a [`KinematicState`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error(
        "component lengths differ: position={position}, velocity={velocity}, acceleration={acceleration}"
    )]
    AxisCountMismatch {
        position: usize,
        velocity: usize,
        acceleration: usize,
    },
}

/// Multi-axis kinematic state.
///
/// The three component vectors always share the same axis count, which may be
/// zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinematicState {
    position: Vec<f64>,
    velocity: Vec<f64>,
    acceleration: Vec<f64>,
}

impl KinematicState {
    /// Creates a state from its component vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths.
    pub fn new(
        position: Vec<f64>,
        velocity: Vec<f64>,
        acceleration: Vec<f64>,
    ) -> Result<Self, StateError> {
        if position.len() != velocity.len() || position.len() != acceleration.len() {
            return Err(StateError::AxisCountMismatch {
                position: position.len(),
                velocity: velocity.len(),
                acceleration: acceleration.len(),
            });
        }

        Ok(Self {
            position,
            velocity,
            acceleration,
        })
    }

    /// Creates an `n_dim`-axis state at rest at the origin.
    #[must_use]
    pub fn zeros(n_dim: usize) -> Self {
        Self {
            position: vec![0.0; n_dim],
            velocity: vec![0.0; n_dim],
            acceleration: vec![0.0; n_dim],
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn n_dim(&self) -> usize {
        self.position.len()
    }

    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    #[must_use]
    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    /// Returns the state of one axis, or `None` if `index` is out of range.
    #[must_use]
    pub fn axis(&self, index: usize) -> Option<AxisState> {
        Some(AxisState::new(
            *self.position.get(index)?,
            self.velocity[index],
            self.acceleration[index],
        ))
    }

    /// Iterates over the per-axis states in axis order.
    pub fn axes(&self) -> impl DoubleEndedIterator<Item = AxisState> + ExactSizeIterator + '_ {
        (0..self.n_dim()).map(|i| {
            AxisState::new(self.position[i], self.velocity[i], self.acceleration[i])
        })
    }

    /// Returns `true` if every component of every axis is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.axes().all(|axis| axis.is_finite())
    }
}

impl Extend<AxisState> for KinematicState {
    fn extend<T: IntoIterator<Item = AxisState>>(&mut self, iter: T) {
        for axis in iter {
            self.position.push(axis.position);
            self.velocity.push(axis.velocity);
            self.acceleration.push(axis.acceleration);
        }
    }
}

impl FromIterator<AxisState> for KinematicState {
    fn from_iter<T: IntoIterator<Item = AxisState>>(iter: T) -> Self {
        let mut state = Self::default();
        state.extend(iter);
        state
    }
}
