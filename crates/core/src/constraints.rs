use std::fmt;

use thiserror::Error;

/// A closed interval `[min, max]` applied identically to every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The kinematic quantity a set of bounds applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Velocity,
    Acceleration,
    Jerk,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Velocity => "velocity",
            Self::Acceleration => "acceleration",
            Self::Jerk => "jerk",
        })
    }
}

/// Flags asking the solver to synchronize axis completion times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncFlags {
    /// Synchronize velocity-limited phases (`sync_v`).
    pub velocity: bool,
    /// Synchronize acceleration-limited phases (`sync_a`).
    pub acceleration: bool,
    /// Synchronize the whole trajectory so all axes finish together (`sync_w`).
    pub whole: bool,
}

/// Errors that can occur when validating constraints.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConstraintsError {
    #[error("{quantity} bounds must be finite, got [{min}, {max}]")]
    NonFinite { quantity: Quantity, min: f64, max: f64 },

    #[error("{quantity} bounds are inverted: min {min} > max {max}")]
    Inverted { quantity: Quantity, min: f64, max: f64 },

    #[error("{quantity} bounds [{min}, {max}] do not contain zero")]
    ExcludesZero { quantity: Quantity, min: f64, max: f64 },
}

/// Validated kinematic limits and synchronization flags for one run.
///
/// Every bound is finite, ordered, and contains zero, since trajectories
/// typically start and end away from the limits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConstraintParams", into = "ConstraintParams")
)]
pub struct Constraints {
    velocity: Bounds,
    acceleration: Bounds,
    jerk: Bounds,
    sync: SyncFlags,
}

impl Default for Constraints {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::try_from(ConstraintParams::default()).unwrap()
    }
}

impl Constraints {
    /// Creates validated constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite, inverted, or excludes zero.
    pub fn new(
        velocity: Bounds,
        acceleration: Bounds,
        jerk: Bounds,
        sync: SyncFlags,
    ) -> Result<Self, ConstraintsError> {
        check(Quantity::Velocity, velocity)?;
        check(Quantity::Acceleration, acceleration)?;
        check(Quantity::Jerk, jerk)?;

        Ok(Self {
            velocity,
            acceleration,
            jerk,
            sync,
        })
    }

    /// Returns a copy with different synchronization flags.
    #[must_use]
    pub fn with_sync(self, sync: SyncFlags) -> Self {
        Self { sync, ..self }
    }

    #[must_use]
    pub fn velocity(&self) -> Bounds {
        self.velocity
    }

    #[must_use]
    pub fn acceleration(&self) -> Bounds {
        self.acceleration
    }

    #[must_use]
    pub fn jerk(&self) -> Bounds {
        self.jerk
    }

    #[must_use]
    pub fn sync(&self) -> SyncFlags {
        self.sync
    }
}

fn check(quantity: Quantity, bounds: Bounds) -> Result<(), ConstraintsError> {
    let Bounds { min, max } = bounds;

    if !min.is_finite() || !max.is_finite() {
        return Err(ConstraintsError::NonFinite { quantity, min, max });
    }
    if min > max {
        return Err(ConstraintsError::Inverted { quantity, min, max });
    }
    if !bounds.contains(0.0) {
        return Err(ConstraintsError::ExcludesZero { quantity, min, max });
    }
    Ok(())
}

/// Flat, named-option form of [`Constraints`].
///
/// This is the configuration surface callers fill in; convert it with
/// `Constraints::try_from` to validate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintParams {
    pub v_min: f64,
    pub v_max: f64,
    pub a_min: f64,
    pub a_max: f64,
    pub j_min: f64,
    pub j_max: f64,
    pub sync_v: bool,
    pub sync_a: bool,
    pub sync_w: bool,
}

impl Default for ConstraintParams {
    fn default() -> Self {
        Self {
            v_min: -10.0,
            v_max: 10.0,
            a_min: -5.0,
            a_max: 5.0,
            j_min: -100.0,
            j_max: 100.0,
            sync_v: true,
            sync_a: true,
            sync_w: false,
        }
    }
}

impl TryFrom<ConstraintParams> for Constraints {
    type Error = ConstraintsError;

    fn try_from(params: ConstraintParams) -> Result<Self, Self::Error> {
        Self::new(
            Bounds::new(params.v_min, params.v_max),
            Bounds::new(params.a_min, params.a_max),
            Bounds::new(params.j_min, params.j_max),
            SyncFlags {
                velocity: params.sync_v,
                acceleration: params.sync_a,
                whole: params.sync_w,
            },
        )
    }
}

impl From<Constraints> for ConstraintParams {
    fn from(constraints: Constraints) -> Self {
        Self {
            v_min: constraints.velocity.min,
            v_max: constraints.velocity.max,
            a_min: constraints.acceleration.min,
            a_max: constraints.acceleration.max,
            j_min: constraints.jerk.min,
            j_max: constraints.jerk.max,
            sync_v: constraints.sync.velocity,
            sync_a: constraints.sync.acceleration,
            sync_w: constraints.sync.whole,
        }
    }
}
