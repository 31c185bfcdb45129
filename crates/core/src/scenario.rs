use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{AxisState, KinematicState};

/// The pattern of boundary conditions a scenario was drawn from.
///
/// Used only for grouping and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Random initial state to the zero state.
    #[cfg_attr(feature = "serde", serde(rename = "to-zero"))]
    ToZero,
    /// Random initial state to unit position at rest.
    #[cfg_attr(feature = "serde", serde(rename = "to-nonzero-p"))]
    ToNonzeroPosition,
    /// Random initial state to unit position with alternating unit velocity.
    #[cfg_attr(feature = "serde", serde(rename = "to-nonzero-pv"))]
    ToNonzeroPositionVelocity,
    /// Random initial state to the origin with alternating unit acceleration.
    #[cfg_attr(feature = "serde", serde(rename = "to-nonzero-a"))]
    ToNonzeroAcceleration,
    /// Random initial state to fixed nonzero position, velocity, and acceleration.
    #[cfg_attr(feature = "serde", serde(rename = "to-nonzero-pva"))]
    ToNonzeroPositionVelocityAcceleration,
    /// Zero acceleration at both ends.
    #[cfg_attr(feature = "serde", serde(rename = "zero-a"))]
    ZeroAccelerationBoundary,
    /// Zero velocity and acceleration at both ends.
    #[cfg_attr(feature = "serde", serde(rename = "zero-va"))]
    ZeroVelocityAccelerationBoundary,
    /// Random position to random position, at rest at both ends.
    #[cfg_attr(feature = "serde", serde(rename = "point-to-point"))]
    PointToPoint,
    /// Fully random initial and target states.
    #[cfg_attr(feature = "serde", serde(rename = "state-to-state"))]
    StateToState,
}

impl Category {
    /// Every category, in the order a full suite runs them.
    pub const ALL: [Self; 9] = [
        Self::ToZero,
        Self::ToNonzeroPosition,
        Self::ToNonzeroAcceleration,
        Self::ToNonzeroPositionVelocity,
        Self::ToNonzeroPositionVelocityAcceleration,
        Self::ZeroVelocityAccelerationBoundary,
        Self::ZeroAccelerationBoundary,
        Self::PointToPoint,
        Self::StateToState,
    ];

    /// Short, stable label used in reports and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ToZero => "to-zero",
            Self::ToNonzeroPosition => "to-nonzero-p",
            Self::ToNonzeroPositionVelocity => "to-nonzero-pv",
            Self::ToNonzeroAcceleration => "to-nonzero-a",
            Self::ToNonzeroPositionVelocityAcceleration => "to-nonzero-pva",
            Self::ZeroAccelerationBoundary => "zero-a",
            Self::ZeroVelocityAccelerationBoundary => "zero-va",
            Self::PointToPoint => "point-to-point",
            Self::StateToState => "state-to-state",
        }
    }

    /// Stable index of this category, independent of [`Category::ALL`] order.
    #[must_use]
    pub fn index(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scenario category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Errors that can occur when building a [`Scenario`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("initial state has {initial} axes but target has {target}")]
    AxisCountMismatch { initial: usize, target: usize },
}

/// A boundary-value problem: move from `initial` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    initial: KinematicState,
    target: KinematicState,
    category: Category,
}

impl Scenario {
    /// Creates a scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if the two states have different axis counts.
    pub fn new(
        initial: KinematicState,
        target: KinematicState,
        category: Category,
    ) -> Result<Self, ScenarioError> {
        if initial.n_dim() != target.n_dim() {
            return Err(ScenarioError::AxisCountMismatch {
                initial: initial.n_dim(),
                target: target.n_dim(),
            });
        }

        Ok(Self {
            initial,
            target,
            category,
        })
    }

    /// Builds a scenario axis by axis from `(initial, target)` pairs.
    ///
    /// Both states always end up with the same axis count.
    pub fn from_axes<I>(axes: I, category: Category) -> Self
    where
        I: IntoIterator<Item = (AxisState, AxisState)>,
    {
        let (initial, target) = axes.into_iter().unzip();

        Self {
            initial,
            target,
            category,
        }
    }

    #[must_use]
    pub fn initial(&self) -> &KinematicState {
        &self.initial
    }

    #[must_use]
    pub fn target(&self) -> &KinematicState {
        &self.target
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn n_dim(&self) -> usize {
        self.initial.n_dim()
    }
}
