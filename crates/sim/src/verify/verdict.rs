/// Per-component comparison result for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisVerdict {
    pub position: bool,
    pub velocity: bool,
    pub acceleration: bool,
}

impl AxisVerdict {
    /// Returns `true` if all three components matched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.position && self.velocity && self.acceleration
    }
}

/// The outcome of comparing a simulated terminal state to its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// One entry per axis, in axis order.
    ///
    /// Empty when the axis counts did not match.
    pub axes: Vec<AxisVerdict>,

    /// Whether the simulated and target states had the same number of axes.
    pub axis_counts_match: bool,
}

impl Verdict {
    /// Returns `true` if the axis counts matched and every axis matched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.axis_counts_match && self.axes.iter().all(AxisVerdict::is_valid)
    }

    /// Indices of the axes that did not match.
    #[must_use]
    pub fn failing_axes(&self) -> Vec<usize> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, axis)| !axis.is_valid())
            .map(|(index, _)| index)
            .collect()
    }
}
