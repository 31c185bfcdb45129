use thiserror::Error;

/// Errors that can occur while sampling a trajectory.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("sampling interval must be finite and positive, got {dt}")]
    InvalidInterval { dt: f64 },

    #[error("initial state has {state} axes but trajectory has {trajectory}")]
    AxisCountMismatch { state: usize, trajectory: usize },

    #[error("sampling {final_time} s at dt = {dt} exceeds the limit of {limit} samples")]
    TooManySamples {
        final_time: f64,
        dt: f64,
        limit: usize,
    },
}
