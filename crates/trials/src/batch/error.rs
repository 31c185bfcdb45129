use thiserror::Error;

/// Errors that prevent a batch from running at all.
///
/// Failures of individual trials are never errors. They are recorded on the
/// trial's [`TrialRecord`](super::TrialRecord).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
