use thiserror::Error;

/// Configuration for the fixed-horizon reference solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_horizon: f64,
    growth: f64,
    max_attempts: usize,
}

/// Errors that can occur when validating a reference solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_horizon must be finite and positive")]
    InitialHorizon,

    #[error("growth must be finite and greater than one")]
    Growth,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 2.0, 40).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial horizon is not positive or the growth
    /// factor would not lengthen the horizon.
    pub fn new(
        initial_horizon: f64,
        growth: f64,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if !initial_horizon.is_finite() || initial_horizon <= 0.0 {
            return Err(ConfigError::InitialHorizon);
        }
        if !growth.is_finite() || growth <= 1.0 {
            return Err(ConfigError::Growth);
        }

        Ok(Self {
            initial_horizon,
            growth,
            max_attempts,
        })
    }

    /// Returns the first horizon tried, in seconds.
    #[must_use]
    pub fn initial_horizon(&self) -> f64 {
        self.initial_horizon
    }

    /// Returns the factor the horizon grows by after each infeasible attempt.
    #[must_use]
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Returns the maximum number of horizons tried.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
