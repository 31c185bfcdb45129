use thiserror::Error;

/// Absolute and relative tolerance for comparing terminal states.
///
/// A value `actual` is close to `expected` when
///
/// ```text
/// |actual - expected| <= abs + rel * |expected|
/// ```
///
/// Non-finite values are never close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    abs: f64,
    rel: f64,
}

/// Errors that can occur when validating a tolerance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("absolute tolerance must be finite and non-negative")]
    Abs,

    #[error("relative tolerance must be finite and non-negative")]
    Rel,
}

impl Default for Tolerance {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-8, 1e-5).unwrap()
    }
}

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(abs: f64, rel: f64) -> Result<Self, ToleranceError> {
        if !abs.is_finite() || abs < 0.0 {
            return Err(ToleranceError::Abs);
        }
        if !rel.is_finite() || rel < 0.0 {
            return Err(ToleranceError::Rel);
        }

        Ok(Self { abs, rel })
    }

    #[must_use]
    pub fn abs(&self) -> f64 {
        self.abs
    }

    #[must_use]
    pub fn rel(&self) -> f64 {
        self.rel
    }

    /// Returns `true` if `actual` is within tolerance of `expected`.
    #[must_use]
    pub fn is_close(&self, actual: f64, expected: f64) -> bool {
        actual.is_finite()
            && expected.is_finite()
            && (actual - expected).abs() <= self.abs + self.rel * expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tolerances() {
        let tol = Tolerance::default();
        assert_eq!(tol.abs(), 1e-8);
        assert_eq!(tol.rel(), 1e-5);
    }

    #[test]
    fn rejects_negative_or_non_finite() {
        assert_eq!(Tolerance::new(-1e-8, 0.0), Err(ToleranceError::Abs));
        assert_eq!(Tolerance::new(f64::NAN, 0.0), Err(ToleranceError::Abs));
        assert_eq!(Tolerance::new(0.0, f64::INFINITY), Err(ToleranceError::Rel));
    }

    #[test]
    fn relative_term_scales_with_expected() {
        let tol = Tolerance::new(0.0, 1e-3).unwrap();

        assert!(tol.is_close(1000.5, 1000.0));
        assert!(!tol.is_close(1.5, 1.0));
    }

    #[test]
    fn non_finite_is_never_close() {
        let tol = Tolerance::new(1.0, 1.0).unwrap();

        assert!(!tol.is_close(f64::NAN, 0.0));
        assert!(!tol.is_close(0.0, f64::NAN));
        assert!(!tol.is_close(f64::INFINITY, f64::INFINITY));
    }
}
