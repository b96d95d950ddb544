//! Standard-normal helpers backed by `statrs`.
//!
//! Every bound in this crate is written in terms of `Φ(-t)` and `φ(t)`; the
//! helpers below keep those call sites short and make the distribution
//! choice a single point of change.
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Standard normal CDF `Φ(x)`.
#[inline]
pub fn cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Standard normal density `φ(x)`.
#[inline]
pub fn pdf(x: f64) -> f64 {
    Normal::standard().pdf(x)
}

/// Upper tail `Φ(-t) = P(Z > t)`.
///
/// Evaluated as `Φ(-t)` rather than `1 - Φ(t)` so large `t` does not cancel
/// to zero.
#[inline]
pub fn upper_tail(t: f64) -> f64 {
    cdf(-t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference values of Φ and φ at a few points.
    // - Precision of the upper tail far from the origin.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check Φ and φ against textbook values.
    //
    // Given
    // -----
    // - x = 0 and x = 1.959963984540054.
    //
    // Expect
    // ------
    // - Φ(0) = 0.5, φ(0) = 1/√(2π), Φ(1.96) ≈ 0.975.
    fn cdf_and_pdf_match_reference_values() {
        assert_relative_eq!(cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(pdf(0.0), 1.0 / (2.0 * std::f64::consts::PI).sqrt(), epsilon = 1e-15);
        assert_relative_eq!(cdf(1.959963984540054), 0.975, epsilon = 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the upper tail keeps relative precision for large t.
    //
    // Given
    // -----
    // - t = 10, where 1 - Φ(t) would round to zero.
    //
    // Expect
    // ------
    // - A strictly positive value close to 7.62e-24.
    fn upper_tail_large_threshold_is_not_cancelled() {
        // Act
        let tail = upper_tail(10.0);

        // Assert
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 7.619853024160527e-24, max_relative = 1e-8);
    }
}
