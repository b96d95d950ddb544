//! Validation helpers for bounded scalar minimization.
//!
//! - **Interval checks**: [`verify_bounds`] requires a finite interval with
//!   `lower < upper`.
//! - **Tolerance checks**: [`verify_tol_rel`], [`verify_tol_abs`] ensure
//!   tolerances are finite and strictly positive.
//! - **Iteration budget**: [`verify_max_iter`] rejects a zero budget.
//! - **Minimizer output**: [`validate_minimizer`] ensures the solver produced
//!   a finite best parameter.
use crate::optimization::errors::{OptError, OptResult};

/// Validate the search interval `[lower, upper]`.
///
/// # Errors
/// Returns [`OptError::InvalidBounds`] if either end is non-finite or
/// `lower >= upper`.
pub fn verify_bounds(lower: f64, upper: f64) -> OptResult<()> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(OptError::InvalidBounds { lower, upper, reason: "Bounds must be finite." });
    }
    if lower >= upper {
        return Err(OptError::InvalidBounds {
            lower,
            upper,
            reason: "Lower bound must be strictly below the upper bound.",
        });
    }
    Ok(())
}

/// Validate the relative tolerance on the minimizer location.
///
/// # Errors
/// Returns [`OptError::InvalidTolRel`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_rel(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolRel { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolRel { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the absolute tolerance on the minimizer location.
///
/// # Errors
/// Returns [`OptError::InvalidTolAbs`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_abs(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolAbs { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolAbs { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the evaluation budget.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate and unwrap the best parameter reported by the solver.
///
/// # Errors
/// - [`OptError::MissingMinimizer`] if no parameter was recorded.
/// - [`OptError::InvalidMinimizer`] if the parameter is non-finite.
pub fn validate_minimizer(x_min: Option<f64>) -> OptResult<f64> {
    match x_min {
        Some(x) if x.is_finite() => Ok(x),
        Some(x) => Err(OptError::InvalidMinimizer {
            value: x,
            reason: "Minimizer must be finite.",
        }),
        None => Err(OptError::MissingMinimizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each rejection branch of the option validators.
    // - Unwrapping of the solver's best parameter.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that reversed, degenerate and non-finite intervals are rejected.
    //
    // Given
    // -----
    // - Intervals [8, 0], [1, 1] and [0, ∞).
    //
    // Expect
    // ------
    // - Each returns `OptError::InvalidBounds`; [0, 8] is accepted.
    fn verify_bounds_rejects_invalid_intervals() {
        // Arrange
        let bad = [(8.0, 0.0), (1.0, 1.0), (0.0, f64::INFINITY)];

        // Act & Assert
        for (lower, upper) in bad {
            match verify_bounds(lower, upper) {
                Err(OptError::InvalidBounds { .. }) => (),
                other => panic!("expected InvalidBounds for [{lower}, {upper}], got {other:?}"),
            }
        }
        assert!(verify_bounds(0.0, 8.0).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure tolerances must be finite and strictly positive.
    //
    // Given
    // -----
    // - Relative tolerance 0.0 and absolute tolerance NaN.
    //
    // Expect
    // ------
    // - `InvalidTolRel` and `InvalidTolAbs` respectively.
    fn verify_tolerances_reject_non_positive_and_nan() {
        // Act
        let rel = verify_tol_rel(0.0);
        let abs = verify_tol_abs(f64::NAN);

        // Assert
        assert!(matches!(rel, Err(OptError::InvalidTolRel { .. })), "got {rel:?}");
        assert!(matches!(abs, Err(OptError::InvalidTolAbs { .. })), "got {abs:?}");
    }

    #[test]
    // Purpose
    // -------
    // Check that a zero evaluation budget is rejected.
    //
    // Given
    // -----
    // - `max_iter = 0`.
    //
    // Expect
    // ------
    // - `OptError::InvalidMaxIter { max_iter: 0, .. }`.
    fn verify_max_iter_zero_returns_invalid_max_iter() {
        // Act
        let result = verify_max_iter(0);

        // Assert
        match result {
            Err(OptError::InvalidMaxIter { max_iter, .. }) => assert_eq!(max_iter, 0),
            other => panic!("expected InvalidMaxIter, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify unwrapping of the best parameter.
    //
    // Given
    // -----
    // - `Some(1.2)`, `Some(NaN)` and `None`.
    //
    // Expect
    // ------
    // - `Ok(1.2)`, `InvalidMinimizer`, `MissingMinimizer`.
    fn validate_minimizer_unwraps_or_rejects() {
        // Act & Assert
        assert_eq!(validate_minimizer(Some(1.2)), Ok(1.2));
        assert!(matches!(
            validate_minimizer(Some(f64::NAN)),
            Err(OptError::InvalidMinimizer { .. })
        ));
        assert_eq!(validate_minimizer(None), Err(OptError::MissingMinimizer));
    }
}
