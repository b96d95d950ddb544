//! tradeoff::phase_transition — Donoho–Tanner critical sparsity.
//!
//! Purpose
//! -------
//! Compute `ε*(δ)`, the sparsity level below which the Lasso achieves full
//! power asymptotically, as the maximum over `α ∈ [0, 8]` of
//!
//! ```text
//!          1 + (2/δ)αφ(α) - (2/δ)(1+α²)Φ(-α)
//! g(α) = ------------------------------------- · δ
//!         1 + α² - 2(1+α²)Φ(-α) + 2αφ(α)
//! ```
//!
//! The maximum is located by minimizing `-g` with the bounded Brent
//! minimizer from `optimization::scalar_minimizer`.
//!
//! Key behaviors
//! -------------
//! - [`epsilon_dt`] uses the default minimizer configuration (1000
//!   iterations, `tol_abs = 1e-5`, `tol_rel = √ε`).
//! - [`epsilon_dt_with`] accepts custom [`MinimizerOptions`] and returns a
//!   [`PhaseTransition`] carrying the maximizer `α*` and the minimizer
//!   diagnostics alongside `ε*`.
//! - Running out of iterations is not an error; the best `α` seen is used.
//!
//! Invariants & assumptions
//! ------------------------
//! - `delta` is finite and `> 0`; otherwise `TradeoffError::InvalidDelta`.
//! - The endpoints 0 and 8 are never evaluated.
//!
//! Downstream usage
//! ----------------
//! - `tradeoff::power` calls this once per `max_power` evaluation when
//!   `delta < 1`.
use crate::{
    optimization::{
        errors::OptResult,
        scalar_minimizer::{minimize_bounded, MinimizerOptions, MinimizerOutcome, ScalarObjective},
    },
    tradeoff::{
        errors::TradeoffResult,
        gaussian::{pdf, upper_tail},
        validation::validate_delta,
    },
};

/// Search interval for the maximizer `α*`.
pub const ALPHA_BOUNDS: (f64, f64) = (0.0, 8.0);

/// Negated phase-transition curve `-g(α)` for a fixed `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTransitionCurve {
    pub delta: f64,
}

impl PhaseTransitionCurve {
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }

    /// Evaluate `-g(α)`.
    pub fn neg_value(&self, alpha: f64) -> f64 {
        let delta = self.delta;
        let tail = upper_tail(alpha);
        let dens = pdf(alpha);
        let a_sq = 1.0 + alpha * alpha;
        let numerator = 1.0 + 2.0 / delta * alpha * dens - 2.0 / delta * a_sq * tail;
        let denominator = a_sq - 2.0 * a_sq * tail + 2.0 * alpha * dens;
        -numerator / denominator * delta
    }
}

impl ScalarObjective for PhaseTransitionCurve {
    fn value(&self, alpha: f64) -> OptResult<f64> {
        Ok(self.neg_value(alpha))
    }
}

/// Result of a phase-transition search.
///
/// - `alpha`: maximizer `α*` of the curve.
/// - `epsilon`: `ε*(δ) = g(α*)`.
/// - `outcome`: raw minimizer diagnostics (convergence, iterations, status).
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTransition {
    pub alpha: f64,
    pub epsilon: f64,
    pub outcome: MinimizerOutcome,
}

/// Donoho–Tanner critical sparsity `ε*(δ)` with the default minimizer.
///
/// # Errors
/// - `TradeoffError::InvalidDelta` if `delta` is non-finite or `≤ 0`.
/// - `TradeoffError::Optimization` on a backend failure.
///
/// # Example
/// ```
/// let eps = lasso_tradeoff::epsilon_dt(0.3).unwrap();
/// assert!((eps - 0.0872353).abs() < 1e-6);
/// ```
pub fn epsilon_dt(delta: f64) -> TradeoffResult<f64> {
    Ok(epsilon_dt_with(delta, &MinimizerOptions::default())?.epsilon)
}

/// Donoho–Tanner critical sparsity with explicit minimizer options.
///
/// # Errors
/// Same as [`epsilon_dt`].
pub fn epsilon_dt_with(delta: f64, opts: &MinimizerOptions) -> TradeoffResult<PhaseTransition> {
    validate_delta(delta)?;
    let curve = PhaseTransitionCurve::new(delta);
    let outcome = minimize_bounded(&curve, ALPHA_BOUNDS, opts)?;
    Ok(PhaseTransition { alpha: outcome.x_min, epsilon: -outcome.f_min, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{optimization::scalar_minimizer::Tolerances, tradeoff::errors::TradeoffError};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference values of ε*(δ) and α* over a range of δ.
    // - Monotonicity of ε* in δ.
    // - Rejection of invalid δ and best-effort behavior under a tiny budget.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the canonical reference point.
    //
    // Given
    // -----
    // - delta = 0.3 with default options.
    //
    // Expect
    // ------
    // - ε* ≈ 0.0872353 (1e-6), α* ≈ 1.1924 (1e-3), converged.
    fn epsilon_dt_with_reference_delta_matches_golden_value() {
        // Act
        let pt = epsilon_dt_with(0.3, &MinimizerOptions::default()).expect("valid delta");

        // Assert
        assert_relative_eq!(pt.epsilon, 0.08723531047390837, epsilon = 1e-6);
        assert_relative_eq!(pt.alpha, 1.19241, epsilon = 1e-3);
        assert!(pt.outcome.converged, "status: {}", pt.outcome.status);
    }

    #[test]
    // Purpose
    // -------
    // Verify further reference values and that ε* increases with δ.
    //
    // Given
    // -----
    // - delta ∈ {0.1, 0.5, 0.8, 0.99}.
    //
    // Expect
    // ------
    // - Values within 1e-6 of the references, strictly increasing.
    fn epsilon_dt_increases_with_delta() {
        // Arrange
        let cases = [
            (0.1, 0.01894293677596534),
            (0.5, 0.1928448330906247),
            (0.8, 0.45865065391076254),
            (0.99, 0.8748777163955018),
        ];

        // Act & Assert
        let mut prev = 0.0;
        for (delta, expected) in cases {
            let eps = epsilon_dt(delta).expect("valid delta");
            assert_relative_eq!(eps, expected, epsilon = 1e-6);
            assert!(eps > prev, "ε* should increase: {prev} then {eps}");
            prev = eps;
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure δ outside the domain is rejected before minimization.
    //
    // Given
    // -----
    // - delta ∈ {0, -0.5, NaN}.
    //
    // Expect
    // ------
    // - `TradeoffError::InvalidDelta`.
    fn epsilon_dt_invalid_delta_returns_error() {
        for delta in [0.0, -0.5, f64::NAN] {
            let result = epsilon_dt(delta);
            assert!(
                matches!(result, Err(TradeoffError::InvalidDelta { .. })),
                "delta = {delta}: {result:?}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Check that a tiny iteration budget yields a usable estimate rather
    // than an error.
    //
    // Given
    // -----
    // - delta = 0.3 with `max_iter = 3`.
    //
    // Expect
    // ------
    // - `Ok` with `converged == false`, α* inside (0, 8) and a finite ε*.
    fn epsilon_dt_with_tiny_budget_returns_best_estimate() {
        // Arrange
        let tols = Tolerances::new(None, None, Some(3)).expect("valid tolerances");
        let opts = MinimizerOptions::new(tols, false);

        // Act
        let pt = epsilon_dt_with(0.3, &opts).expect("best effort");

        // Assert
        assert!(!pt.outcome.converged);
        assert!(pt.alpha > 0.0 && pt.alpha < 8.0);
        assert!(pt.epsilon.is_finite() && pt.epsilon > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the objective is the negation of the curve maximum.
    //
    // Given
    // -----
    // - The curve for delta = 0.3 at α* from the default search.
    //
    // Expect
    // ------
    // - `neg_value(α*) == -ε*` and nearby points give larger values.
    fn phase_transition_curve_has_minimum_at_alpha_star() {
        // Arrange
        let pt = epsilon_dt_with(0.3, &MinimizerOptions::default()).expect("valid delta");
        let curve = PhaseTransitionCurve::new(0.3);

        // Act
        let at = curve.neg_value(pt.alpha);

        // Assert
        assert_relative_eq!(at, -pt.epsilon, epsilon = 1e-15);
        assert!(curve.neg_value(pt.alpha - 0.1) > at);
        assert!(curve.neg_value(pt.alpha + 0.1) > at);
    }
}
