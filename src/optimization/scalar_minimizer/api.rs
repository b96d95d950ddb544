//! High-level entry point for minimizing a `ScalarObjective` over an interval.
//!
//! Builds a Brent solver over `[lower, upper]` with the configured
//! tolerances, wraps the objective in an `ArgMinAdapter`, and delegates the
//! run to `run_brent`.
use crate::optimization::{
    errors::OptResult,
    scalar_minimizer::{
        adapter::ArgMinAdapter,
        run::run_brent,
        traits::{MinimizerOptions, MinimizerOutcome, ScalarObjective},
        types::BrentSolver,
        validation::verify_bounds,
    },
};

/// Minimize `f` over `[lower, upper]` with Brent's method.
///
/// # Behavior
/// - Validates the interval (finite, `lower < upper`).
/// - Never evaluates `f` exactly at either bound.
/// - Returns the best point found; running out of iterations is not an
///   error (see [`MinimizerOutcome::converged`]).
///
/// # Errors
/// - [`OptError::InvalidBounds`](crate::optimization::errors::OptError::InvalidBounds)
///   for an invalid interval.
/// - Any error raised by the objective, unchanged.
///
/// # Example
/// ```
/// use lasso_tradeoff::optimization::scalar_minimizer::{minimize_bounded, MinimizerOptions};
///
/// let f = |x: f64| (x - 2.0).powi(2);
/// let out = minimize_bounded(&f, (0.0, 8.0), &MinimizerOptions::default()).unwrap();
/// assert!((out.x_min - 2.0).abs() < 1e-4);
/// ```
pub fn minimize_bounded<F: ScalarObjective>(
    f: &F, bounds: (f64, f64), opts: &MinimizerOptions,
) -> OptResult<MinimizerOutcome> {
    let (lower, upper) = bounds;
    verify_bounds(lower, upper)?;
    let solver = BrentSolver::new(lower, upper).set_tolerance(opts.tols.tol_rel, opts.tols.tol_abs);
    run_brent(ArgMinAdapter::new(f), solver, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::OptError,
        scalar_minimizer::traits::Tolerances,
    };

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Convergence of Brent's method on smooth unimodal functions.
    // - Best-effort behavior when the iteration budget is exhausted.
    // - Rejection of invalid intervals before any evaluation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a shifted quadratic is minimized to within the tolerance.
    //
    // Given
    // -----
    // - f(x) = (x - 2)² + 1 on [0, 8] with default tolerances.
    //
    // Expect
    // ------
    // - `converged`, x_min ≈ 2 and f_min ≈ 1.
    fn minimize_bounded_quadratic_converges_to_vertex() {
        // Arrange
        let f = |x: f64| (x - 2.0).powi(2) + 1.0;

        // Act
        let out = minimize_bounded(&f, (0.0, 8.0), &MinimizerOptions::default())
            .expect("quadratic should minimize");

        // Assert
        assert!(out.converged, "status: {}", out.status);
        assert!((out.x_min - 2.0).abs() < 1e-4, "x_min = {}", out.x_min);
        assert!((out.f_min - 1.0).abs() < 1e-8, "f_min = {}", out.f_min);
        assert!(out.iterations < 1000);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a minimum sitting at the boundary is approached from inside.
    //
    // Given
    // -----
    // - f(x) = x on [1, 3] (monotone increasing).
    //
    // Expect
    // ------
    // - x_min within 1e-3 of the lower bound and never below it.
    fn minimize_bounded_monotone_function_approaches_lower_bound() {
        // Arrange
        let f = |x: f64| x;

        // Act
        let out = minimize_bounded(&f, (1.0, 3.0), &MinimizerOptions::default())
            .expect("monotone function should minimize");

        // Assert
        assert!(out.x_min >= 1.0);
        assert!(out.x_min - 1.0 < 1e-3, "x_min = {}", out.x_min);
    }

    #[test]
    // Purpose
    // -------
    // Check that exhausting the iteration budget still yields the best
    // point seen instead of an error.
    //
    // Given
    // -----
    // - f(x) = cos(x) on [0, 6] with `max_iter = 2`.
    //
    // Expect
    // ------
    // - `Ok` outcome with `converged == false` and a finite minimizer
    //   inside the interval.
    fn minimize_bounded_budget_exhausted_returns_best_estimate() {
        // Arrange
        let f = |x: f64| x.cos();
        let tols = Tolerances::new(None, None, Some(2)).expect("valid tolerances");
        let opts = MinimizerOptions::new(tols, false);

        // Act
        let out = minimize_bounded(&f, (0.0, 6.0), &opts).expect("best effort result");

        // Assert
        assert!(!out.converged);
        assert!(out.x_min > 0.0 && out.x_min < 6.0);
        assert!(out.f_min.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Ensure the verbose path (terminal logger under `obs_slog`) leaves the
    // result unchanged and that evaluation counters are recorded.
    //
    // Given
    // -----
    // - f(x) = (x - 2)^2 on [0, 8], run once quiet and once verbose.
    //
    // Expect
    // ------
    // - Identical minimizers, `converged == true`, and a positive
    //   `cost_count`.
    fn minimize_bounded_verbose_run_matches_quiet_run() {
        // Arrange
        let f = |x: f64| (x - 2.0).powi(2);
        let quiet = MinimizerOptions::default();
        let verbose = MinimizerOptions::new(Tolerances::default(), true);

        // Act
        let a = minimize_bounded(&f, (0.0, 8.0), &quiet).expect("quiet run");
        let b = minimize_bounded(&f, (0.0, 8.0), &verbose).expect("verbose run");

        // Assert
        assert!(b.converged);
        assert_eq!(a.x_min.to_bits(), b.x_min.to_bits());
        assert_eq!(a.iterations, b.iterations);
        assert!(b.cost_count().is_some_and(|n| n > 0), "counts: {:?}", b.fn_evals);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a reversed interval is rejected.
    //
    // Given
    // -----
    // - Bounds (8, 0).
    //
    // Expect
    // ------
    // - `OptError::InvalidBounds`.
    fn minimize_bounded_reversed_interval_returns_error() {
        // Arrange
        let f = |x: f64| x * x;

        // Act
        let result = minimize_bounded(&f, (8.0, 0.0), &MinimizerOptions::default());

        // Assert
        assert!(matches!(result, Err(OptError::InvalidBounds { .. })), "got {result:?}");
    }
}
