//! Public API surface for bounded scalar minimization.
//!
//! - [`ScalarObjective`]: trait users implement for their one-dimensional
//!   objective.
//! - [`MinimizerOptions`] and [`Tolerances`]: configuration for the solver.
//! - [`MinimizerOutcome`]: normalized result returned by
//!   [`minimize_bounded`](super::api::minimize_bounded).
//!
//! Convention: objectives are *minimized* directly. Callers that want a
//! maximum negate their function, as the phase-transition search does.
use crate::optimization::{
    errors::OptResult,
    scalar_minimizer::{
        types::{Cost, FnEvalMap, Param, DEFAULT_MAX_ITER, DEFAULT_TOL_ABS, DEFAULT_TOL_REL},
        validation::{validate_minimizer, verify_max_iter, verify_tol_abs, verify_tol_rel},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented scalar objective.
///
/// - `value(x) -> OptResult<Cost>`: evaluate `f(x)`. Return a descriptive
///   `OptError` for inputs the objective cannot handle; the error aborts the
///   run and is returned unchanged by the minimizer.
pub trait ScalarObjective {
    fn value(&self, x: Param) -> OptResult<Cost>;
}

impl<F> ScalarObjective for F
where
    F: Fn(Param) -> Cost,
{
    fn value(&self, x: Param) -> OptResult<Cost> {
        Ok(self(x))
    }
}

/// Stopping rules for Brent's method.
///
/// The solver stops once the minimizer is located to within
/// `3 * (tol_rel * |x| + tol_abs)`, or after `max_iter` iterations
/// (one objective evaluation each).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_rel: f64,
    pub tol_abs: f64,
    pub max_iter: usize,
}

impl Tolerances {
    /// Construct validated tolerances; `None` fields take their defaults
    /// (`√ε`, `1e-5`, `1000`).
    ///
    /// # Errors
    /// - [`OptError::InvalidTolRel`](crate::optimization::errors::OptError::InvalidTolRel) /
    ///   [`OptError::InvalidTolAbs`](crate::optimization::errors::OptError::InvalidTolAbs)
    ///   for non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`](crate::optimization::errors::OptError::InvalidMaxIter)
    ///   if `max_iter == 0`.
    pub fn new(
        tol_rel: Option<f64>, tol_abs: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        let tol_rel = tol_rel.unwrap_or(DEFAULT_TOL_REL);
        let tol_abs = tol_abs.unwrap_or(DEFAULT_TOL_ABS);
        let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
        verify_tol_rel(tol_rel)?;
        verify_tol_abs(tol_abs)?;
        verify_max_iter(max_iter)?;
        Ok(Self { tol_rel, tol_abs, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_rel: DEFAULT_TOL_REL, tol_abs: DEFAULT_TOL_ABS, max_iter: DEFAULT_MAX_ITER }
    }
}

/// Minimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — stopping rules.
/// - `verbose: bool` — if `true` and the `obs_slog` feature is enabled, an
///   `slog` terminal logger records every iteration.
///
/// Default: default tolerances, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinimizerOptions {
    pub tols: Tolerances,
    pub verbose: bool,
}

impl MinimizerOptions {
    pub fn new(tols: Tolerances, verbose: bool) -> Self {
        Self { tols, verbose }
    }
}

/// Canonical result returned by `minimize_bounded`.
///
/// - `x_min`: best parameter found.
/// - `f_min`: objective value at `x_min`.
/// - `converged`: `true` only when the solver met its tolerance; hitting the
///   iteration budget leaves `converged == false` but still reports the
///   best point seen.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of solver iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizerOutcome {
    pub x_min: Param,
    pub f_min: Cost,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl MinimizerOutcome {
    /// Build a validated [`MinimizerOutcome`] from raw solver state.
    ///
    /// # Errors
    /// Propagates the `validate_minimizer` error when the state holds no
    /// finite best parameter.
    pub fn new(
        x_min_opt: Option<Param>, f_min: Cost, termination: &TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let x_min = validate_minimizer(x_min_opt)?;
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        );
        let status = match termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => reason.text().to_string(),
        };
        Ok(Self { x_min, f_min, converged, status, iterations: iterations as usize, fn_evals })
    }

    /// Number of objective evaluations, if argmin reported it.
    pub fn cost_count(&self) -> Option<u64> {
        self.fn_evals.get("cost_count").copied()
    }
}
