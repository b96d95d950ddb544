//! Execution helper that runs Brent's method on a scalar problem and returns
//! a crate-friendly [`MinimizerOutcome`].
use crate::optimization::{
    errors::OptResult,
    scalar_minimizer::{
        adapter::ArgMinAdapter,
        traits::{MinimizerOptions, MinimizerOutcome, ScalarObjective},
        types::{BrentSolver, ScalarState},
    },
};
use argmin::core::{Executor, State};

/// Run an `argmin` Brent minimization for a scalar problem.
///
/// Wires up the user objective via [`ArgMinAdapter`], the pre-built
/// `solver`, the iteration cap from `opts.tols.max_iter`, and (with the
/// `obs_slog` feature) an `slog` terminal logger when `opts.verbose` is set;
/// then executes the solver and converts the final state into
/// [`MinimizerOutcome`].
///
/// Brent's method keeps its own interval state, so no initial parameter is
/// configured here.
///
/// # Returns
/// The best point seen, even when the iteration budget ran out before the
/// tolerance was met (`converged == false` in that case).
///
/// # Errors
/// - Propagates any `argmin` runtime error (including errors raised by the
///   objective) via `From<argmin::core::Error> for OptError`.
/// - Propagates validation errors from [`MinimizerOutcome::new`].
pub fn run_brent<'a, F>(
    problem: ArgMinAdapter<'a, F>, solver: BrentSolver, opts: &MinimizerOptions,
) -> OptResult<MinimizerOutcome>
where
    F: ScalarObjective,
{
    let max_iter = opts.tols.max_iter as u64;
    #[cfg_attr(not(feature = "obs_slog"), allow(unused_mut))]
    let mut optimizer: Executor<_, _, ScalarState> = Executor::new(problem, solver)
        .configure(|state| state.counting(true).max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = optimizer.run()?;
    let state = result.state();
    MinimizerOutcome::new(
        state.get_best_param().copied(),
        state.get_best_cost(),
        state.get_termination_status(),
        state.get_iter(),
        state.get_func_counts().clone(),
    )
}
