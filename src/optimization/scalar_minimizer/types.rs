//! scalar_minimizer::types — numeric aliases, defaults, and solver wiring.
//!
//! Centralizes the scalar parameter/cost aliases, the argmin state and solver
//! types they instantiate, and the default stopping rules, so the rest of
//! the minimizer stays agnostic to argmin generics.
use argmin::{core::IterState, solver::brent::BrentOpt};
use std::collections::HashMap;

/// Scalar parameter `x` searched over a bounded interval.
pub type Param = f64;

/// Scalar objective value `f(x)` being minimized.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// argmin iteration state for a gradient-free scalar problem.
pub type ScalarState = IterState<Param, (), (), (), (), Cost>;

/// Brent's bounded minimizer specialized to this crate's numeric types.
pub type BrentSolver = BrentOpt<Cost>;

/// Default evaluation budget for a bounded minimization.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Default absolute tolerance on the minimizer location.
pub const DEFAULT_TOL_ABS: f64 = 1e-5;

/// Default relative tolerance on the minimizer location (√ε of `f64`).
pub const DEFAULT_TOL_REL: f64 = 1.490_116_119_384_765_6e-8;
