//! scalar_minimizer — bounded, derivative-free 1-D minimization via argmin.
//!
//! Purpose
//! -------
//! Minimize a scalar objective over a closed interval with Brent's method
//! (golden-section search accelerated by parabolic interpolation), behind a
//! small crate-level API that hides argmin's generic solver/state plumbing.
//!
//! Key behaviors
//! -------------
//! - [`ScalarObjective`] is the user-facing trait; any `Fn(f64) -> f64`
//!   closure implements it.
//! - [`minimize_bounded`] validates the interval, builds an argmin
//!   `BrentOpt`, attaches an `slog` terminal logger when verbose (feature
//!   `obs_slog`), and returns a [`MinimizerOutcome`].
//! - Exhausting the iteration budget is not an error: the best point seen
//!   is returned with `converged == false`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective is unimodal on the interval in practice; Brent's method
//!   then locates its minimum to `3 * (tol_rel * |x| + tol_abs)`.
//! - The bounds themselves are never evaluated.
//! - NaN objective values are treated as `+∞`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover option validation, outcome mapping, the adapter's NaN
//!   handling and error propagation, and convergence on toy objectives.

pub mod adapter;
pub mod api;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

pub use self::api::minimize_bounded;
pub use self::traits::{MinimizerOptions, MinimizerOutcome, ScalarObjective, Tolerances};
pub use self::types::{Cost, FnEvalMap, Param};

pub mod prelude {
    pub use super::api::minimize_bounded;
    pub use super::traits::{MinimizerOptions, MinimizerOutcome, ScalarObjective, Tolerances};
}
