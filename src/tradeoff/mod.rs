//! tradeoff — Lasso FDP/TPP trade-off in the proportional regime.
//!
//! Purpose
//! -------
//! Compute the minimal asymptotic false-discovery proportion of the Lasso at
//! a target true-positive proportion, for a design with `delta = n/p` and
//! `epsi = k/p`, together with the quantities it depends on: the
//! Donoho–Tanner critical sparsity and the maximum achievable power.
//!
//! Key behaviors
//! -------------
//! - [`epsilon_dt`] locates the phase transition with a bounded Brent
//!   search (see `optimization::scalar_minimizer`).
//! - [`max_power`] gives the largest feasible TPP at `(delta, epsi)`.
//! - [`left_bound`] / [`right_bound`] are the two members of the sandwich
//!   inequality whose crossing fixes the threshold `t`.
//! - [`FdrLasso::solve`] returns a tagged [`Tradeoff`]; [`fdr_lasso`] keeps
//!   the scalar convention (`1` for infeasible, `0` for `tpp == 0`).
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 ≤ tpp ≤ 1`, `delta > 0`, `0 < epsi ≤ 1`, all finite; anything else is
//!   a [`TradeoffError`].
//! - Infeasibility and failed bracketing are outcomes, not errors.
//! - Pure and reentrant; nothing is printed unless `verbose` is set.
//!
//! Conventions
//! -----------
//! - Every fallible routine returns [`TradeoffResult`].
//! - Option structs ([`SearchOptions`], `MinimizerOptions`) are validated at
//!   construction and have `Default` impls matching the published search constants.
//!
//! Downstream usage
//! ----------------
//! - The crate root re-exports the scalar entry points; the Python bindings
//!   wrap `fdr_lasso`, `max_power`, `epsilon_dt`, the sandwich bounds and
//!   `FdrLasso::solve`.
//!
//! Testing notes
//! -------------
//! - Each submodule pins reference values in its own unit tests; the
//!   end-to-end pipeline is covered in `tests/integration_tradeoff_pipeline.rs`.

pub mod errors;
pub mod fdr_lasso;
pub mod gaussian;
pub mod options;
pub mod phase_transition;
pub mod power;
pub mod sandwich;
pub mod validation;

pub use self::errors::{TradeoffError, TradeoffResult};
pub use self::fdr_lasso::{
    fdr_at_threshold, fdr_lasso, FdrLasso, SearchPhase, Tradeoff, TradeoffPoint,
    INFEASIBLE_SENTINEL,
};
pub use self::options::SearchOptions;
pub use self::phase_transition::{epsilon_dt, epsilon_dt_with, PhaseTransition};
pub use self::power::{max_power, max_power_with};
pub use self::sandwich::{bound_gap, left_bound, right_bound};

pub mod prelude {
    pub use super::errors::{TradeoffError, TradeoffResult};
    pub use super::fdr_lasso::{fdr_lasso, FdrLasso, SearchPhase, Tradeoff, TradeoffPoint};
    pub use super::options::SearchOptions;
    pub use super::phase_transition::epsilon_dt;
    pub use super::power::max_power;
}
