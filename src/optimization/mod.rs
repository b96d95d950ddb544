//! optimization — argmin-backed scalar minimization and its error surface.
//!
//! Purpose
//! -------
//! Provide the bounded 1-D minimizer used to locate the Donoho–Tanner phase
//! transition, together with a single error/result surface. Callers supply
//! an objective and tolerances and obtain the minimizer plus diagnostics
//! without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing scalar objectives** over an
//!   interval (`scalar_minimizer`), including configuration of stopping
//!   criteria and verbose tracing.
//! - Normalize configuration issues, invalid solver output, and backend
//!   solver errors into a single enum (`errors::OptError`) with a common
//!   result alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw argmin errors.
//! - Nothing in this module prints unless `verbose` is requested, in which
//!   case the `obs_slog` feature attaches `argmin_observer_slog::SlogLogger`
//!   to trace iterations on the terminal.
//!
//! Downstream usage
//! ----------------
//! - `tradeoff::phase_transition` implements `ScalarObjective` for the
//!   negated phase-transition curve and calls `minimize_bounded` on
//!   `[0, 8]`.
//! - Front-ends may import the curated surface via
//!   `optimization::prelude::*`.

pub mod errors;
pub mod scalar_minimizer;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::scalar_minimizer::prelude::*;
}
