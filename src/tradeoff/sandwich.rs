//! tradeoff::sandwich — the two sides of the Lasso trade-off inequality.
//!
//! Purpose
//! -------
//! Evaluate the left and right members of the sandwich inequality whose
//! crossing point, as a function of the threshold `t`, fixes the minimal
//! false-discovery proportion at a given TPP.
//!
//! Key behaviors
//! -------------
//! - [`left_bound`] depends on the design `(delta, epsi)` only; `tpp` is part
//!   of the signature so both bounds share one calling convention.
//! - [`right_bound`] depends on `tpp` only.
//! - Along the driver's search, `left_bound - right_bound` is positive for
//!   large `t` and turns negative once `t` has passed below the crossing.
//!
//! Invariants & assumptions
//! ------------------------
//! - No domain checks: callers keep `t > 0` so neither denominator
//!   vanishes. IEEE semantics (±∞, NaN) apply otherwise.
//! - Pure functions; no allocation, no side effects.
use crate::tradeoff::gaussian::{pdf, upper_tail};

/// Left member of the sandwich inequality.
///
/// With `Φ̄ = Φ(-t)` and `φ = φ(t)`:
///
/// ```text
///            (1-ε)(2(1+t²)Φ̄ - 2tφ) + ε(1+t²) - δ
/// L(t) = ---------------------------------------
///              ε((1+t²)(1-2Φ̄) + 2tφ)
/// ```
///
/// `_tpp` is unused.
pub fn left_bound(t: f64, _tpp: f64, delta: f64, epsi: f64) -> f64 {
    let tail = upper_tail(t);
    let dens = pdf(t);
    let t_sq = 1.0 + t * t;
    let numerator = (1.0 - epsi) * (2.0 * t_sq * tail - 2.0 * t * dens) + epsi * t_sq - delta;
    let denominator = epsi * (t_sq * (1.0 - 2.0 * tail) + 2.0 * t * dens);
    numerator / denominator
}

/// Right member of the sandwich inequality: `(1 - tpp) / (1 - 2Φ(-t))`.
pub fn right_bound(t: f64, tpp: f64) -> f64 {
    (1.0 - tpp) / (1.0 - 2.0 * upper_tail(t))
}

/// `left_bound - right_bound` at `t`.
///
/// Diagnostic helper; the search itself compares the two members directly.
pub fn bound_gap(t: f64, tpp: f64, delta: f64, epsi: f64) -> f64 {
    left_bound(t, tpp, delta, epsi) - right_bound(t, tpp)
}
