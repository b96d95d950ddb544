//! tradeoff::validation — documented-domain guards for trade-off inputs.
//!
//! Purpose
//! -------
//! Centralize the domain checks on `tpp`, `delta` and `epsi` so every public
//! entry point rejects the same inputs with the same messages.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 ≤ tpp ≤ 1`.
//! - `delta > 0` (values ≥ 1 are valid and mean "always feasible").
//! - `0 < epsi ≤ 1`.
//! - All three must be finite.
//! - A threshold passed to the public `q` conversion is finite and `> 0`.
//!
//! Conventions
//! -----------
//! - Validation only; no numerical work happens here. Feasibility of `tpp`
//!   against the maximum power is decided by the driver, not here.

use crate::tradeoff::errors::{TradeoffError, TradeoffResult};

/// Check that `delta` is finite and strictly positive.
///
/// # Errors
/// `TradeoffError::InvalidDelta` with the offending value.
pub fn validate_delta(delta: f64) -> TradeoffResult<()> {
    if !delta.is_finite() {
        return Err(TradeoffError::InvalidDelta { value: delta, reason: "Must be finite." });
    }
    if delta <= 0.0 {
        return Err(TradeoffError::InvalidDelta { value: delta, reason: "Must be positive." });
    }
    Ok(())
}

/// Check that `epsi` is finite and in `(0, 1]`.
///
/// # Errors
/// `TradeoffError::InvalidEpsilon` with the offending value.
pub fn validate_epsilon(epsi: f64) -> TradeoffResult<()> {
    if !epsi.is_finite() {
        return Err(TradeoffError::InvalidEpsilon { value: epsi, reason: "Must be finite." });
    }
    if epsi <= 0.0 || epsi > 1.0 {
        return Err(TradeoffError::InvalidEpsilon {
            value: epsi,
            reason: "Must satisfy 0 < epsilon ≤ 1.",
        });
    }
    Ok(())
}

/// Check that `tpp` is finite and in `[0, 1]`.
///
/// # Errors
/// `TradeoffError::InvalidTpp` with the offending value.
pub fn validate_tpp(tpp: f64) -> TradeoffResult<()> {
    if !tpp.is_finite() {
        return Err(TradeoffError::InvalidTpp { value: tpp, reason: "Must be finite." });
    }
    if !(0.0..=1.0).contains(&tpp) {
        return Err(TradeoffError::InvalidTpp { value: tpp, reason: "Must lie in [0, 1]." });
    }
    Ok(())
}

/// Check that a threshold `t` is finite and strictly positive.
///
/// # Errors
/// `TradeoffError::InvalidThreshold` with the offending value.
pub fn validate_threshold(t: f64) -> TradeoffResult<()> {
    if !t.is_finite() {
        return Err(TradeoffError::InvalidThreshold { value: t, reason: "Must be finite." });
    }
    if t <= 0.0 {
        return Err(TradeoffError::InvalidThreshold { value: t, reason: "Must be positive." });
    }
    Ok(())
}

/// Validate the full `(tpp, delta, epsi)` triple, in that order.
///
/// # Errors
/// The first failing check among [`validate_tpp`], [`validate_delta`] and
/// [`validate_epsilon`].
pub fn validate_input(tpp: f64, delta: f64, epsi: f64) -> TradeoffResult<()> {
    validate_tpp(tpp)?;
    validate_delta(delta)?;
    validate_epsilon(epsi)
}
