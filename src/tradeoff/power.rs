//! Maximum achievable true-positive proportion `u*(δ, ε)`.
//!
//! Above the Donoho–Tanner transition (`ε > ε*(δ)` with `δ < 1`) the Lasso
//! cannot reach full power; any `tpp` beyond `u*` is infeasible and the
//! trade-off driver reports it as such.
use crate::{
    optimization::scalar_minimizer::MinimizerOptions,
    tradeoff::{
        errors::TradeoffResult,
        phase_transition::epsilon_dt_with,
        validation::{validate_delta, validate_epsilon},
    },
};

/// Maximum power with the default minimizer configuration.
///
/// - `delta ≥ 1` → `1`.
/// - `epsilon ≤ ε*(delta)` → `1`.
/// - otherwise `(ε - ε*)(δ - ε*) / ε / (1 - ε*) + ε*/ε`.
///
/// # Errors
/// `InvalidDelta` / `InvalidEpsilon` for out-of-domain inputs, and
/// `Optimization` if the phase-transition search fails.
pub fn max_power(delta: f64, epsilon: f64) -> TradeoffResult<f64> {
    max_power_with(delta, epsilon, &MinimizerOptions::default())
}

/// Maximum power with explicit minimizer options for the `ε*` search.
///
/// # Errors
/// Same as [`max_power`].
pub fn max_power_with(delta: f64, epsilon: f64, opts: &MinimizerOptions) -> TradeoffResult<f64> {
    validate_delta(delta)?;
    validate_epsilon(epsilon)?;
    if delta >= 1.0 {
        return Ok(1.0);
    }

    let eps_star = epsilon_dt_with(delta, opts)?.epsilon;
    if epsilon <= eps_star {
        return Ok(1.0);
    }
    Ok((epsilon - eps_star) * (delta - eps_star) / epsilon / (1.0 - eps_star) + eps_star / epsilon)
}
