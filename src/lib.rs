//! lasso_tradeoff — Lasso FDP/TPP trade-off curve with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the trade-off routines to Python via the `_lasso_tradeoff`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing functions, class and submodule used by
//! the `lasso_tradeoff` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`tradeoff` and `optimization`) and the
//!   scalar entry points (`fdr_lasso`, `max_power`, `epsilon_dt`,
//!   `left_bound`, `right_bound`) as the public crate surface.
//! - Define `#[pyfunction]` / `#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer for the `_lasso_tradeoff` Python extension.
//! - Register the `tradeoff` submodule under `lasso_tradeoff` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue and error mapping.
//! - Python-visible functions keep the scalar conventions of their Rust
//!   counterparts (sentinel `1.0` for infeasible input in `fdrlasso`).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as `TradeoffError` internally
//!   and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `tradeoff` directly and can ignore the
//!   PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_tradeoff_pipeline.rs`.
//! - The PyO3 layer is exercised from Python; Rust tests do not link the
//!   Python C API.

pub mod optimization;
pub mod tradeoff;

pub use crate::optimization::scalar_minimizer::MinimizerOptions;
pub use crate::tradeoff::{
    epsilon_dt, fdr_lasso, left_bound, max_power, right_bound, FdrLasso, SearchOptions,
    SearchPhase, Tradeoff, TradeoffError, TradeoffPoint, TradeoffResult,
};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// fdrlasso — minimal Lasso FDP at a target TPP (Python entry point).
///
/// Returns `1.0` for infeasible `tpp` and `0.0` for `tpp == 0`; a positive
/// `verbose` prints diagnostics to stderr.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(tpp, delta, epsi, /, verbose=0)",
    signature = (tpp, delta, epsi, verbose = 0)
)]
pub fn fdrlasso(tpp: f64, delta: f64, epsi: f64, verbose: u32) -> PyResult<f64> {
    Ok(fdr_lasso(tpp, delta, epsi, verbose)?)
}

/// Maximum achievable TPP at `(delta, epsilon)`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "powermax")]
pub fn py_powermax(delta: f64, epsilon: f64) -> PyResult<f64> {
    Ok(max_power(delta, epsilon)?)
}

/// Donoho–Tanner critical sparsity for `delta`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "epsilon_dt")]
pub fn py_epsilon_dt(delta: f64) -> PyResult<f64> {
    Ok(epsilon_dt(delta)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn lsandwich(t: f64, tpp: f64, delta: f64, epsi: f64) -> f64 {
    left_bound(t, tpp, delta, epsi)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn rsandwich(t: f64, tpp: f64) -> f64 {
    right_bound(t, tpp)
}

/// LassoTradeoff — Python-facing wrapper for a single trade-off evaluation.
///
/// Purpose
/// -------
/// Run [`FdrLasso::solve`] with default settings and expose the tagged
/// outcome as read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `LassoTradeoff(tpp, delta, epsi)`.
///
/// Fields
/// ------
/// - `inner`: [`Tradeoff`]
///   Tagged outcome of the evaluation.
/// - `max_power`: `f64`
///   Maximum power at `(delta, epsi)`.
///
/// Notes
/// -----
/// - `q`, `threshold` and `phase` are `None` for infeasible input.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "lasso_tradeoff.tradeoff")]
pub struct LassoTradeoff {
    inner: Tradeoff,
    max_power: f64,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LassoTradeoff {
    #[new]
    #[pyo3(text_signature = "(tpp, delta, epsi)")]
    pub fn new(tpp: f64, delta: f64, epsi: f64) -> PyResult<LassoTradeoff> {
        let inner = FdrLasso::default().solve(tpp, delta, epsi)?;
        let max_power = match inner {
            Tradeoff::Infeasible { max_power, .. } => max_power,
            Tradeoff::Feasible(point) => point.max_power,
        };
        Ok(LassoTradeoff { inner, max_power })
    }

    /// Minimal FDP, or `None` when `tpp` is infeasible.
    #[getter]
    pub fn q(&self) -> Option<f64> {
        self.inner.q()
    }

    #[getter]
    pub fn feasible(&self) -> bool {
        self.inner.is_feasible()
    }

    #[getter]
    pub fn max_power(&self) -> f64 {
        self.max_power
    }

    /// Crossing threshold `t`; `None` when infeasible or `tpp == 0`.
    #[getter]
    pub fn threshold(&self) -> Option<f64> {
        self.inner.point().and_then(|p| p.threshold)
    }

    /// Search stage that produced the threshold.
    #[getter]
    pub fn phase(&self) -> Option<&'static str> {
        self.inner.point().map(|p| p.phase.as_str())
    }

    fn __repr__(&self) -> String {
        match self.inner {
            Tradeoff::Feasible(p) => {
                format!("LassoTradeoff(tpp={}, q={}, phase='{}')", p.tpp, p.q, p.phase)
            }
            Tradeoff::Infeasible { tpp, max_power } => {
                format!("LassoTradeoff(tpp={tpp}, infeasible, max_power={max_power})")
            }
        }
    }
}

/// _lasso_tradeoff — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_lasso_tradeoff` Python module and register the `tradeoff`
/// submodule used by the public `lasso_tradeoff` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _lasso_tradeoff<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let tradeoff_mod = PyModule::new(_py, "tradeoff")?;
    tradeoff_module(_py, m, &tradeoff_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("lasso_tradeoff.tradeoff", tradeoff_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn tradeoff_module<'py>(
    _py: Python, lasso_tradeoff: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fdrlasso, m)?)?;
    m.add_function(wrap_pyfunction!(py_powermax, m)?)?;
    m.add_function(wrap_pyfunction!(py_epsilon_dt, m)?)?;
    m.add_function(wrap_pyfunction!(lsandwich, m)?)?;
    m.add_function(wrap_pyfunction!(rsandwich, m)?)?;
    m.add_class::<LassoTradeoff>()?;
    lasso_tradeoff.add_submodule(m)?;
    Ok(())
}
