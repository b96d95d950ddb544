//! tradeoff::errors — error type and Python bridge for trade-off routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the phase-transition,
//! max-power and FDR routines, together with a conversion layer to Python
//! exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TradeoffResult`] and [`TradeoffError`] as the canonical result
//!   and error types for this subtree.
//! - Attach human-readable `Display` messages phrased in terms of domain
//!   constraints ("tpp must lie in [0, 1]").
//! - Wrap minimizer failures from [`OptError`] without losing the variant.
//!
//! Invariants & assumptions
//! ------------------------
//! - An infeasible `tpp` is NOT an error: it is reported through
//!   `Tradeoff::Infeasible` (or the sentinel `q = 1`).
//! - Errors are reserved for inputs outside the documented domain, invalid
//!   search configuration, and backend failures.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in `Display` messages and the
//!   `From<OptError>` wrapping.

use crate::optimization::errors::OptError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TradeoffResult<T> = Result<T, TradeoffError>;

/// TradeoffError — error conditions for the Lasso trade-off routines.
///
/// Variants
/// --------
/// - `InvalidTpp { value, reason }`
///   `tpp` is non-finite or outside `[0, 1]`.
/// - `InvalidDelta { value, reason }`
///   `delta` is non-finite or not strictly positive.
/// - `InvalidEpsilon { value, reason }`
///   `epsi` is non-finite or outside `(0, 1]`.
/// - `InvalidThreshold { value, reason }`
///   A threshold `t` handed to the `q` conversion is non-finite or not
///   strictly positive.
/// - `InvalidSearchOption { name, value, reason }`
///   A bracket/bisection setting in `SearchOptions` is unusable.
/// - `Optimization(OptError)`
///   The phase-transition minimizer failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeoffError {
    //------ Input validation errors ------
    InvalidTpp { value: f64, reason: &'static str },
    InvalidDelta { value: f64, reason: &'static str },
    InvalidEpsilon { value: f64, reason: &'static str },
    InvalidThreshold { value: f64, reason: &'static str },

    //------ Configuration errors ------
    InvalidSearchOption { name: &'static str, value: f64, reason: &'static str },

    //------ Backend errors ------
    Optimization(OptError),
}

impl std::error::Error for TradeoffError {}

impl std::fmt::Display for TradeoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeoffError::InvalidTpp { value, reason } => {
                write!(f, "Invalid tpp value: {value}. {reason}")
            }
            TradeoffError::InvalidDelta { value, reason } => {
                write!(f, "Invalid delta value: {value}. {reason}")
            }
            TradeoffError::InvalidEpsilon { value, reason } => {
                write!(f, "Invalid epsilon value: {value}. {reason}")
            }
            TradeoffError::InvalidThreshold { value, reason } => {
                write!(f, "Invalid threshold value: {value}. {reason}")
            }
            TradeoffError::InvalidSearchOption { name, value, reason } => {
                write!(f, "Invalid search option {name} = {value}. {reason}")
            }
            TradeoffError::Optimization(err) => {
                write!(f, "Phase-transition minimization failed: {err}")
            }
        }
    }
}

impl From<OptError> for TradeoffError {
    fn from(err: OptError) -> Self {
        TradeoffError::Optimization(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<TradeoffError> for PyErr {
    fn from(err: TradeoffError) -> PyErr {
        PyValueError::new_err(format!("TradeoffError: {err}"))
    }
}
