//! optimization::errors — error surface for the scalar minimizer.
//!
//! Configuration mistakes (bounds, tolerances, iteration budget), invalid
//! solver output, and backend `argmin` failures are all normalized into
//! [`OptError`] so callers never see raw `argmin::core::Error` values.
use argmin::core::{ArgminError, Error};

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Options ----
    /// Search interval must be finite with lower < upper.
    InvalidBounds {
        lower: f64,
        upper: f64,
        reason: &'static str,
    },
    /// Relative tolerance needs to be positive and finite.
    InvalidTolRel {
        tol: f64,
        reason: &'static str,
    },
    /// Absolute tolerance needs to be positive and finite.
    InvalidTolAbs {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Objective could not be evaluated at `x`.
    ObjectiveFailed {
        x: f64,
        reason: &'static str,
    },

    // ---- Optimizer outcome ----
    /// Minimizer must be finite.
    InvalidMinimizer {
        value: f64,
        reason: &'static str,
    },
    /// Solver state carried no best parameter.
    MissingMinimizer,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Options ----
            OptError::InvalidBounds { lower, upper, reason } => {
                write!(f, "Invalid search interval [{lower}, {upper}]: {reason}")
            }
            OptError::InvalidTolRel { tol, reason } => {
                write!(f, "Invalid relative tolerance {tol}: {reason}")
            }
            OptError::InvalidTolAbs { tol, reason } => {
                write!(f, "Invalid absolute tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Objective ----
            OptError::ObjectiveFailed { x, reason } => {
                write!(f, "Objective evaluation failed at x = {x}: {reason}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidMinimizer { value, reason } => {
                write!(f, "Invalid minimizer {value}: {reason}")
            }
            OptError::MissingMinimizer => {
                write!(f, "Missing minimizer (best parameter)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Objective errors travel through argmin wrapped in `Error`.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(format!("OptError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for option and outcome errors.
    // - Conversion of argmin backend errors into `OptError`, including the
    //   round trip of an `OptError` raised inside an objective.
    //
    // They intentionally DO NOT cover:
    // - The `From<OptError> for PyErr` conversion (needs the Python C API).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `OptError::InvalidBounds` reports both interval ends.
    //
    // Given
    // -----
    // - Bounds (8, 0) with a reason string.
    //
    // Expect
    // ------
    // - The message contains "[8, 0]" and the reason.
    fn opt_error_invalid_bounds_includes_interval_in_display() {
        // Arrange
        let err = OptError::InvalidBounds { lower: 8.0, upper: 0.0, reason: "lower >= upper" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("[8, 0]"), "Display should include bounds.\nGot: {msg}");
        assert!(msg.contains("lower >= upper"), "Display should include reason.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an `OptError` raised inside an argmin cost function comes
    // back unchanged after the round trip through `argmin::core::Error`.
    //
    // Given
    // -----
    // - `OptError::ObjectiveFailed` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from` returns the original variant and payload.
    fn opt_error_from_argmin_error_recovers_objective_error() {
        // Arrange
        let original = OptError::ObjectiveFailed { x: 1.5, reason: "domain" };
        let wrapped: Error = original.clone().into();

        // Act
        let recovered = OptError::from(wrapped);

        // Assert
        assert_eq!(recovered, original);
    }

    #[test]
    // Purpose
    // -------
    // Check that argmin's own error enum maps onto the matching wrapper.
    //
    // Given
    // -----
    // - `ArgminError::InvalidParameter` wrapped as `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::InvalidParameter` carrying the original text.
    fn opt_error_from_argmin_invalid_parameter_maps_variant() {
        // Arrange
        let wrapped: Error = ArgminError::InvalidParameter { text: "bad bound".to_string() }.into();

        // Act
        let err = OptError::from(wrapped);

        // Assert
        match err {
            OptError::InvalidParameter { text } => assert_eq!(text, "bad bound"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
