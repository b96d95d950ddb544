//! Adapter that exposes a user `ScalarObjective` as an `argmin` problem.
//!
//! NaN objective values are reported to the solver as `+∞`, so Brent's
//! comparisons treat them as "worse than anything seen" and the search
//! moves away from them.
use crate::optimization::scalar_minimizer::{
    traits::ScalarObjective,
    types::{Cost, Param},
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `ScalarObjective` to `argmin`'s `CostFunction`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: ScalarObjective> {
    pub f: &'a F,
}

impl<'a, F: ScalarObjective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Param;
    type Output = Cost;

    /// Evaluate `f(x)`.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(*x)?;
        if output.is_nan() {
            return Ok(f64::INFINITY);
        }
        Ok(output)
    }
}

impl<'a, F: ScalarObjective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `ScalarObjective`.
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }
}
