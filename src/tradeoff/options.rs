//! Search configuration for the FDR trade-off driver.
//!
//! The defaults are the published constants of the Su–Bogdan–Candès search:
//! a coarse step of 0.1, a single 100× finer retry, an initial upper
//! threshold of at least 10 and a bisection tolerance of 1e-6.
//! `max_bisection_iters` is an extra ceiling that the default tolerance
//! never reaches (17 halvings close a coarse bracket). `max_scan_iters`
//! caps each bracket scan; the default covers a full fine scan from the
//! minimum upper threshold (10 / 0.001 = 10⁴ steps) with room to spare.
use crate::tradeoff::errors::{TradeoffError, TradeoffResult};

pub const DEFAULT_COARSE_STEP: f64 = 0.1;
pub const DEFAULT_REFINE_FACTOR: f64 = 100.0;
pub const DEFAULT_MIN_UPPER: f64 = 10.0;
pub const DEFAULT_BISECTION_TOL: f64 = 1e-6;
pub const DEFAULT_MAX_BISECTION_ITERS: usize = 200;
pub const DEFAULT_MAX_SCAN_ITERS: usize = 100_000;

/// Bracket-search and bisection settings.
///
/// Fields:
/// - `coarse_step` — downward step of the first bracket search.
/// - `refine_factor` — the fine search steps by `coarse_step / refine_factor`.
/// - `min_upper` — lower limit on the initial upper threshold
///   `max(min_upper, sqrt(delta / epsi / tpp) + 1)`.
/// - `bisection_tol` — bisection stops once `tmax - tmin ≤ bisection_tol`.
/// - `max_bisection_iters` — hard cap on bisection steps.
/// - `max_scan_iters` — hard cap on the steps of each bracket scan.
/// - `verbose` — report infeasible inputs and failed bracketing on stderr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub coarse_step: f64,
    pub refine_factor: f64,
    pub min_upper: f64,
    pub bisection_tol: f64,
    pub max_bisection_iters: usize,
    pub max_scan_iters: usize,
    pub verbose: bool,
}

impl SearchOptions {
    /// Construct validated search options; `None` fields take their defaults.
    ///
    /// # Rules
    /// - `coarse_step`, `min_upper` and `bisection_tol` must be finite and
    ///   strictly positive.
    /// - `refine_factor` must be finite and `≥ 1`.
    /// - `max_bisection_iters` and `max_scan_iters` must be `> 0`.
    ///
    /// # Errors
    /// `TradeoffError::InvalidSearchOption` naming the first offending field.
    pub fn new(
        coarse_step: Option<f64>, refine_factor: Option<f64>, min_upper: Option<f64>,
        bisection_tol: Option<f64>, max_bisection_iters: Option<usize>,
        max_scan_iters: Option<usize>, verbose: bool,
    ) -> TradeoffResult<Self> {
        let coarse_step = coarse_step.unwrap_or(DEFAULT_COARSE_STEP);
        let refine_factor = refine_factor.unwrap_or(DEFAULT_REFINE_FACTOR);
        let min_upper = min_upper.unwrap_or(DEFAULT_MIN_UPPER);
        let bisection_tol = bisection_tol.unwrap_or(DEFAULT_BISECTION_TOL);
        let max_bisection_iters = max_bisection_iters.unwrap_or(DEFAULT_MAX_BISECTION_ITERS);
        let max_scan_iters = max_scan_iters.unwrap_or(DEFAULT_MAX_SCAN_ITERS);

        verify_positive("coarse_step", coarse_step)?;
        verify_positive("min_upper", min_upper)?;
        verify_positive("bisection_tol", bisection_tol)?;
        if !refine_factor.is_finite() || refine_factor < 1.0 {
            return Err(TradeoffError::InvalidSearchOption {
                name: "refine_factor",
                value: refine_factor,
                reason: "Must be finite and at least 1.",
            });
        }
        verify_nonzero("max_bisection_iters", max_bisection_iters)?;
        verify_nonzero("max_scan_iters", max_scan_iters)?;

        Ok(Self {
            coarse_step,
            refine_factor,
            min_upper,
            bisection_tol,
            max_bisection_iters,
            max_scan_iters,
            verbose,
        })
    }

    /// Step used by the fine bracket search.
    pub fn fine_step(&self) -> f64 {
        self.coarse_step / self.refine_factor
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            coarse_step: DEFAULT_COARSE_STEP,
            refine_factor: DEFAULT_REFINE_FACTOR,
            min_upper: DEFAULT_MIN_UPPER,
            bisection_tol: DEFAULT_BISECTION_TOL,
            max_bisection_iters: DEFAULT_MAX_BISECTION_ITERS,
            max_scan_iters: DEFAULT_MAX_SCAN_ITERS,
            verbose: false,
        }
    }
}

fn verify_positive(name: &'static str, value: f64) -> TradeoffResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TradeoffError::InvalidSearchOption {
            name,
            value,
            reason: "Must be finite and strictly positive.",
        });
    }
    Ok(())
}

fn verify_nonzero(name: &'static str, value: usize) -> TradeoffResult<()> {
    if value == 0 {
        return Err(TradeoffError::InvalidSearchOption {
            name,
            value: 0.0,
            reason: "Must be greater than zero.",
        });
    }
    Ok(())
}
