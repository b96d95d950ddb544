//! tradeoff::fdr_lasso — minimal FDP of the Lasso at a target TPP.
//!
//! Purpose
//! -------
//! Compute the smallest false-discovery proportion `q` the Lasso can attain
//! asymptotically at true-positive proportion `tpp`, for a design with
//! aspect ratio `delta = n/p` and sparsity `epsi = k/p`. The threshold `t`
//! at which the sandwich bounds cross is located numerically and mapped to
//! `q`.
//!
//! Key behaviors
//! -------------
//! - Feasibility gate: `tpp > max_power(delta, epsi)` yields
//!   [`Tradeoff::Infeasible`]; [`fdr_lasso`] maps it to the sentinel
//!   `q = 1`.
//! - `tpp == 0` yields `q = 0` without any search.
//! - Otherwise the driver walks the stages
//!   `CoarseSearch → (FineSearch) → Bisect → Done`:
//!   - CoarseSearch scans `t` downward from
//!     `tmax = max(min_upper, sqrt(delta/epsi/tpp) + 1)` in steps of
//!     `coarse_step` until `L(t) < R(t)`, `t` would leave `(0, ∞)`, the
//!     step is lost to rounding at this magnitude of `t`, or
//!     `max_scan_iters` steps have been taken.
//!   - FineSearch repeats the scan once from the same start with
//!     `coarse_step / refine_factor`, only if the coarse scan found nothing.
//!   - Bisect halves `[tmin, tmax]` until its width is at most
//!     `bisection_tol` or `max_bisection_iters` is reached.
//! - `q = 2(1-ε)Φ(-t) / (2(1-ε)Φ(-t) + ε·tpp)` at `t = (tmin + tmax)/2`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated against their documented domains before any
//!   numerical work.
//! - If the fine scan also stops without a crossing, bisection proceeds on the last
//!   interval anyway; the result is tagged [`SearchPhase::Unbracketed`] and
//!   reported on stderr when verbose.
//! - Deterministic: identical inputs give bit-identical outputs.
//!
//! Conventions
//! -----------
//! - Comparisons use `<` / `>` directly on the two bounds, so a NaN bound
//!   counts as "not crossed" in the scans and as "move tmin" in the
//!   bisection.
//!
//! Downstream usage
//! ----------------
//! - [`fdr_lasso`] is the scalar entry point re-exported at the crate root
//!   and wrapped by the Python `fdrlasso` function.
//! - [`FdrLasso::solve`] backs the Python `LassoTradeoff` class.
//!
//! Testing notes
//! -------------
//! - Unit tests pin reference values for several design points, every
//!   search phase, the feasibility gate, and monotonicity of `q` in `tpp`.
use crate::{
    optimization::scalar_minimizer::MinimizerOptions,
    tradeoff::{
        errors::TradeoffResult,
        gaussian::upper_tail,
        options::SearchOptions,
        power::max_power_with,
        sandwich::{left_bound, right_bound},
        validation::{validate_epsilon, validate_input, validate_threshold, validate_tpp},
    },
};

/// Value returned by [`fdr_lasso`] for an infeasible `tpp`.
pub const INFEASIBLE_SENTINEL: f64 = 1.0;

/// Stage of the search that produced the final bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// `tpp == 0`; no search was run.
    Degenerate,
    /// The coarse scan found a crossing.
    Coarse,
    /// Only the refined scan found a crossing.
    Fine,
    /// Neither scan found a crossing before stopping.
    Unbracketed,
}

impl SearchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPhase::Degenerate => "degenerate",
            SearchPhase::Coarse => "coarse",
            SearchPhase::Fine => "fine",
            SearchPhase::Unbracketed => "unbracketed",
        }
    }
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feasible point on the trade-off curve.
///
/// - `q`: minimal false-discovery proportion at `tpp`.
/// - `threshold`: crossing threshold `t`; `None` for the degenerate
///   `tpp == 0` case.
/// - `phase`: search stage that produced the bracket.
/// - `bisection_iters`: number of bisection steps taken.
/// - `max_power`: maximum power at the design, as computed by the
///   feasibility gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeoffPoint {
    pub q: f64,
    pub tpp: f64,
    pub threshold: Option<f64>,
    pub phase: SearchPhase,
    pub bisection_iters: usize,
    pub max_power: f64,
}

/// Tagged outcome of a trade-off evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tradeoff {
    Feasible(TradeoffPoint),
    /// `tpp` exceeds the maximum power reachable at this design point.
    Infeasible { tpp: f64, max_power: f64 },
}

impl Tradeoff {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Tradeoff::Feasible(_))
    }

    /// `Some(q)` for a feasible point, `None` otherwise.
    pub fn q(&self) -> Option<f64> {
        match self {
            Tradeoff::Feasible(point) => Some(point.q),
            Tradeoff::Infeasible { .. } => None,
        }
    }

    /// `q`, or [`INFEASIBLE_SENTINEL`] when infeasible.
    pub fn q_or_sentinel(&self) -> f64 {
        self.q().unwrap_or(INFEASIBLE_SENTINEL)
    }

    pub fn point(&self) -> Option<&TradeoffPoint> {
        match self {
            Tradeoff::Feasible(point) => Some(point),
            Tradeoff::Infeasible { .. } => None,
        }
    }
}

/// FdrLasso — configurable trade-off driver.
///
/// Purpose
/// -------
/// Bundle the search settings and the minimizer settings used by the
/// feasibility gate, and evaluate the trade-off at `(tpp, delta, epsi)`.
///
/// Fields
/// ------
/// - `search`: [`SearchOptions`]
///   Bracket scans, bisection tolerance and verbosity.
/// - `minimizer`: [`MinimizerOptions`]
///   Configuration for the phase-transition search inside `max_power`.
///
/// Notes
/// -----
/// - `FdrLasso::default()` reproduces [`fdr_lasso`] with `verbose = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FdrLasso {
    search: SearchOptions,
    minimizer: MinimizerOptions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bracket {
    tmin: f64,
    tmax: f64,
}

enum Stage {
    CoarseSearch,
    FineSearch,
    Bisect(Bracket, SearchPhase),
    Done(Bracket, SearchPhase, usize),
}

impl FdrLasso {
    pub fn new(search: SearchOptions, minimizer: MinimizerOptions) -> Self {
        Self { search, minimizer }
    }

    pub fn search_options(&self) -> &SearchOptions {
        &self.search
    }

    pub fn minimizer_options(&self) -> &MinimizerOptions {
        &self.minimizer
    }

    /// Evaluate the trade-off at `(tpp, delta, epsi)`.
    ///
    /// # Errors
    /// - `InvalidTpp`, `InvalidDelta`, `InvalidEpsilon` for inputs outside
    ///   their domains.
    /// - `Optimization` if the phase-transition search fails.
    pub fn solve(&self, tpp: f64, delta: f64, epsi: f64) -> TradeoffResult<Tradeoff> {
        validate_input(tpp, delta, epsi)?;

        let max_power = max_power_with(delta, epsi, &self.minimizer)?;
        if tpp > max_power {
            if self.search.verbose {
                eprintln!("Invalid input!");
                eprintln!("  tpp = {tpp} exceeds the maximum power {max_power} at delta = {delta}, epsilon = {epsi}");
            }
            return Ok(Tradeoff::Infeasible { tpp, max_power });
        }

        if tpp == 0.0 {
            return Ok(Tradeoff::Feasible(TradeoffPoint {
                q: 0.0,
                tpp,
                threshold: None,
                phase: SearchPhase::Degenerate,
                bisection_iters: 0,
                max_power,
            }));
        }

        let t_start = self.search.min_upper.max((delta / epsi / tpp).sqrt() + 1.0);
        let mut stage = Stage::CoarseSearch;
        let (bracket, phase, iters) = loop {
            stage = match stage {
                Stage::CoarseSearch => {
                    let step = self.search.coarse_step;
                    let (bracket, found) = self.scan_down(t_start, step, tpp, delta, epsi);
                    if found {
                        Stage::Bisect(bracket, SearchPhase::Coarse)
                    } else {
                        Stage::FineSearch
                    }
                }
                Stage::FineSearch => {
                    let step = self.search.fine_step();
                    let (bracket, found) = self.scan_down(t_start, step, tpp, delta, epsi);
                    if found {
                        Stage::Bisect(bracket, SearchPhase::Fine)
                    } else {
                        if self.search.verbose {
                            eprintln!(
                                "Unbracketed: no threshold crossing found below {t_start} for tpp = {tpp}, delta = {delta}, epsilon = {epsi}; bisecting [{}, {}]",
                                bracket.tmin, bracket.tmax
                            );
                        }
                        Stage::Bisect(bracket, SearchPhase::Unbracketed)
                    }
                }
                Stage::Bisect(bracket, phase) => {
                    let (bracket, iters) = self.bisect(bracket, tpp, delta, epsi);
                    Stage::Done(bracket, phase, iters)
                }
                Stage::Done(bracket, phase, iters) => break (bracket, phase, iters),
            };
        };

        let t = (bracket.tmax + bracket.tmin) / 2.0;
        Ok(Tradeoff::Feasible(TradeoffPoint {
            q: q_from_threshold(t, tpp, epsi),
            tpp,
            threshold: Some(t),
            phase,
            bisection_iters: iters,
            max_power,
        }))
    }

    /// Step `t` downward from `t_start` until the bounds cross.
    ///
    /// Stops without a crossing when `t` would leave `(0, ∞)`, when `step`
    /// no longer changes `t` at its current magnitude, or after
    /// `max_scan_iters` steps. Returns the last `(tmin, tmax)` and whether a
    /// crossing was found.
    fn scan_down(
        &self, t_start: f64, step: f64, tpp: f64, delta: f64, epsi: f64,
    ) -> (Bracket, bool) {
        let mut tmax = t_start;
        let mut tmin = tmax - step;
        for _ in 0..self.search.max_scan_iters {
            if tmin <= 0.0 || tmin == tmax {
                break;
            }
            if left_bound(tmin, tpp, delta, epsi) < right_bound(tmin, tpp) {
                return (Bracket { tmin, tmax }, true);
            }
            tmax = tmin;
            tmin = tmax - step;
        }
        (Bracket { tmin, tmax }, false)
    }

    fn bisect(&self, bracket: Bracket, tpp: f64, delta: f64, epsi: f64) -> (Bracket, usize) {
        let Bracket { mut tmin, mut tmax } = bracket;
        let mut iters = 0;
        while tmax - tmin > self.search.bisection_tol && iters < self.search.max_bisection_iters {
            let tmid = 0.5 * tmax + 0.5 * tmin;
            if left_bound(tmid, tpp, delta, epsi) > right_bound(tmid, tpp) {
                tmax = tmid;
            } else {
                tmin = tmid;
            }
            iters += 1;
        }
        (Bracket { tmin, tmax }, iters)
    }
}

fn q_from_threshold(t: f64, tpp: f64, epsi: f64) -> f64 {
    let null_mass = 2.0 * (1.0 - epsi) * upper_tail(t);
    null_mass / (null_mass + epsi * tpp)
}

/// False-discovery proportion implied by threshold `t` at `(tpp, epsi)`.
///
/// # Errors
/// `InvalidThreshold`, `InvalidTpp` or `InvalidEpsilon` for out-of-domain
/// inputs.
pub fn fdr_at_threshold(t: f64, tpp: f64, epsi: f64) -> TradeoffResult<f64> {
    validate_threshold(t)?;
    validate_tpp(tpp)?;
    validate_epsilon(epsi)?;
    Ok(q_from_threshold(t, tpp, epsi))
}

/// Minimal Lasso FDP at `tpp` for the design `(delta, epsi)`.
///
/// Returns `1.0` when `tpp` exceeds the maximum power and `0.0` when
/// `tpp == 0`. A positive `verbose` prints a diagnostic to stderr for
/// infeasible inputs and for a failed bracket search.
///
/// # Errors
/// Same as [`FdrLasso::solve`].
///
/// # Example
/// ```
/// let q = lasso_tradeoff::fdr_lasso(0.5, 0.3, 0.1, 0).unwrap();
/// assert!((q - 0.307222).abs() < 1e-4);
/// ```
pub fn fdr_lasso(tpp: f64, delta: f64, epsi: f64, verbose: u32) -> TradeoffResult<f64> {
    let search = SearchOptions { verbose: verbose > 0, ..SearchOptions::default() };
    let driver = FdrLasso::new(search, MinimizerOptions::default());
    Ok(driver.solve(tpp, delta, epsi)?.q_or_sentinel())
}
