//! Contract with bound-constrained local minimizers.
//!
//! The coordinator never cares which backend refines a start; it hands a
//! [`BoundedProblem`], a starting location inside the box, and a
//! [`LocalOptions`] to a [`LocalMethod`] and gets back either a usable
//! [`LocalResult`] or nothing. Any backend that cannot honour the box bounds
//! is unsuitable.

use std::str::FromStr;
use std::time::Duration;

use ndarray::Array1;

use crate::nelder_mead::NelderMead;
use crate::problem::BoundedProblem;

/// Terminating status of a local run.
///
/// The set mirrors the stopping reasons NLopt-style backends report, so
/// adapters for such libraries map statuses one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalStatus {
    /// Backend-specific convergence criterion met.
    Converged,
    /// Objective reached a configured target value.
    StopvalReached,
    /// Objective-value spread fell below tolerance.
    FtolReached,
    /// Location change fell below tolerance.
    XtolReached,
    /// Evaluation budget exhausted; best-so-far returned.
    MaxevalReached,
    /// Wall-time budget exhausted; best-so-far returned.
    MaxtimeReached,
    /// Backend failure; no usable result.
    Failure,
}

impl LocalStatus {
    /// Default accepted set: every terminating status except `Failure`.
    pub const DEFAULT_SUCCESS: &'static [LocalStatus] = &[
        LocalStatus::Converged,
        LocalStatus::StopvalReached,
        LocalStatus::FtolReached,
        LocalStatus::XtolReached,
        LocalStatus::MaxevalReached,
        LocalStatus::MaxtimeReached,
    ];
}

/// Options every backend must honour.
#[derive(Debug, Clone)]
pub struct LocalOptions {
    /// Per-coordinate absolute tolerance on the location.
    pub xtol_abs: f64,
    /// Per-coordinate relative tolerance on the location.
    pub xtol_rel: f64,
    /// Evaluation budget (max objective calls).
    pub maxeval: usize,
    /// Wall-clock budget; `None` means unlimited.
    pub maxtime: Option<Duration>,
    /// Statuses treated as a usable result; anything else drops the run.
    pub success_statuses: Vec<LocalStatus>,
}

impl Default for LocalOptions {
    fn default() -> Self {
        Self {
            xtol_abs: 1e-9,
            xtol_rel: 1e-9,
            maxeval: 200,
            maxtime: None,
            success_statuses: LocalStatus::DEFAULT_SUCCESS.to_vec(),
        }
    }
}

impl LocalOptions {
    pub fn is_success(&self, status: LocalStatus) -> bool {
        self.success_statuses.contains(&status)
    }
}

/// Outcome of an accepted local run.
#[derive(Debug, Clone)]
pub struct LocalResult {
    pub location: Array1<f64>,
    pub value: f64,
    pub status: LocalStatus,
    /// Objective evaluations spent by this run.
    pub nfev: usize,
}

/// A bound-constrained local minimizer.
///
/// Implementations must keep every iterate inside the problem's box, must
/// accept non-differentiable objectives, and must return `None` whenever the
/// terminating status is outside the configured success set or the best value
/// found is non-finite.
pub trait LocalMethod: Send + Sync {
    fn solve(
        &self,
        problem: &BoundedProblem,
        x0: &Array1<f64>,
        opts: &LocalOptions,
    ) -> Option<LocalResult>;
}

/// Backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalAlgorithm {
    /// Native downhill-simplex search (see [`NelderMead`]).
    #[default]
    NelderMead,
}

impl FromStr for LocalAlgorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neldermead" | "nelder-mead" | "nelder_mead" | "nm" => Ok(LocalAlgorithm::NelderMead),
            _ => Err(format!("unknown local algorithm: {}", s)),
        }
    }
}

/// Instantiate the backend for an algorithm tag.
pub fn build_local_method(algo: LocalAlgorithm) -> Box<dyn LocalMethod> {
    match algo {
        LocalAlgorithm::NelderMead => Box::new(NelderMead::default()),
    }
}
