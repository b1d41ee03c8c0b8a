//! TikTak multistart global optimizer in pure Rust using ndarray
//!
//! A pragmatic implementation of the TikTak algorithm for bounded,
//! derivative-free, possibly noisy objectives: Sobol seeding of the box,
//! bulk evaluation across a worker pool, local refinement of the most
//! promising seeds, and a batched finisher that pulls later starts toward
//! the incumbent with a clamped power-law weight.
//!
//! Supported features:
//! - Box constraints (lower/upper bounds), preserved by every sampler and
//!   mixing step
//! - Sobol quasi-random seeding with prefix skipping
//! - Pluggable bound-constrained local minimizers behind [`LocalMethod`];
//!   a native Nelder-Mead backend ships by default
//! - Order-preserving parallel evaluation with per-element failure isolation
//! - NaN sanitisation of seed evaluations via a fixed sentinel
//! - Batched incumbent updates that jump to the best improver per round
//! - Optional JSON checkpoint artefacts after each phase

use std::fmt;
use std::path::PathBuf;

use ndarray::Array1;

pub mod checkpoint;
pub mod coordinator;
pub mod error;
pub mod frontier;
pub mod init_sobol;
pub mod local;
pub mod nelder_mead;
pub mod parallel_eval;
pub mod problem;
pub mod pull_schedule;

pub use checkpoint::Checkpoint;
pub use coordinator::{tiktak, TikTak};
pub use error::TikTakError;
pub use frontier::{EvaluatedPoint, Frontier};
pub use init_sobol::init_sobol;
pub use local::{
    build_local_method, LocalAlgorithm, LocalMethod, LocalOptions, LocalResult, LocalStatus,
};
pub use nelder_mead::NelderMead;
pub use parallel_eval::{ParallelConfig, NAN_SENTINEL};
pub use problem::BoundedProblem;
pub use pull_schedule::PullSchedule;

/// Configuration for the TikTak coordinator
#[derive(Debug, Clone)]
pub struct TikTakConfig {
    /// Number of Sobol seeds evaluated in the seeding phase
    pub quasirandom_n: usize,
    /// Fraction of seeds retained for local refinement, in (0, 1]
    pub keep_ratio: f64,
    /// Lower clamp of the pull weight
    pub theta_min: f64,
    /// Upper clamp of the pull weight
    pub theta_max: f64,
    /// Curvature of the pull ramp
    pub theta_pow: f64,
    /// Local backend used for every refinement
    pub local_algorithm: LocalAlgorithm,
    /// Tolerances and accepted statuses shared by both refinement phases
    pub local_options: LocalOptions,
    /// Evaluation budget per local run in the refinement phase
    pub local_maxeval_initial: usize,
    /// Evaluation budget per local run in the finisher phase
    pub local_maxeval_final: usize,
    /// Externally promising locations evaluated alongside the refined seeds
    pub prepend_points: Vec<Array1<f64>>,
    /// Worker-pool configuration
    pub parallel: ParallelConfig,
    /// Directory for phase artefacts; `None` disables checkpointing
    pub checkpoint_dir: Option<PathBuf>,
}

impl Default for TikTakConfig {
    fn default() -> Self {
        Self {
            quasirandom_n: 1000,
            keep_ratio: 0.1,
            theta_min: 0.1,
            theta_max: 0.995,
            theta_pow: 0.5,
            local_algorithm: LocalAlgorithm::default(),
            local_options: LocalOptions::default(),
            local_maxeval_initial: 200,
            local_maxeval_final: 200,
            prepend_points: Vec::new(),
            parallel: ParallelConfig::default(),
            checkpoint_dir: None,
        }
    }
}

impl TikTakConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), TikTakError> {
        if self.quasirandom_n == 0 {
            return Err(TikTakError::InvalidConfig(
                "quasirandom_n must be positive".into(),
            ));
        }
        if !(self.keep_ratio > 0.0 && self.keep_ratio <= 1.0) {
            return Err(TikTakError::InvalidConfig(format!(
                "keep_ratio must be in (0, 1], got {}",
                self.keep_ratio
            )));
        }
        if !(self.theta_min > 0.0 && self.theta_max < 1.0) {
            return Err(TikTakError::InvalidConfig(format!(
                "theta clamps must lie in (0, 1), got [{}, {}]",
                self.theta_min, self.theta_max
            )));
        }
        if self.theta_min > self.theta_max {
            return Err(TikTakError::InvalidConfig(format!(
                "theta_min {} exceeds theta_max {}",
                self.theta_min, self.theta_max
            )));
        }
        if !(self.theta_pow > 0.0) {
            return Err(TikTakError::InvalidConfig(format!(
                "theta_pow must be positive, got {}",
                self.theta_pow
            )));
        }
        if self.local_maxeval_initial == 0 || self.local_maxeval_final == 0 {
            return Err(TikTakError::InvalidConfig(
                "local evaluation budgets must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Number of seeds retained after the seeding phase:
    /// `ceil(keep_ratio * quasirandom_n)`.
    pub fn initial_n(&self) -> usize {
        (self.keep_ratio * self.quasirandom_n as f64).ceil() as usize
    }

    /// Local options with the given evaluation budget swapped in.
    pub(crate) fn local_options_with(&self, maxeval: usize) -> LocalOptions {
        let mut opts = self.local_options.clone();
        opts.maxeval = maxeval;
        opts
    }
}

/// Fluent builder for `TikTakConfig`.
pub struct TikTakConfigBuilder {
    cfg: TikTakConfig,
}

impl Default for TikTakConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TikTakConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: TikTakConfig::default(),
        }
    }
    pub fn quasirandom_n(mut self, v: usize) -> Self {
        self.cfg.quasirandom_n = v;
        self
    }
    pub fn keep_ratio(mut self, v: f64) -> Self {
        self.cfg.keep_ratio = v;
        self
    }
    pub fn theta_min(mut self, v: f64) -> Self {
        self.cfg.theta_min = v;
        self
    }
    pub fn theta_max(mut self, v: f64) -> Self {
        self.cfg.theta_max = v;
        self
    }
    pub fn theta_pow(mut self, v: f64) -> Self {
        self.cfg.theta_pow = v;
        self
    }
    pub fn local_algorithm(mut self, v: LocalAlgorithm) -> Self {
        self.cfg.local_algorithm = v;
        self
    }
    pub fn local_options(mut self, v: LocalOptions) -> Self {
        self.cfg.local_options = v;
        self
    }
    pub fn local_maxeval_initial(mut self, v: usize) -> Self {
        self.cfg.local_maxeval_initial = v;
        self
    }
    pub fn local_maxeval_final(mut self, v: usize) -> Self {
        self.cfg.local_maxeval_final = v;
        self
    }
    pub fn prepend_point(mut self, v: Array1<f64>) -> Self {
        self.cfg.prepend_points.push(v);
        self
    }
    pub fn prepend_points(mut self, v: Vec<Array1<f64>>) -> Self {
        self.cfg.prepend_points = v;
        self
    }
    pub fn parallel(mut self, v: ParallelConfig) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn enable_parallel(mut self, enable: bool) -> Self {
        self.cfg.parallel.enabled = enable;
        self
    }
    pub fn parallel_threads(mut self, num_threads: usize) -> Self {
        self.cfg.parallel.num_threads = Some(num_threads);
        self
    }
    pub fn checkpoint_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.checkpoint_dir = Some(dir.into());
        self
    }
    pub fn build(self) -> TikTakConfig {
        self.cfg
    }
}

/// Result/Report of a TikTak run
#[derive(Clone)]
pub struct TikTakReport {
    /// Every seed evaluation, sorted ascending by value
    pub quasirandom_points: Vec<EvaluatedPoint>,
    /// Seeds retained for local refinement
    pub promising_points: Vec<EvaluatedPoint>,
    /// Sorted candidate minima after the refinement phase
    pub local_minima: Vec<EvaluatedPoint>,
    /// Final incumbent location
    pub x: Array1<f64>,
    /// Final incumbent value
    pub fun: f64,
    /// Finisher rounds executed
    pub rounds: usize,
    /// Objective evaluations across all phases
    pub nfev: usize,
    pub message: String,
}

impl fmt::Debug for TikTakReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TikTakReport")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("rounds", &self.rounds)
            .field("nfev", &self.nfev)
            .field("message", &self.message)
            .field(
                "quasirandom_points",
                &format!("len={}", self.quasirandom_points.len()),
            )
            .field(
                "promising_points",
                &format!("len={}", self.promising_points.len()),
            )
            .field("local_minima", &format!("len={}", self.local_minima.len()))
            .finish()
    }
}
