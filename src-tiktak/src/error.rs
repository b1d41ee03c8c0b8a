//! Error taxonomy for the solver.
//!
//! Per-call failures (an objective that panics or returns a non-finite value,
//! a local run that ends on a non-accepted status, a lost worker) never show
//! up here: they are swallowed at the evaluation-pool boundary and reported
//! as absent results. Only configuration errors and solve-fatal conditions
//! surface as `TikTakError`.

use thiserror::Error;

use crate::frontier::EvaluatedPoint;

#[derive(Error, Debug)]
pub enum TikTakError {
    /// Some lower bound is not strictly below its upper bound.
    #[error("bound[{index}] has lower {lower} >= upper {upper}")]
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every local search launched from the retained seeds failed. The seed
    /// evaluations are carried along so the caller can diagnose the landscape.
    #[error("no viable seeds: all {started} initial local searches failed")]
    NoViableSeeds {
        started: usize,
        quasirandom_points: Vec<EvaluatedPoint>,
    },

    #[error("checkpoint I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
