//! Order-preserving scatter/gather of evaluation batches.
//!
//! The pool makes no ordering guarantee among concurrently executing
//! elements; it only guarantees that the returned sequence matches the input
//! order and that one failing element never aborts the batch. A worker that
//! dies mid-call (a panic in the objective or the backend) is
//! indistinguishable from a failed local run: both come back as `None`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use ndarray::Array1;
use rayon::prelude::*;

use crate::frontier::EvaluatedPoint;
use crate::local::{LocalMethod, LocalOptions, LocalResult};
use crate::problem::BoundedProblem;

/// Sentinel replacing NaN objective values during seed evaluation. Changing
/// it changes the observable seed-evaluation output.
pub const NAN_SENTINEL: f64 = 1e10;

/// Parallel evaluation configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Number of worker threads (None = use all available cores)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
        }
    }
}

/// Map `f` over `inputs`, returning per-element results in input order.
/// A panicking element yields `None`; the batch always completes.
pub fn map_parallel<T, U, F>(config: &ParallelConfig, inputs: &[T], f: F) -> Vec<Option<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Option<U> + Sync,
{
    let guarded = |x: &T| catch_unwind(AssertUnwindSafe(|| f(x))).ok().flatten();
    if config.enabled {
        inputs.par_iter().map(guarded).collect()
    } else {
        inputs.iter().map(guarded).collect()
    }
}

/// Seed-evaluation path: evaluate the objective at each point.
///
/// NaN (and any other non-finite value, including a panicking objective) is
/// replaced with [`NAN_SENTINEL`] so the frontier stays totally ordered. This
/// sanitisation applies to this path only; local-minimisation results are
/// dropped on failure instead.
pub fn evaluate_objective_batch(
    config: &ParallelConfig,
    problem: &BoundedProblem,
    points: Vec<Array1<f64>>,
) -> Vec<EvaluatedPoint> {
    let values = map_parallel(config, &points, |x| Some(problem.evaluate(x)));
    points
        .into_iter()
        .zip(values)
        .map(|(location, value)| {
            let value = match value {
                Some(f) if f.is_finite() => f,
                _ => NAN_SENTINEL,
            };
            EvaluatedPoint { location, value }
        })
        .collect()
}

/// Local-refinement path: run the local method from each start.
///
/// Failed runs come back as `None` in input order; the caller drops them.
pub fn solve_local_batch(
    config: &ParallelConfig,
    problem: &BoundedProblem,
    method: &dyn LocalMethod,
    opts: &LocalOptions,
    starts: &[Array1<f64>],
) -> Vec<Option<LocalResult>> {
    map_parallel(config, starts, |x0| method.solve(problem, x0, opts))
}
