//! Sobol seeding of the search box.

use ndarray::Array1;
use sobol_burley::sample;

use crate::problem::BoundedProblem;

/// Generate `n` Sobol quasi-random points inside the problem's box.
///
/// Deterministic in `(lower, upper, n)`. The first `n` entries of the raw
/// sequence are skipped before yielding: discarding a prefix roughly as long
/// as the requested sample improves the uniformity of short sequences.
/// Every yielded point is strictly inside the open box.
pub fn init_sobol(problem: &BoundedProblem, n: usize) -> Vec<Array1<f64>> {
    let dim = problem.dim();
    let lower = problem.lower();
    let upper = problem.upper();

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let mut x = Array1::<f64>::zeros(dim);
        for d in 0..dim {
            // samples live in [0, 1); keep the point off the lower face
            let u = (sample((n + i) as u32, d as u32, 0) as f64).max(f64::EPSILON);
            x[d] = lower[d] + u * (upper[d] - lower[d]);
        }
        points.push(x);
    }
    points
}
