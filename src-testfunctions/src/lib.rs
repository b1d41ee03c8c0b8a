//! Benchmark objectives for the TikTak solver
//!
//! A small collection of test landscapes used by the unit and integration
//! tests: smooth bowls, the Rosenbrock valley, a flat plateau with a basin,
//! and NaN-poisoned variants for exercising the sanitisation paths.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use tiktak_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![1.0, 1.0]);
//! assert_eq!(rosenbrock(&x), 0.0);
//! ```

use ndarray::Array1;

pub mod functions;
pub use functions::*;

/// Build a bounds list with the same interval in every dimension.
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Vec<(f64, f64)> {
    vec![(lower, upper); n]
}

/// Squared distance to a fixed center, for shifted-bowl objectives.
pub fn shifted_quadratic(x: &Array1<f64>, center: &Array1<f64>) -> f64 {
    x.iter()
        .zip(center.iter())
        .map(|(&xi, &ci)| (xi - ci).powi(2))
        .sum()
}
