//! Test landscape implementations
//!
//! Each objective takes an `Array1<f64>` location and returns a scalar value,
//! with the global minimum noted in the doc comment.

use ndarray::Array1;

/// Sphere function - unimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum()
}

/// Quadratic function (alias for sphere, kept for test readability)
pub fn quadratic(x: &Array1<f64>) -> f64 {
    sphere(x)
}

/// Rosenbrock valley - unimodal but with a long curved ravine
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048] classically; any box containing (1, ..., 1) works
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let mut sum = 0.0;
    for i in 0..n - 1 {
        sum += (1.0 - x[i]).powi(2) + 100.0 * (x[i + 1] - x[i].powi(2)).powi(2);
    }
    sum
}

/// Flat plateau with a shallow central basin
/// f(x) = max(0, ||x||^2 - 4) when ||x|| <= 3, else 100
/// Global minimum: f(x) = 0 anywhere inside ||x|| <= 2
/// Bounds: x_i in [-5, 5]
pub fn plateau_basin(x: &Array1<f64>) -> f64 {
    let norm_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    if norm_sq.sqrt() <= 3.0 {
        (norm_sq - 4.0).max(0.0)
    } else {
        100.0
    }
}

/// Rosenbrock with a NaN pocket: returns NaN inside a disc of radius 5
/// around (50, 50), otherwise the plain Rosenbrock value.
/// Intended for bounds [0, 100]^2, where the pocket traps a small fraction
/// of any space-filling sample.
pub fn nan_pocket_rosenbrock(x: &Array1<f64>) -> f64 {
    let dist_sq: f64 = x.iter().map(|&xi| (xi - 50.0).powi(2)).sum();
    if dist_sq <= 25.0 {
        f64::NAN
    } else {
        rosenbrock(x)
    }
}
