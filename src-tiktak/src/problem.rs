//! Bounded optimization problem description.

use std::fmt;
use std::sync::Arc;

use ndarray::Array1;

use crate::error::TikTakError;

/// An immutable objective with axis-aligned box bounds.
///
/// The objective is assumed pure: callers replicate the problem freely across
/// workers, so everything the closure captures must be `Send + Sync`.
/// Locations handed to [`BoundedProblem::evaluate`] must already lie inside
/// the box; the samplers and the mixing rule both preserve bounds by
/// construction.
#[derive(Clone)]
pub struct BoundedProblem {
    objective: Arc<dyn Fn(&Array1<f64>) -> f64 + Send + Sync>,
    lower: Array1<f64>,
    upper: Array1<f64>,
}

impl BoundedProblem {
    /// Create a problem from an objective and bound vectors.
    ///
    /// Fails with [`TikTakError::InvalidBounds`] unless `lower[i] < upper[i]`
    /// for every coordinate.
    pub fn new<F>(
        objective: F,
        lower: Array1<f64>,
        upper: Array1<f64>,
    ) -> Result<Self, TikTakError>
    where
        F: Fn(&Array1<f64>) -> f64 + Send + Sync + 'static,
    {
        assert_eq!(lower.len(), upper.len(), "lower/upper size mismatch");
        if lower.is_empty() {
            return Err(TikTakError::InvalidConfig(
                "problem must have at least one dimension".into(),
            ));
        }
        for i in 0..lower.len() {
            if !(lower[i] < upper[i]) {
                return Err(TikTakError::InvalidBounds {
                    index: i,
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }
        Ok(Self {
            objective: Arc::new(objective),
            lower,
            upper,
        })
    }

    /// Convenience constructor from a list of `(lower, upper)` pairs.
    pub fn from_pairs<F>(objective: F, bounds: &[(f64, f64)]) -> Result<Self, TikTakError>
    where
        F: Fn(&Array1<f64>) -> f64 + Send + Sync + 'static,
    {
        let n = bounds.len();
        let mut lower = Array1::<f64>::zeros(n);
        let mut upper = Array1::<f64>::zeros(n);
        for (i, (lo, hi)) in bounds.iter().enumerate() {
            lower[i] = *lo;
            upper[i] = *hi;
        }
        Self::new(objective, lower, upper)
    }

    /// Evaluate the objective at `x`.
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.objective)(x)
    }

    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    /// Whether `x` lies inside the closed box.
    pub fn contains(&self, x: &Array1<f64>) -> bool {
        x.len() == self.dim()
            && x.iter()
                .enumerate()
                .all(|(i, &xi)| self.lower[i] <= xi && xi <= self.upper[i])
    }

    /// Clamp `x` componentwise into the closed box.
    pub fn clamp_into(&self, x: &mut Array1<f64>) {
        for i in 0..x.len() {
            x[i] = x[i].clamp(self.lower[i], self.upper[i]);
        }
    }
}

impl fmt::Debug for BoundedProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedProblem")
            .field("dim", &self.dim())
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}
