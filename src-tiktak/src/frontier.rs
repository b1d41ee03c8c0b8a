//! Value-ordered collection of evaluated points kept between phases.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A location together with its objective (or local-minimum) value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedPoint {
    pub location: Array1<f64>,
    pub value: f64,
}

/// Sorted sequence of evaluated points, ascending by value.
///
/// Values are finite by construction (NaN objective values are sentinelled
/// upstream, failed local runs are dropped), so the value ordering is total.
/// Sorting is stable: ties keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    points: Vec<EvaluatedPoint>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of points and re-sort.
    pub fn insert_bulk<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = EvaluatedPoint>,
    {
        self.points.extend(points);
        self.points.sort_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Retain the `k` smallest points. Requires `1 <= k <= len`.
    pub fn keep_lowest(&mut self, k: usize) {
        assert!(
            k >= 1 && k <= self.points.len(),
            "keep_lowest: k={} out of range 1..={}",
            k,
            self.points.len()
        );
        self.points.truncate(k);
    }

    /// Current best point, if any.
    pub fn first(&self) -> Option<&EvaluatedPoint> {
        self.points.first()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[EvaluatedPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<EvaluatedPoint> {
        self.points
    }
}
