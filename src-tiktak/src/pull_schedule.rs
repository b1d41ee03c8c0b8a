//! Pull-toward-incumbent mixing schedule.

use ndarray::Array1;

/// Mixing-weight schedule for the finisher phase.
///
/// `theta(i)` is the weight on the incumbent in the convex combination
/// `(1 - theta) * seed + theta * incumbent` for the i-th candidate of the
/// sorted frontier. Early candidates are almost pure seeds (exploration);
/// late candidates are pulled hard toward the incumbent (refinement).
/// `theta_pow` controls the curvature of the ramp.
#[derive(Debug, Clone, Copy)]
pub struct PullSchedule {
    pub initial_n: usize,
    pub theta_min: f64,
    pub theta_max: f64,
    pub theta_pow: f64,
}

impl PullSchedule {
    /// Weight on the incumbent for the candidate at 0-based frontier index
    /// `i`. Index 0 is the incumbent itself and keeps weight 1.
    pub fn theta(&self, i: usize) -> f64 {
        if i == 0 {
            return 1.0;
        }
        let t = (i as f64 / self.initial_n as f64).powf(self.theta_pow);
        t.clamp(self.theta_min, self.theta_max)
    }
}

/// Convex mix of a seed toward the incumbent. Stays inside any box both
/// endpoints lie in.
pub fn mix_toward(seed: &Array1<f64>, incumbent: &Array1<f64>, theta: f64) -> Array1<f64> {
    seed * (1.0 - theta) + incumbent * theta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> PullSchedule {
        PullSchedule {
            initial_n: 100,
            theta_min: 0.1,
            theta_max: 0.995,
            theta_pow: 0.5,
        }
    }

    #[test]
    fn test_theta_zero_is_unmixed() {
        assert_eq!(schedule().theta(0), 1.0);
    }

    #[test]
    fn test_theta_within_clamp() {
        let s = schedule();
        for i in 1..=s.initial_n {
            let t = s.theta(i);
            assert!(t >= s.theta_min && t <= s.theta_max, "theta({}) = {}", i, t);
        }
    }

    #[test]
    fn test_theta_non_decreasing() {
        let s = schedule();
        let mut prev = 0.0;
        for i in 1..=s.initial_n {
            let t = s.theta(i);
            assert!(t >= prev, "theta({}) decreased: {} < {}", i, t, prev);
            prev = t;
        }
    }

    #[test]
    fn test_mix_endpoints() {
        let seed = Array1::from(vec![0.0, 10.0]);
        let inc = Array1::from(vec![4.0, 2.0]);
        assert_eq!(mix_toward(&seed, &inc, 0.0), seed);
        assert_eq!(mix_toward(&seed, &inc, 1.0), inc);
        let mid = mix_toward(&seed, &inc, 0.5);
        assert_eq!(mid, Array1::from(vec![2.0, 6.0]));
    }
}
