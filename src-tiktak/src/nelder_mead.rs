//! Bound-constrained Nelder-Mead simplex search.
//!
//! Derivative-free downhill simplex in the classic parameterization. Every
//! trial vertex is clamped into the box, so iterates never leave it. NaN
//! objective values are ordered as worst, which keeps a poisoned vertex from
//! ever becoming the best; a run whose best value is still non-finite at
//! termination yields no result.

use std::cmp::Ordering;
use std::time::Instant;

use ndarray::Array1;

use crate::local::{LocalMethod, LocalOptions, LocalResult, LocalStatus};
use crate::problem::BoundedProblem;

// Standard simplex coefficients.
const ALPHA: f64 = 1.0; // reflection
const GAMMA: f64 = 2.0; // expansion
const RHO: f64 = 0.5; // contraction
const SIGMA: f64 = 0.5; // shrink

/// Relative perturbation used to build the initial simplex.
const SIMPLEX_DELTA: f64 = 0.05;
/// Absolute perturbation for coordinates at zero.
const SIMPLEX_DELTA_ZERO: f64 = 0.00025;
/// Objective spread below which the simplex is considered stagnant.
const FTOL_STAGNATION: f64 = 1e-14;

/// Native downhill-simplex local method.
#[derive(Debug, Clone, Copy, Default)]
pub struct NelderMead;

impl LocalMethod for NelderMead {
    fn solve(
        &self,
        problem: &BoundedProblem,
        x0: &Array1<f64>,
        opts: &LocalOptions,
    ) -> Option<LocalResult> {
        let result = minimize_simplex(problem, x0, opts);
        if result.value.is_finite() && opts.is_success(result.status) {
            Some(result)
        } else {
            None
        }
    }
}

fn minimize_simplex(
    problem: &BoundedProblem,
    x0: &Array1<f64>,
    opts: &LocalOptions,
) -> LocalResult {
    let n = problem.dim();
    let started = Instant::now();
    let mut nfev = 0usize;

    let eval = |x: &Array1<f64>, nfev: &mut usize| -> f64 {
        *nfev += 1;
        let f = problem.evaluate(x);
        if f.is_nan() {
            f64::INFINITY
        } else {
            f
        }
    };

    // Initial simplex: the start plus one perturbed vertex per coordinate.
    let mut x0c = x0.clone();
    problem.clamp_into(&mut x0c);
    let mut simplex: Vec<(Array1<f64>, f64)> = Vec::with_capacity(n + 1);
    let f0 = eval(&x0c, &mut nfev);
    simplex.push((x0c.clone(), f0));
    for d in 0..n {
        let mut v = x0c.clone();
        let step = if v[d].abs() > SIMPLEX_DELTA_ZERO {
            SIMPLEX_DELTA * v[d].abs()
        } else {
            SIMPLEX_DELTA_ZERO
        };
        // step away from the nearer face so the vertex stays distinct
        if v[d] + step <= problem.upper()[d] {
            v[d] += step;
        } else {
            v[d] -= step;
        }
        problem.clamp_into(&mut v);
        let fv = eval(&v, &mut nfev);
        simplex.push((v, fv));
    }

    let order = |a: &(Array1<f64>, f64), b: &(Array1<f64>, f64)| {
        a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal)
    };

    let status = loop {
        simplex.sort_by(order);

        if nfev >= opts.maxeval {
            break LocalStatus::MaxevalReached;
        }
        if let Some(t) = opts.maxtime {
            if started.elapsed() >= t {
                break LocalStatus::MaxtimeReached;
            }
        }

        // per-coordinate location tolerance against the best vertex
        let best = &simplex[0].0;
        let mut xtol_met = true;
        'vertices: for (v, _) in &simplex[1..] {
            for d in 0..n {
                let tol = opts.xtol_abs + opts.xtol_rel * best[d].abs();
                if (v[d] - best[d]).abs() > tol {
                    xtol_met = false;
                    break 'vertices;
                }
            }
        }
        if xtol_met {
            break LocalStatus::XtolReached;
        }

        let f_best = simplex[0].1;
        let f_worst = simplex[n].1;
        if f_best.is_finite() && f_worst - f_best <= FTOL_STAGNATION * (1.0 + f_best.abs()) {
            break LocalStatus::FtolReached;
        }

        // centroid of all vertices except the worst
        let mut centroid = Array1::<f64>::zeros(n);
        for (v, _) in &simplex[..n] {
            centroid += v;
        }
        centroid /= n as f64;

        let (worst_x, worst_f) = simplex[n].clone();

        // reflection
        let mut xr = &centroid + &((&centroid - &worst_x) * ALPHA);
        problem.clamp_into(&mut xr);
        let fr = eval(&xr, &mut nfev);

        if fr < simplex[0].1 {
            // expansion
            let mut xe = &centroid + &((&centroid - &worst_x) * GAMMA);
            problem.clamp_into(&mut xe);
            let fe = eval(&xe, &mut nfev);
            simplex[n] = if fe < fr { (xe, fe) } else { (xr, fr) };
            continue;
        }

        if fr < simplex[n - 1].1 {
            simplex[n] = (xr, fr);
            continue;
        }

        // contraction, outside or inside of the worst vertex
        let mut xc = if fr < worst_f {
            &centroid + &((&xr - &centroid) * RHO)
        } else {
            &centroid + &((&worst_x - &centroid) * RHO)
        };
        problem.clamp_into(&mut xc);
        let fc = eval(&xc, &mut nfev);
        if fc < worst_f.min(fr) {
            simplex[n] = (xc, fc);
            continue;
        }

        // shrink every vertex toward the best; convexity keeps them in the box
        let best_x = simplex[0].0.clone();
        for k in 1..=n {
            let xk = &best_x + &((&simplex[k].0 - &best_x) * SIGMA);
            let fk = eval(&xk, &mut nfev);
            simplex[k] = (xk, fk);
        }
    };

    simplex.sort_by(order);
    LocalResult {
        location: simplex[0].0.clone(),
        value: simplex[0].1,
        status,
        nfev,
    }
}
