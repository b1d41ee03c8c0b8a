//! Three-phase TikTak driver.
//!
//! Phase A evaluates a Sobol sample of the box and keeps the most promising
//! seeds. Phase B refines each retained seed with the local method, unmixed.
//! Phase C walks the sorted candidate list with a cursor, each round solving
//! every remaining candidate in parallel from a start pulled toward the
//! incumbent, then jumping the cursor to the best improver of the round.
//!
//! The coordinator owns the frontier and the incumbent; workers only ever see
//! per-round snapshots passed as plain values. Given an identical problem and
//! configuration the result is deterministic, independent of worker count.

use log::{debug, info, warn};
use ndarray::Array1;

use crate::checkpoint::Checkpoint;
use crate::error::TikTakError;
use crate::frontier::{EvaluatedPoint, Frontier};
use crate::init_sobol::init_sobol;
use crate::local::{build_local_method, LocalMethod};
use crate::parallel_eval::{evaluate_objective_batch, solve_local_batch};
use crate::problem::BoundedProblem;
use crate::pull_schedule::{mix_toward, PullSchedule};
use crate::{TikTakConfig, TikTakReport};

/// Convenience function mirroring the builder-free entry point:
/// - `func`: objective function mapping x -> f(x)
/// - `bounds`: vector of (lower, upper) pairs
/// - `config`: TikTak configuration
pub fn tiktak<F>(
    func: F,
    bounds: &[(f64, f64)],
    config: TikTakConfig,
) -> Result<TikTakReport, TikTakError>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync + 'static,
{
    let problem = BoundedProblem::from_pairs(func, bounds)?;
    TikTak::with_config(&problem, config)?.solve()
}

/// TikTak multistart coordinator
pub struct TikTak<'a> {
    problem: &'a BoundedProblem,
    config: TikTakConfig,
    local: Box<dyn LocalMethod>,
}

impl<'a> TikTak<'a> {
    /// Create a coordinator with the default configuration.
    pub fn new(problem: &'a BoundedProblem) -> Self {
        let config = TikTakConfig::default();
        let local = build_local_method(config.local_algorithm);
        Self {
            problem,
            config,
            local,
        }
    }

    /// Create a coordinator with a validated configuration.
    pub fn with_config(
        problem: &'a BoundedProblem,
        config: TikTakConfig,
    ) -> Result<Self, TikTakError> {
        config.validate()?;
        let local = build_local_method(config.local_algorithm);
        Ok(Self {
            problem,
            config,
            local,
        })
    }

    /// Mutable access to configuration
    pub fn config_mut(&mut self) -> &mut TikTakConfig {
        &mut self.config
    }

    /// Swap in a different local backend (testing seam and adapter hook).
    pub fn set_local_method(&mut self, method: Box<dyn LocalMethod>) {
        self.local = method;
    }

    /// Run the three phases and return the report.
    pub fn solve(&mut self) -> Result<TikTakReport, TikTakError> {
        self.config.validate()?;

        // Configure the global worker pool once if a thread count is pinned;
        // ignore the error if the pool is already set.
        if let Some(n) = self.config.parallel.num_threads {
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build_global();
        }

        let checkpoint = self
            .config
            .checkpoint_dir
            .as_ref()
            .map(|dir| Checkpoint::new(dir.clone()));
        let mut nfev = 0usize;

        // --- Phase A: seed evaluation ---
        let seeds = init_sobol(self.problem, self.config.quasirandom_n);
        info!(
            "phase A: evaluating {} quasirandom seeds in {} dimensions",
            seeds.len(),
            self.problem.dim()
        );
        let evaluated = evaluate_objective_batch(&self.config.parallel, self.problem, seeds);
        nfev += evaluated.len();

        let mut frontier = Frontier::new();
        frontier.insert_bulk(evaluated);
        let quasirandom_points = frontier.points().to_vec();
        if let Some(cp) = &checkpoint {
            cp.write_quasirandom_points(&quasirandom_points)?;
        }

        let initial_n = self.config.initial_n();
        frontier.keep_lowest(initial_n);
        let promising_points = frontier.into_points();
        if let Some(cp) = &checkpoint {
            cp.write_all_points(&promising_points)?;
        }
        info!(
            "phase A: retained {} promising seeds, best value {:.6e}",
            promising_points.len(),
            promising_points[0].value
        );

        // --- Phase B: parallel local refinement of seeds ---
        let opts_initial = self
            .config
            .local_options_with(self.config.local_maxeval_initial);
        let starts: Vec<Array1<f64>> = promising_points
            .iter()
            .map(|p| p.location.clone())
            .collect();
        let refined = solve_local_batch(
            &self.config.parallel,
            self.problem,
            self.local.as_ref(),
            &opts_initial,
            &starts,
        );
        let mut survivors: Vec<EvaluatedPoint> = Vec::with_capacity(refined.len());
        for result in refined.into_iter().flatten() {
            nfev += result.nfev;
            survivors.push(EvaluatedPoint {
                location: result.location,
                value: result.value,
            });
        }
        let dropped = starts.len() - survivors.len();
        if dropped > 0 {
            warn!("phase B: dropped {} failed local runs", dropped);
        }
        if survivors.is_empty() {
            return Err(TikTakError::NoViableSeeds {
                started: starts.len(),
                quasirandom_points,
            });
        }

        // Prepend points go through the seed-evaluation path, then sort with
        // the survivors; on ties they come first.
        let mut candidates = Frontier::new();
        if !self.config.prepend_points.is_empty() {
            let prepends = evaluate_objective_batch(
                &self.config.parallel,
                self.problem,
                self.config.prepend_points.clone(),
            );
            nfev += prepends.len();
            info!("phase B: merged {} prepend points", prepends.len());
            candidates.insert_bulk(prepends);
        }
        candidates.insert_bulk(survivors);
        let local_minima = candidates.into_points();
        if let Some(cp) = &checkpoint {
            cp.write_local_minima(&local_minima)?;
        }
        info!(
            "phase B: {} candidate minima, best value {:.6e}",
            local_minima.len(),
            local_minima[0].value
        );

        // --- Phase C: batched finisher ---
        let schedule = PullSchedule {
            initial_n,
            theta_min: self.config.theta_min,
            theta_max: self.config.theta_max,
            theta_pow: self.config.theta_pow,
        };
        let opts_final = self
            .config
            .local_options_with(self.config.local_maxeval_final);

        let mut incumbent = local_minima[0].clone();
        let mut cursor = 1usize;
        let mut rounds = 0usize;
        let mut message = String::new();

        while cursor < local_minima.len() {
            rounds += 1;
            let indices: Vec<usize> = (cursor..local_minima.len()).collect();
            let starts: Vec<Array1<f64>> = indices
                .iter()
                .map(|&j| {
                    mix_toward(
                        &local_minima[j].location,
                        &incumbent.location,
                        schedule.theta(j),
                    )
                })
                .collect();
            info!(
                "phase C round {}: {} starts from cursor {}, incumbent {:.6e}",
                rounds,
                starts.len(),
                cursor,
                incumbent.value
            );

            let results = solve_local_batch(
                &self.config.parallel,
                self.problem,
                self.local.as_ref(),
                &opts_final,
                &starts,
            );

            // best improver of the round; ties break to the smallest index
            let mut best: Option<(usize, EvaluatedPoint)> = None;
            for (&j, result) in indices.iter().zip(results.iter()) {
                let Some(result) = result else { continue };
                nfev += result.nfev;
                if result.value < incumbent.value {
                    let improves = match &best {
                        None => true,
                        Some((_, b)) => result.value < b.value,
                    };
                    if improves {
                        best = Some((
                            j,
                            EvaluatedPoint {
                                location: result.location.clone(),
                                value: result.value,
                            },
                        ));
                    }
                }
            }

            match best {
                Some((j_star, point)) => {
                    debug!(
                        "phase C round {}: improved {:.6e} -> {:.6e} at candidate {}",
                        rounds, incumbent.value, point.value, j_star
                    );
                    incumbent = point;
                    cursor = j_star + 1;
                }
                None => {
                    info!("phase C round {}: no improvement, stopping", rounds);
                    message = format!("no improvement in round {}", rounds);
                    break;
                }
            }
        }
        if message.is_empty() {
            message = format!("candidate list exhausted after {} rounds", rounds);
        }

        if let Some(cp) = &checkpoint {
            cp.write_global_minimum(&incumbent)?;
        }
        info!(
            "finished: incumbent {:.6e} after {} rounds, {} evaluations",
            incumbent.value, rounds, nfev
        );

        Ok(TikTakReport {
            quasirandom_points,
            promising_points,
            local_minima,
            x: incumbent.location,
            fun: incumbent.value,
            rounds,
            nfev,
            message,
        })
    }
}
