use ndarray::Array1;
use tiktak::{
    BoundedProblem, LocalMethod, LocalOptions, LocalResult, NelderMead, TikTak, TikTakConfigBuilder,
    TikTakError,
};
use tiktak_testfunctions::rosenbrock;

/// Backend wrapper that deterministically refuses most starts, standing in
/// for a flaky cluster where local runs die or report failure statuses.
struct FlakyMethod {
    inner: NelderMead,
    /// Accept roughly one start in `keep_one_in`.
    keep_one_in: u64,
}

impl LocalMethod for FlakyMethod {
    fn solve(
        &self,
        problem: &BoundedProblem,
        x0: &Array1<f64>,
        opts: &LocalOptions,
    ) -> Option<LocalResult> {
        if self.keep_one_in == 0 || x0[0].to_bits() % self.keep_one_in != 0 {
            return None;
        }
        self.inner.solve(problem, x0, opts)
    }
}

/// Backend that never produces a result.
struct AlwaysFail;

impl LocalMethod for AlwaysFail {
    fn solve(
        &self,
        _problem: &BoundedProblem,
        _x0: &Array1<f64>,
        _opts: &LocalOptions,
    ) -> Option<LocalResult> {
        None
    }
}

fn config() -> tiktak::TikTakConfig {
    TikTakConfigBuilder::new()
        .quasirandom_n(500)
        .keep_ratio(0.5)
        .local_maxeval_initial(150)
        .local_maxeval_final(150)
        .build()
}

#[test]
fn test_solve_survives_mostly_failing_local_runs() {
    let problem =
        BoundedProblem::from_pairs(rosenbrock, &[(-2.0, 2.0), (-2.0, 2.0)]).unwrap();
    let mut solver = TikTak::with_config(&problem, config()).unwrap();
    solver.set_local_method(Box::new(FlakyMethod {
        inner: NelderMead,
        keep_one_in: 10,
    }));

    let report = solver.solve().unwrap();
    assert!(report.fun.is_finite());
    assert!(
        report.local_minima.len() < 250,
        "most runs should have been dropped: {}",
        report.local_minima.len()
    );
    assert!(!report.local_minima.is_empty());
}

#[test]
fn test_total_local_failure_is_no_viable_seeds() {
    let problem =
        BoundedProblem::from_pairs(rosenbrock, &[(-2.0, 2.0), (-2.0, 2.0)]).unwrap();
    let mut solver = TikTak::with_config(&problem, config()).unwrap();
    solver.set_local_method(Box::new(AlwaysFail));

    match solver.solve() {
        Err(TikTakError::NoViableSeeds {
            started,
            quasirandom_points,
        }) => {
            assert_eq!(started, 250);
            // the seed evaluations are preserved for diagnosis
            assert_eq!(quasirandom_points.len(), 500);
        }
        other => panic!("expected NoViableSeeds, got {:?}", other.map(|r| r.fun)),
    }
}
