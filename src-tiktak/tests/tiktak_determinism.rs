use tiktak::{tiktak, TikTakConfig, TikTakConfigBuilder};
use tiktak_testfunctions::rosenbrock;

fn config() -> TikTakConfig {
    TikTakConfigBuilder::new()
        .quasirandom_n(400)
        .keep_ratio(0.1)
        .local_maxeval_initial(120)
        .local_maxeval_final(120)
        .build()
}

const BOUNDS: [(f64, f64); 2] = [(-2.048, 2.048), (-2.048, 2.048)];

#[test]
fn test_identical_runs_are_bitwise_identical() {
    let a = tiktak(rosenbrock, &BOUNDS, config()).unwrap();
    let b = tiktak(rosenbrock, &BOUNDS, config()).unwrap();

    assert_eq!(a.fun, b.fun);
    assert_eq!(a.x, b.x);
    assert_eq!(a.rounds, b.rounds);
    assert_eq!(a.quasirandom_points.len(), b.quasirandom_points.len());
    for (pa, pb) in a
        .quasirandom_points
        .iter()
        .zip(b.quasirandom_points.iter())
    {
        assert_eq!(pa.location, pb.location);
        assert_eq!(pa.value, pb.value);
    }
}

#[test]
fn test_worker_count_does_not_change_the_result() {
    let parallel = tiktak(rosenbrock, &BOUNDS, config()).unwrap();

    let mut sequential_cfg = config();
    sequential_cfg.parallel.enabled = false;
    let sequential = tiktak(rosenbrock, &BOUNDS, sequential_cfg).unwrap();

    assert_eq!(parallel.fun, sequential.fun);
    assert_eq!(parallel.x, sequential.x);
    assert_eq!(parallel.rounds, sequential.rounds);
    for (pa, pb) in parallel
        .local_minima
        .iter()
        .zip(sequential.local_minima.iter())
    {
        assert_eq!(pa.location, pb.location);
        assert_eq!(pa.value, pb.value);
    }
}
