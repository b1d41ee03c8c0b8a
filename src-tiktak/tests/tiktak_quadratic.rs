use ndarray::Array1;
use tiktak::{tiktak, Checkpoint, TikTakConfigBuilder};
use tiktak_testfunctions::shifted_quadratic;

#[test]
fn test_tiktak_quadratic_bowl_3d() {
    let center = Array1::from(vec![0.3, -0.7, 1.1]);
    let c = center.clone();
    let objective = move |x: &Array1<f64>| shifted_quadratic(x, &c);

    let scratch = std::env::temp_dir().join(format!("tiktak-quadratic-{}", std::process::id()));
    let bounds = vec![(-5.0, 5.0); 3];
    let config = TikTakConfigBuilder::new()
        .quasirandom_n(2000)
        .keep_ratio(0.1)
        .local_maxeval_initial(400)
        .local_maxeval_final(400)
        .checkpoint_dir(&scratch)
        .build();

    let report = tiktak(objective, &bounds, config).unwrap();

    assert!(report.fun < 1e-10, "function value too high: {}", report.fun);
    for d in 0..3 {
        assert!(
            (report.x[d] - center[d]).abs() < 1e-5,
            "x[{}] should be close to {}: {}",
            d,
            center[d],
            report.x[d]
        );
    }

    // the four artefacts reload to exactly what the run produced
    let cp = Checkpoint::new(&scratch);
    let quasirandom = cp.load_quasirandom_points().unwrap();
    assert_eq!(quasirandom.len(), report.quasirandom_points.len());
    for (a, b) in quasirandom.iter().zip(report.quasirandom_points.iter()) {
        assert_eq!(a.location, b.location);
        assert_eq!(a.value, b.value);
    }

    let all_points = cp.load_all_points().unwrap();
    assert_eq!(all_points.len(), report.promising_points.len());

    let minima = cp.load_local_minima().unwrap();
    assert_eq!(minima.len(), report.local_minima.len());
    assert_eq!(minima[0].value, report.local_minima[0].value);

    let global = cp.load_global_minimum().unwrap();
    assert_eq!(global.location, report.x);
    assert_eq!(global.value, report.fun);

    std::fs::remove_dir_all(&scratch).ok();
}
