// Worked examples from the morphological metrics literature

use morphmetric_lib::{
    MagnitudeOptions, Morph, MorphologicalMetric, OlmOptions, Scaling, ScalingOptions,
};

fn morph(data: &[f64]) -> Morph {
    let _ = env_logger::builder().is_test(true).try_init();
    Morph::new(data.to_vec()).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn absolute_intervals() {
    let m = morph(&[0.0, 2.0, 4.0, 1.0, 0.0]);
    assert_eq!(m.first_order_absolute_interval(), vec![2.0, 2.0, 3.0, 1.0]);
    assert_eq!(m.second_order_absolute_interval().unwrap(), vec![0.0, 1.0, 2.0]);
}

#[test]
fn direction_interval_reports_falls_as_positive() {
    let m = morph(&[0.0, 2.0, 5.0, 4.0, 1.0]);
    assert_eq!(m.direction_interval(), vec![-1.0, -1.0, 1.0, 1.0]);
}

#[test]
fn magnitude_metric_options() {
    let m = morph(&[0.0, 2.0, 5.0, 2.0, 1.0]);
    let n = morph(&[4.0, 4.0, 1.0, 6.0, 2.0]);
    let metric = MorphologicalMetric::new(&m, &n).unwrap();

    assert_close(metric.magnitude_metric(&MagnitudeOptions::default()).unwrap(), 1.75);
    assert_close(
        metric
            .magnitude_metric(&MagnitudeOptions {
                normalized: false,
                ..MagnitudeOptions::default()
            })
            .unwrap(),
        7.0,
    );
    assert_close(
        metric
            .magnitude_metric(&MagnitudeOptions {
                absolute: false,
                ..MagnitudeOptions::default()
            })
            .unwrap(),
        0.75,
    );
}

#[test]
fn linear_and_combinatorial_magnitudes() {
    let m = morph(&[1.0, 6.0, 2.0, 5.0, 11.0]);
    let n = morph(&[3.0, 15.0, 13.0, 2.0, 9.0]);
    let metric = MorphologicalMetric::new(&m, &n).unwrap();

    assert_close(metric.olm_canonical().unwrap(), 4.5);
    assert_close(metric.ulm(&ScalingOptions::default()).unwrap(), 3.5);
    assert_close(metric.ocm(&ScalingOptions::default()).unwrap(), 5.2);
    assert_close(metric.ucm(&ScalingOptions::default()).unwrap(), 2.4);

    // largest combinatorial magnitude across both operands is 13
    let absolute = ScalingOptions {
        scaling: Scaling::Absolute,
    };
    assert_close(metric.ocm(&absolute).unwrap(), 0.4);
    assert_close(metric.ucm(&absolute).unwrap(), 2.4 / 13.0);
}

#[test]
fn olm_scaling_modes() {
    let m = morph(&[1.0, 5.0, 12.0, 2.0, 9.0, 6.0]);
    let n = morph(&[7.0, 6.0, 4.0, 9.0, 8.0, 1.0]);
    let metric = MorphologicalMetric::new(&m, &n).unwrap();

    assert_close(metric.olm(&OlmOptions::scaled(Scaling::None)).unwrap(), 4.6);
    assert_close(metric.olm(&OlmOptions::scaled(Scaling::Absolute)).unwrap(), 0.46);
    assert_close(
        metric
            .ucm(&ScalingOptions {
                scaling: Scaling::None,
            })
            .unwrap(),
        1.6,
    );
}

#[test]
fn morris_ranking() {
    assert_eq!(morph(&[1.0, 3.0, 7.0, 2.0, 5.0]).morris_ranking(), vec![1, 3, 5, 2, 4]);
}
