//! Curve Tests - Closed Catmull-Rom Playback

use glam::Vec3;
use island_flight_engine::physics::{
    ClosedCurve, CurveError, evaluate_closed_curve, evaluate_closed_curve_derivative,
};
use island_flight_engine::world::layout::{HELICOPTER_CURVE, TOUR_CURVE};

fn assert_vec_near(a: Vec3, b: Vec3, eps: f32) {
    assert!((a - b).length() < eps, "{:?} != {:?}", a, b);
}

#[test]
fn test_curve_passes_through_control_points() {
    let curve = ClosedCurve::from_slice(&HELICOPTER_CURVE).unwrap();
    for (i, point) in HELICOPTER_CURVE.iter().enumerate() {
        assert_vec_near(curve.position(i as f32), *point, 1e-4);
    }
}

#[test]
fn test_curve_is_periodic() {
    for points in [&HELICOPTER_CURVE[..], &TOUR_CURVE[..]] {
        let curve = ClosedCurve::from_slice(points).unwrap();
        let period = curve.period();
        for t in [0.0, 0.25, 1.5, 3.75, 7.1] {
            assert_vec_near(curve.position(t), curve.position(t + period), 1e-3);
            assert_vec_near(curve.derivative(t), curve.derivative(t + period), 1e-3);
        }
    }
}

#[test]
fn test_negative_parameter_wraps() {
    let curve = ClosedCurve::from_slice(&TOUR_CURVE).unwrap();
    assert_vec_near(curve.position(-0.5), curve.position(curve.period() - 0.5), 1e-3);
}

#[test]
fn test_curve_is_continuous_across_segments() {
    let curve = ClosedCurve::from_slice(&HELICOPTER_CURVE).unwrap();
    let eps = 1e-4;
    for k in 1..HELICOPTER_CURVE.len() {
        let t = k as f32;
        assert_vec_near(curve.position(t - eps), curve.position(t), 0.05);
        assert_vec_near(curve.derivative(t - eps), curve.derivative(t), 0.1);
    }
}

#[test]
fn test_tangent_is_unit_length() {
    let curve = ClosedCurve::from_slice(&TOUR_CURVE).unwrap();
    for i in 0..40 {
        let t = i as f32 * 0.25;
        assert!((curve.tangent(t).length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_too_few_points_rejected() {
    let points = [Vec3::ZERO, Vec3::X, Vec3::Z];
    assert_eq!(evaluate_closed_curve(&points, 0.5), Err(CurveError::TooFewPoints(3)));
    assert_eq!(
        evaluate_closed_curve_derivative(&points, 0.5),
        Err(CurveError::TooFewPoints(3))
    );
    assert!(ClosedCurve::from_slice(&points).is_err());
}

#[test]
fn test_free_functions_match_curve() {
    let curve = ClosedCurve::from_slice(&HELICOPTER_CURVE).unwrap();
    let t = 4.3;
    assert_eq!(evaluate_closed_curve(&HELICOPTER_CURVE, t).unwrap(), curve.position(t));
    assert_eq!(
        evaluate_closed_curve_derivative(&HELICOPTER_CURVE, t).unwrap(),
        curve.derivative(t)
    );
}
