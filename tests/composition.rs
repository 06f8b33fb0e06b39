#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::Arc;

use approx::assert_relative_eq;
use geokernel::geometry::{ArcSegment, ComposedCurve, CubicBezier, Curve, LineSegment, Segmented};
use geokernel::math::{Point2, Point3, Vector2, Vector3};
use geokernel::transform::{
    rotation, rotation_z, same_transform, scaling, translation, IdentityTransform, Transform,
};
use geokernel::ErrorKind;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Rounded rectangle: four straight sides joined by quarter arcs.
fn rounded_rect(width: f64, height: f64, r: f64) -> ComposedCurve {
    let mut curve = ComposedCurve::new();
    let (w, h) = (width, height);
    curve
        .add(LineSegment::new(Point2::new(r, 0.0), Point2::new(w - r, 0.0)).unwrap())
        .unwrap();
    curve
        .add(ArcSegment::new(Point2::new(w - r, r), r, -FRAC_PI_2, FRAC_PI_2).unwrap())
        .unwrap();
    curve
        .add(LineSegment::new(Point2::new(w, r), Point2::new(w, h - r)).unwrap())
        .unwrap();
    curve
        .add(ArcSegment::new(Point2::new(w - r, h - r), r, 0.0, FRAC_PI_2).unwrap())
        .unwrap();
    curve
        .add(LineSegment::new(Point2::new(w - r, h), Point2::new(r, h)).unwrap())
        .unwrap();
    curve
        .add(ArcSegment::new(Point2::new(r, h - r), r, FRAC_PI_2, FRAC_PI_2).unwrap())
        .unwrap();
    curve
        .add(LineSegment::new(Point2::new(0.0, h - r), Point2::new(0.0, r)).unwrap())
        .unwrap();
    curve
        .add(ArcSegment::new(Point2::new(r, r), r, PI, FRAC_PI_2).unwrap())
        .unwrap();
    curve.set_closed(true);
    curve
}

#[test]
fn rounded_rectangle_is_continuous_and_closed() {
    init_tracing();
    let curve = rounded_rect(4.0, 3.0, 0.5);
    assert_eq!(curve.segment_count(), 8);
    assert_relative_eq!(curve.t_max(), 8.0);

    // Consecutive segments meet at their shared parameter.
    for i in 0..curve.segment_count() - 1 {
        let left = curve.segment(i).unwrap();
        let right = curve.segment(i + 1).unwrap();
        assert_eq!(left.t_max().to_bits(), right.t_min().to_bits());
        let a = left.position(left.t_max()).unwrap();
        let b = right.position(right.t_min()).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    // The loop closes on itself.
    assert_relative_eq!(
        curve.position(8.0).unwrap(),
        curve.position(0.0).unwrap(),
        epsilon = 1e-12
    );

    let perimeter = 2.0 * (3.0 + 2.0) + TAU * 0.5;
    assert_relative_eq!(curve.total_length().unwrap(), perimeter, epsilon = 1e-9);

    // Every corner turns left with curvature 1 / r.
    for corner in [1.5, 3.5, 5.5, 7.5] {
        assert_relative_eq!(curve.curvature(corner).unwrap(), 2.0, epsilon = 1e-12);
    }
    assert_relative_eq!(curve.curvature(0.5).unwrap(), 0.0);
}

#[test]
fn transformed_points_feed_segments() {
    init_tracing();
    let place: Arc<dyn Transform> = Arc::new(translation(&Vector3::new(10.0, 0.0, 0.0)));
    let turn: Arc<dyn Transform> = Arc::new(rotation_z(FRAC_PI_2));
    let both = Arc::clone(&place).concat(Arc::clone(&turn)).unwrap();

    let base = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
    let moved = base.transformed(both.as_ref()).unwrap();
    assert_relative_eq!(*moved.start(), Point2::new(10.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(*moved.end(), Point2::new(10.0, 1.0), epsilon = 1e-12);

    let bezier = CubicBezier::new([
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ]);
    let mut curve = ComposedCurve::new();
    curve.add(moved).unwrap();
    curve.add(bezier.transformed(both.as_ref())).unwrap();

    // The tangent direction of the rotated line is +y.
    assert_relative_eq!(
        curve.tangent(0.5).unwrap(),
        Vector2::new(0.0, 1.0),
        epsilon = 1e-12
    );

    // Undo the placement and recover the original bezier start.
    let undo = Arc::clone(&both).inverse().unwrap();
    let start = curve.position(1.0).unwrap();
    assert_relative_eq!(
        undo.transform_point2(&start),
        Point2::origin(),
        epsilon = 1e-12
    );
}

#[test]
fn inverse_round_trip_is_reference_identical() {
    init_tracing();
    let t: Arc<dyn Transform> = Arc::new(
        rotation(&Point3::new(1.0, 2.0, 3.0), &Vector3::new(0.0, 1.0, 1.0), 0.8).unwrap(),
    );
    let inverse = Arc::clone(&t).inverse().unwrap();
    assert!(same_transform(&Arc::clone(&inverse).inverse().unwrap(), &t));
    assert!(same_transform(&Arc::clone(&t).inverse().unwrap(), &inverse));

    let p = Point3::new(-1.0, 4.0, 0.5);
    let back = inverse.transform_point(&t.transform_point(&p));
    assert_relative_eq!(back, p, epsilon = 1e-12);
}

#[test]
fn identity_laws_and_failures() {
    let identity = IdentityTransform::shared();
    let squash: Arc<dyn Transform> = Arc::new(scaling(1.0, 1.0, 0.0));

    let left = Arc::clone(&identity).concat(Arc::clone(&squash)).unwrap();
    let right = Arc::clone(&squash).concat(Arc::clone(&identity)).unwrap();
    assert!(same_transform(&left, &squash));
    assert!(same_transform(&right, &squash));

    let err = squash.inverse().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArithmeticError);
    assert_eq!(err.to_string(), "matrix is singular");
}

#[test]
fn composed_curve_queries_respect_domain() {
    let mut curve = ComposedCurve::new();
    curve
        .add(LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap())
        .unwrap();
    curve
        .add(LineSegment::new(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)).unwrap())
        .unwrap();

    let err = curve.position(2.5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    curve.set_closed(true);
    assert_relative_eq!(curve.position(2.5).unwrap(), Point2::new(0.5, 0.0));

    let points = curve.sample(5).unwrap();
    assert_eq!(points.len(), 5);
    assert_relative_eq!(points[2], Point2::new(1.0, 0.0));
}
