//! Circular-arc math in the plane.
//!
//! Bulge convention: `bulge = tan(sweep / 4)`.
//! - `bulge = 0`: straight chord
//! - `bulge > 0`: counter-clockwise arc
//! - `bulge < 0`: clockwise arc
//! - `|bulge| = 1`: semicircle
use std::f64::consts::TAU;

use super::{Point2, Vector2Algebra};

/// Center-radius-angle description of a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep; positive is counter-clockwise.
    pub sweep: f64,
}

/// Converts a bulge-defined arc from `p0` to `p1` to center-radius-angle form.
///
/// Returns `None` for a zero-length chord or a zero bulge, neither of which
/// describes an arc.
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<ArcParams> {
    let chord = p1 - p0;
    let chord_len = chord.norm();
    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Signed distance from chord midpoint to center, along the left normal.
    let offset = (1.0 - bulge * bulge) / (2.0 * bulge) * (chord_len * 0.5);
    let left = chord.perp_left() / chord_len;
    let center = nalgebra::center(p0, p1) + left * offset;

    // r = d*(1+b²)/(4*|b|) from r = d/(2*sin(θ/2)) with θ = 4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0 - center).heading();

    Some(ArcParams {
        center,
        radius,
        start_angle,
        sweep: 4.0 * bulge.atan(),
    })
}

/// Converts arc endpoints and center back to a bulge value.
///
/// `ccw` selects the counter-clockwise arc between the endpoints.
#[must_use]
pub fn bulge_from_arc(p0: &Point2, p1: &Point2, center: &Point2, ccw: bool) -> f64 {
    let mut sweep = (p0 - center).angle_to(&(p1 - center));
    if ccw {
        if sweep < 0.0 {
            sweep += TAU;
        }
    } else if sweep > 0.0 {
        sweep -= TAU;
    }
    (sweep / 4.0).tan()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn semicircle_from_unit_bulge() {
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(-1.0, 0.0), 1.0)
            .unwrap();
        assert!(arc.center.coords.norm() < 1e-12);
        assert!((arc.radius - 1.0).abs() < 1e-12);
        assert!(arc.start_angle.abs() < 1e-12);
        assert!((arc.sweep - PI).abs() < 1e-12);
    }

    #[test]
    fn negative_bulge_sweeps_clockwise() {
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(-1.0, 0.0), -1.0)
            .unwrap();
        assert!((arc.sweep + PI).abs() < 1e-12);
        assert!(arc.center.coords.norm() < 1e-12);
    }

    #[test]
    fn quarter_arc_round_trip() {
        let p0 = Point2::new(1.0, 0.0);
        let p1 = Point2::new(0.0, 1.0);
        let bulge = bulge_from_arc(&p0, &p1, &Point2::origin(), true);
        assert!((bulge - (PI / 8.0).tan()).abs() < 1e-12);

        let arc = arc_from_bulge(&p0, &p1, bulge).unwrap();
        assert!(arc.center.coords.norm() < 1e-9);
        assert!((arc.radius - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let p = Point2::new(2.0, 3.0);
        assert!(arc_from_bulge(&p, &p, 0.5).is_none());
        assert!(arc_from_bulge(&p, &Point2::new(3.0, 3.0), 0.0).is_none());
    }
}
