use crate::error::Result;
use crate::math::{Point2, Vector2};
use crate::transform::Transform;

use super::{Curve, CurveDomain};

/// A cubic Bézier segment with four control points.
#[derive(Debug, Clone)]
pub struct CubicBezier {
    points: [Point2; 4],
    domain: CurveDomain,
}

impl CubicBezier {
    /// Creates a Bézier segment parametrized over `[0, 1]`.
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self {
            points,
            domain: CurveDomain::unit(),
        }
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// Applies `transform` to every control point, keeping the domain.
    #[must_use]
    pub fn transformed(&self, transform: &dyn Transform) -> Self {
        Self {
            points: self.points.map(|p| transform.transform_point2(&p)),
            domain: self.domain,
        }
    }

    /// Resolves `t` and returns the Bernstein parameter `u` with `du/dt`.
    fn local(&self, t: f64) -> Result<(f64, f64)> {
        let t = self.domain.resolve(t, false)?;
        Ok((self.domain.normalize(t), 1.0 / self.domain.span()))
    }
}

#[allow(clippy::many_single_char_names)]
impl Curve for CubicBezier {
    fn domain(&self) -> CurveDomain {
        self.domain
    }

    fn set_domain(&mut self, domain: CurveDomain) -> Result<()> {
        domain.validate()?;
        self.domain = domain;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn position(&self, t: f64) -> Result<Point2> {
        let (u, _) = self.local(t)?;
        let [p0, p1, p2, p3] = self.points.map(|p| p.coords);
        let v = 1.0 - u;
        let coords =
            p0 * (v * v * v) + p1 * (3.0 * v * v * u) + p2 * (3.0 * v * u * u) + p3 * (u * u * u);
        Ok(Point2::from(coords))
    }

    fn first_derivative(&self, t: f64) -> Result<Vector2> {
        let (u, s) = self.local(t)?;
        let [p0, p1, p2, p3] = self.points;
        let v = 1.0 - u;
        let d = (p1 - p0) * (v * v) + (p2 - p1) * (2.0 * v * u) + (p3 - p2) * (u * u);
        Ok(d * (3.0 * s))
    }

    fn second_derivative(&self, t: f64) -> Result<Vector2> {
        let (u, s) = self.local(t)?;
        let [p0, p1, p2, p3] = self.points.map(|p| p.coords);
        let d = (p2 - p1 * 2.0 + p0) * (1.0 - u) + (p3 - p2 * 2.0 + p1) * u;
        Ok(d * (6.0 * s * s))
    }

    fn third_derivative(&self, t: f64) -> Result<Vector2> {
        let (_, s) = self.local(t)?;
        let [p0, p1, p2, p3] = self.points.map(|p| p.coords);
        Ok((p3 - p2 * 3.0 + p1 * 3.0 - p0) * (6.0 * s * s * s))
    }
}
