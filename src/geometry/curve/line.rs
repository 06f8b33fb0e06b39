use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::transform::Transform;

use super::{Curve, CurveDomain};

/// A straight segment from `start` to `end`.
///
/// The parametric form is `P(t) = start + u * (end - start)` where
/// `u = (t - t_min) / (t_max - t_min)`.
#[derive(Debug, Clone)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
    domain: CurveDomain,
}

impl LineSegment {
    /// Creates a segment parametrized over `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        Self::with_domain(start, end, CurveDomain::unit())
    }

    /// Creates a segment parametrized over `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide or the domain is invalid.
    pub fn with_domain(start: Point2, end: Point2, domain: CurveDomain) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::InvalidArgument(
                "line segment endpoints must differ".into(),
            )
            .into());
        }
        domain.validate()?;
        Ok(Self { start, end, domain })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Applies `transform` to both endpoints, keeping the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform collapses the segment to a point.
    pub fn transformed(&self, transform: &dyn Transform) -> Result<Self> {
        Self::with_domain(
            transform.transform_point2(&self.start),
            transform.transform_point2(&self.end),
            self.domain,
        )
    }

    fn velocity(&self) -> Vector2 {
        (self.end - self.start) / self.domain.span()
    }
}

impl Curve for LineSegment {
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
        let u = self.domain.normalize(self.domain.resolve(t, false)?);
        Ok(self.start + (self.end - self.start) * u)
    }

    fn first_derivative(&self, t: f64) -> Result<Vector2> {
        self.domain.resolve(t, false)?;
        Ok(self.velocity())
    }

    fn second_derivative(&self, t: f64) -> Result<Vector2> {
        self.domain.resolve(t, false)?;
        Ok(Vector2::zeros())
    }

    fn third_derivative(&self, t: f64) -> Result<Vector2> {
        self.domain.resolve(t, false)?;
        Ok(Vector2::zeros())
    }

    fn curvature(&self, t: f64) -> Result<f64> {
        self.domain.resolve(t, false)?;
        Ok(0.0)
    }

    fn length(&self, t0: f64, t1: f64) -> Result<f64> {
        let t0 = self.domain.resolve(t0, false)?;
        let t1 = self.domain.resolve(t1, false)?;
        Ok(self.velocity().norm() * (t1 - t0).abs())
    }
}
