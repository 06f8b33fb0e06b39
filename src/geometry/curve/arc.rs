use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::arc_from_bulge;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc in the plane.
///
/// Sweeps from `start_angle` by the signed `sweep` (positive is
/// counter-clockwise) as `t` runs across the domain:
/// `P(t) = center + radius * (cos θ, sin θ)` with
/// `θ = start_angle + sweep * (t - t_min) / (t_max - t_min)`.
#[derive(Debug, Clone)]
pub struct ArcSegment {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    domain: CurveDomain,
}

impl ArcSegment {
    /// Creates an arc parametrized over `[0, 1]`.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Angle of the start point in radians
    /// * `sweep` - Signed sweep in radians, at most one full turn
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the sweep is zero,
    /// non-finite, or more than a full turn.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if radius.is_nan() || radius < TOLERANCE {
            return Err(GeometryError::InvalidArgument("arc radius must be positive".into()).into());
        }
        if !sweep.is_finite() || sweep.abs() < TOLERANCE || sweep.abs() > TAU + TOLERANCE {
            return Err(GeometryError::InvalidArgument(format!(
                "arc sweep {sweep} must be non-zero and at most a full turn"
            ))
            .into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
            domain: CurveDomain::unit(),
        })
    }

    /// Creates a full counter-clockwise circle starting at angle zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Self::new(center, radius, 0.0, TAU)
    }

    /// Creates the arc from `start` to `end` with `bulge = tan(sweep / 4)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chord is degenerate or the bulge is zero.
    pub fn from_bulge(start: &Point2, end: &Point2, bulge: f64) -> Result<Self> {
        let arc = arc_from_bulge(start, end, bulge).ok_or_else(|| {
            GeometryError::InvalidArgument(
                "bulge arc needs distinct endpoints and non-zero bulge".into(),
            )
        })?;
        Self::new(arc.center, arc.radius, arc.start_angle, arc.sweep)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the signed sweep angle.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Angular speed `dθ/dt`.
    fn omega(&self) -> f64 {
        self.sweep / self.domain.span()
    }

    /// Returns `(cos θ, sin θ)` at a resolved parameter.
    fn direction(&self, t: f64) -> Result<Vector2> {
        let t = self.domain.resolve(t, self.is_closed())?;
        let theta = self.start_angle + self.sweep * self.domain.normalize(t);
        Ok(Vector2::new(theta.cos(), theta.sin()))
    }
}

impl Curve for ArcSegment {
    fn domain(&self) -> CurveDomain {
        self.domain
    }

    fn set_domain(&mut self, domain: CurveDomain) -> Result<()> {
        domain.validate()?;
        self.domain = domain;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < TOLERANCE
    }

    fn position(&self, t: f64) -> Result<Point2> {
        Ok(self.center + self.direction(t)? * self.radius)
    }

    fn first_derivative(&self, t: f64) -> Result<Vector2> {
        let d = self.direction(t)?;
        Ok(Vector2::new(-d.y, d.x) * (self.radius * self.omega()))
    }

    fn second_derivative(&self, t: f64) -> Result<Vector2> {
        let w = self.omega();
        Ok(self.direction(t)? * (-self.radius * w * w))
    }

    fn third_derivative(&self, t: f64) -> Result<Vector2> {
        let d = self.direction(t)?;
        let w = self.omega();
        Ok(Vector2::new(d.y, -d.x) * (self.radius * w * w * w))
    }

    fn curvature(&self, t: f64) -> Result<f64> {
        self.direction(t)?;
        Ok(self.sweep.signum() / self.radius)
    }

    fn length(&self, t0: f64, t1: f64) -> Result<f64> {
        let closed = self.is_closed();
        let t0 = self.domain.resolve(t0, closed)?;
        let t1 = self.domain.resolve(t1, closed)?;
        Ok(self.radius * self.omega().abs() * (t1 - t0).abs())
    }
}
