mod arc;
mod bezier;
mod composed;
mod integrate;
mod line;
mod segmented;

use std::fmt;

pub use arc::ArcSegment;
pub use bezier::CubicBezier;
pub use composed::ComposedCurve;
pub use integrate::{arc_length, LengthSettings};
pub use line::LineSegment;
pub use segmented::Segmented;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, Vector2Algebra, VectorAlgebra, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit interval `[0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Returns whether `t` lies in the domain, allowing [`TOLERANCE`] slack.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min - TOLERANCE && t <= self.t_max + TOLERANCE
    }

    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }

    /// Reduces `t` modulo the span into `[t_min, t_max)`.
    #[must_use]
    pub fn wrap(&self, t: f64) -> f64 {
        let wrapped = self.t_min + (t - self.t_min).rem_euclid(self.span());
        // rem_euclid can round up to exactly the span.
        if wrapped >= self.t_max {
            self.t_min
        } else {
            wrapped
        }
    }

    /// Fraction of the way from `t_min` to `t_max`.
    #[must_use]
    pub fn normalize(&self, t: f64) -> f64 {
        (t - self.t_min) / self.span()
    }

    /// Maps `t` linearly from this domain onto `target`.
    #[must_use]
    pub fn remap(&self, t: f64, target: &CurveDomain) -> f64 {
        target.t_min + self.normalize(t) * target.span()
    }

    /// Resolves a query parameter: values inside the domain are clamped onto
    /// it, values outside are wrapped when `closed` and rejected otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for an out-of-domain
    /// parameter on an open curve, including NaN.
    pub fn resolve(&self, t: f64, closed: bool) -> Result<f64> {
        if self.contains(t) {
            Ok(self.clamp(t))
        } else if closed && t.is_finite() {
            Ok(self.wrap(t))
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into())
        }
    }

    /// Checks that the domain is finite and strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSegment`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.t_min.is_finite() || !self.t_max.is_finite() {
            return Err(GeometryError::InvalidSegment(format!(
                "parameter interval [{}, {}] must be finite",
                self.t_min, self.t_max
            ))
            .into());
        }
        if self.t_max <= self.t_min {
            return Err(GeometryError::InvalidSegment(format!(
                "parameter interval [{}, {}] must be increasing",
                self.t_min, self.t_max
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        Self::unit()
    }
}

/// Position, unit tangent and left normal at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Point2,
    pub tangent: Vector2,
    /// Tangent rotated by +90°.
    pub normal: Vector2,
}

/// A parametric curve in the plane.
///
/// Implementors provide the domain, position and the first three derivatives
/// with respect to `t`; the differential-geometric queries are derived from
/// those. Degenerate points (zero speed) yield NaN directions rather than
/// errors.
pub trait Curve: fmt::Debug {
    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Reparametrizes the curve onto `domain` without changing its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is not finite and increasing.
    fn set_domain(&mut self, domain: CurveDomain) -> Result<()>;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn position(&self, t: f64) -> Result<Point2>;

    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn first_derivative(&self, t: f64) -> Result<Vector2>;

    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn second_derivative(&self, t: f64) -> Result<Vector2>;

    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn third_derivative(&self, t: f64) -> Result<Vector2>;

    fn t_min(&self) -> f64 {
        self.domain().t_min
    }

    fn t_max(&self) -> f64 {
        self.domain().t_max
    }

    /// Unit tangent in the direction of increasing `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn tangent(&self, t: f64) -> Result<Vector2> {
        Ok(self.first_derivative(t)?.normalized())
    }

    /// Unit tangent rotated by +90°.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn left_normal(&self, t: f64) -> Result<Vector2> {
        Ok(self.tangent(t)?.perp_left())
    }

    /// Signed curvature `(x'y'' - y'x'') / (x'² + y'²)^(3/2)`.
    ///
    /// Positive when the curve turns left (counter-clockwise).
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn curvature(&self, t: f64) -> Result<f64> {
        let d1 = self.first_derivative(t)?;
        let d2 = self.second_derivative(t)?;
        let speed = VectorAlgebra::length(&d1);
        Ok(d1.perp_dot(&d2) / (speed * speed * speed))
    }

    /// Magnitude of the first derivative.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn speed(&self, t: f64) -> Result<f64> {
        Ok(VectorAlgebra::length(&self.first_derivative(t)?))
    }

    /// Arc length between two parameter values. Always non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is out of range.
    fn length(&self, t0: f64, t1: f64) -> Result<f64> {
        arc_length(self, t0, t1, &LengthSettings::default())
    }

    /// Arc length of the whole curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated over its domain.
    fn total_length(&self) -> Result<f64> {
        let domain = self.domain();
        self.length(domain.t_min, domain.t_max)
    }

    /// Position, tangent and normal from a single derivative evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range on an open curve.
    fn frame(&self, t: f64) -> Result<Frame> {
        let position = self.position(t)?;
        let tangent = self.first_derivative(t)?.normalized();
        Ok(Frame {
            position,
            tangent,
            normal: tangent.perp_left(),
        })
    }

    /// Parameter at arc length `s` from `t_min`, clamped to the domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated over its domain.
    fn parameter_at_length(&self, s: f64) -> Result<f64> {
        let domain = self.domain();
        if s <= 0.0 {
            return Ok(domain.t_min);
        }
        if s >= self.total_length()? {
            return Ok(domain.t_max);
        }

        let (mut lo, mut hi) = (domain.t_min, domain.t_max);
        for _ in 0..60 {
            let mid = 0.5 * (lo + hi);
            let arc = self.length(domain.t_min, mid)?;
            if (arc - s).abs() < TOLERANCE {
                return Ok(mid);
            }
            if arc < s {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(0.5 * (lo + hi))
    }

    /// Samples `n` points evenly spaced in parameter (at least two).
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be evaluated over its domain.
    fn sample(&self, n: usize) -> Result<Vec<Point2>> {
        let n = n.max(2);
        let domain = self.domain();
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let u = i as f64 / (n - 1) as f64;
                self.position(domain.t_min + u * domain.span())
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, KernelError};

    #[test]
    fn resolve_inside_and_outside() {
        let d = CurveDomain::new(1.0, 3.0);
        assert!((d.resolve(2.5, false).unwrap() - 2.5).abs() < f64::EPSILON);
        assert!((d.resolve(3.0 + 1e-12, false).unwrap() - 3.0).abs() < f64::EPSILON);

        let err = d.resolve(3.5, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(d.resolve(f64::NAN, true).is_err());
    }

    #[test]
    fn wrap_reduces_into_half_open_range() {
        let d = CurveDomain::new(1.0, 3.0);
        assert!((d.resolve(3.5, true).unwrap() - 1.5).abs() < 1e-12);
        assert!((d.resolve(-0.5, true).unwrap() - 1.5).abs() < 1e-12);
        assert!((d.wrap(5.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn remap_is_linear() {
        let from = CurveDomain::new(0.0, 2.0);
        let to = CurveDomain::new(10.0, 11.0);
        assert!((from.remap(1.0, &to) - 10.5).abs() < f64::EPSILON);
        assert!((from.normalize(0.5) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_bad_intervals() {
        assert!(CurveDomain::unit().validate().is_ok());
        for bad in [
            CurveDomain::new(1.0, 1.0),
            CurveDomain::new(2.0, 1.0),
            CurveDomain::new(0.0, f64::INFINITY),
            CurveDomain::new(f64::NAN, 1.0),
        ] {
            let err = bad.validate().unwrap_err();
            assert!(matches!(
                err,
                KernelError::Geometry(GeometryError::InvalidSegment(_))
            ));
        }
    }
}
