use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::segmented::last_at_or_before;
use super::{Curve, CurveDomain, Frame, Segmented};

/// One continuous curve stitched from independently parametrized segments.
///
/// Segments are append-only. Each appended segment is reparametrized to start
/// exactly where the previous one ends while keeping its own span, so the
/// segment domains partition [`Curve::domain`] without gaps or overlaps.
#[derive(Debug, Default)]
pub struct ComposedCurve {
    segments: Vec<Box<dyn Curve>>,
    closed: bool,
}

impl ComposedCurve {
    /// Creates an empty, open composed curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `segment` after the current last segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSegment`] if the segment's domain is not
    /// finite and increasing.
    pub fn add<C: Curve + 'static>(&mut self, segment: C) -> Result<()> {
        self.add_boxed(Box::new(segment))
    }

    /// Appends an already boxed segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSegment`] if the segment's domain is not
    /// finite and increasing.
    pub fn add_boxed(&mut self, mut segment: Box<dyn Curve>) -> Result<()> {
        let original = segment.domain();
        original.validate()?;

        if let Some(last) = self.segments.last() {
            let t_min = last.t_max();
            segment.set_domain(CurveDomain::new(t_min, t_min + original.span()))?;
        }

        let domain = segment.domain();
        debug!(
            index = self.segments.len(),
            t_min = domain.t_min,
            t_max = domain.t_max,
            "appended segment"
        );
        self.segments.push(segment);
        Ok(())
    }

    /// Marks whether the end of the curve joins its start.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments in parameter order.
    pub fn segments(&self) -> impl Iterator<Item = &dyn Curve> {
        self.segments.iter().map(AsRef::as_ref)
    }

    /// Returns the index of the segment owning `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty or `t` is outside the domain of
    /// an open curve.
    pub fn find_index(&self, t: f64) -> Result<usize> {
        Ok(self.locate(t)?.0)
    }

    /// Brings `t` onto the domain: wrapped into `[t_min, t_max)` when closed,
    /// clamped within tolerance when open.
    fn resolve(&self, t: f64) -> Result<f64> {
        if self.segments.is_empty() {
            return Err(GeometryError::EmptyCurve.into());
        }
        let domain = self.domain();
        if self.closed && t.is_finite() {
            if t >= domain.t_min && t < domain.t_max {
                return Ok(t);
            }
            let wrapped = domain.wrap(t);
            trace!(t, wrapped, "wrapped parameter on closed curve");
            return Ok(wrapped);
        }
        domain.resolve(t, false)
    }
}

impl Segmented for ComposedCurve {
    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segment(&self, index: usize) -> Option<&dyn Curve> {
        self.segments.get(index).map(AsRef::as_ref)
    }

    fn locate(&self, t: f64) -> Result<(usize, f64)> {
        let t = self.resolve(t)?;
        let index = last_at_or_before(&self.segments, t, |s| s.t_min())
            .ok_or(GeometryError::EmptyCurve)?;
        Ok((index, t))
    }
}

impl Curve for ComposedCurve {
    fn domain(&self) -> CurveDomain {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => CurveDomain::new(first.t_min(), last.t_max()),
            _ => CurveDomain::new(0.0, 0.0),
        }
    }

    /// Remaps every segment linearly so the whole curve spans `domain`.
    fn set_domain(&mut self, domain: CurveDomain) -> Result<()> {
        domain.validate()?;
        if self.segments.is_empty() {
            return Err(GeometryError::EmptyCurve.into());
        }

        let current = self.domain();
        let mut bounds: Vec<f64> = self
            .segments
            .iter()
            .map(|s| current.remap(s.t_min(), &domain))
            .collect();
        bounds[0] = domain.t_min;
        bounds.push(domain.t_max);

        let targets: Vec<CurveDomain> = bounds
            .windows(2)
            .map(|w| CurveDomain::new(w[0], w[1]))
            .collect();
        for target in &targets {
            target.validate()?;
        }
        for (segment, target) in self.segments.iter_mut().zip(targets) {
            segment.set_domain(target)?;
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn position(&self, t: f64) -> Result<Point2> {
        self.with_segment(t, |s, t| s.position(t))
    }

    fn first_derivative(&self, t: f64) -> Result<Vector2> {
        self.with_segment(t, |s, t| s.first_derivative(t))
    }

    fn second_derivative(&self, t: f64) -> Result<Vector2> {
        self.with_segment(t, |s, t| s.second_derivative(t))
    }

    fn third_derivative(&self, t: f64) -> Result<Vector2> {
        self.with_segment(t, |s, t| s.third_derivative(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.with_segment(t, |s, t| s.tangent(t))
    }

    fn left_normal(&self, t: f64) -> Result<Vector2> {
        self.with_segment(t, |s, t| s.left_normal(t))
    }

    fn curvature(&self, t: f64) -> Result<f64> {
        self.with_segment(t, |s, t| s.curvature(t))
    }

    fn speed(&self, t: f64) -> Result<f64> {
        self.with_segment(t, |s, t| s.speed(t))
    }

    fn frame(&self, t: f64) -> Result<Frame> {
        self.with_segment(t, |s, t| s.frame(t))
    }

    /// Sums the per-segment lengths over the overlapped sub-intervals.
    fn length(&self, t0: f64, t1: f64) -> Result<f64> {
        if self.segments.is_empty() {
            return Err(GeometryError::EmptyCurve.into());
        }
        // Inclusive of t_max even when closed, so the full loop is measurable.
        let domain = self.domain();
        let t0 = domain.resolve(t0, self.closed)?;
        let t1 = domain.resolve(t1, self.closed)?;
        let (a, b) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

        let mut total = 0.0;
        for segment in &self.segments {
            let lo = a.max(segment.t_min());
            let hi = b.min(segment.t_max());
            if lo < hi {
                total += segment.length(lo, hi)?;
            }
        }
        Ok(total)
    }

    fn total_length(&self) -> Result<f64> {
        if self.segments.is_empty() {
            return Err(GeometryError::EmptyCurve.into());
        }
        self.segments.iter().map(|s| s.total_length()).sum()
    }

    fn parameter_at_length(&self, s: f64) -> Result<f64> {
        let domain = self.domain();
        if s <= 0.0 {
            return Ok(domain.t_min);
        }
        let mut remaining = s;
        for segment in &self.segments {
            let len = segment.total_length()?;
            if remaining <= len {
                return segment.parameter_at_length(remaining);
            }
            remaining -= len;
        }
        Ok(domain.t_max)
    }
}
