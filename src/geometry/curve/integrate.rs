use crate::error::{GeometryError, Result};

use super::Curve;

/// Settings for adaptive arc-length integration.
#[derive(Debug, Clone, Copy)]
pub struct LengthSettings {
    tolerance: f64,
    max_depth: u32,
}

impl LengthSettings {
    /// Creates new integration settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive or `max_depth` is
    /// outside `1..=50`.
    pub fn new(tolerance: f64, max_depth: u32) -> Result<Self> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "integration tolerance must be positive".to_owned(),
            )
            .into());
        }
        if !(1..=50).contains(&max_depth) {
            return Err(GeometryError::InvalidArgument(format!(
                "integration depth {max_depth} must be in 1..=50"
            ))
            .into());
        }
        Ok(Self {
            tolerance,
            max_depth,
        })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for LengthSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_depth: 20,
        }
    }
}

/// Integrates the speed of `curve` between `t0` and `t1` with adaptive
/// Simpson quadrature. The bounds may be given in either order.
///
/// # Errors
///
/// Returns an error if the curve cannot be evaluated on the interval.
pub fn arc_length<C: Curve + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
    settings: &LengthSettings,
) -> Result<f64> {
    let (a, b) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    if b <= a {
        return Ok(0.0);
    }
    let speed = |t: f64| -> Result<f64> { Ok(curve.first_derivative(t)?.norm()) };

    let whole = simpson(&speed, a, b)?;
    adaptive(&speed, a, b, settings.tolerance, whole, settings.max_depth)
}

fn simpson<F>(speed: &F, a: f64, b: f64) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mid = 0.5 * (a + b);
    let h = (b - a) / 6.0;
    Ok(h * (speed(a)? + 4.0 * speed(mid)? + speed(b)?))
}

fn adaptive<F>(speed: &F, a: f64, b: f64, tolerance: f64, whole: f64, depth: u32) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mid = 0.5 * (a + b);
    let left = simpson(speed, a, mid)?;
    let right = simpson(speed, mid, b)?;
    let combined = left + right;

    if depth == 0 || (combined - whole).abs() < 15.0 * tolerance {
        Ok(combined + (combined - whole) / 15.0)
    } else {
        let half = tolerance / 2.0;
        Ok(adaptive(speed, a, mid, half, left, depth - 1)?
            + adaptive(speed, mid, b, half, right, depth - 1)?)
    }
}
