//! Scalar type class.
//!
//! Geometric formulas in this crate are written once against [`Scalar`] and
//! monomorphized for each concrete numeric representation (`f32`, `f64`, or
//! any other [`RealField`]). Every operation is pure. Division by zero and
//! `sqrt` of a negative value follow the representation's own semantics
//! (infinity or NaN) instead of raising an error.

use nalgebra::{ComplexField, RealField};
use simba::scalar::SupersetOf;

/// A real scalar usable by the vector algebra and curve formulas.
pub trait Scalar: RealField + Copy {
    /// Converts an `f64` literal into this representation.
    #[must_use]
    fn of(value: f64) -> Self {
        nalgebra::convert(value)
    }

    /// Lossy conversion to `f64`.
    #[must_use]
    fn as_f64(self) -> f64 {
        nalgebra::try_convert(self).unwrap_or(f64::NAN)
    }
}

impl<T: RealField + Copy> Scalar for T {}

#[must_use]
pub fn add<T: Scalar>(a: T, b: T) -> T {
    a + b
}

#[must_use]
pub fn sub<T: Scalar>(a: T, b: T) -> T {
    a - b
}

#[must_use]
pub fn mul<T: Scalar>(a: T, b: T) -> T {
    a * b
}

#[must_use]
pub fn div<T: Scalar>(a: T, b: T) -> T {
    a / b
}

#[must_use]
pub fn neg<T: Scalar>(a: T) -> T {
    -a
}

#[must_use]
pub fn sqrt<T: Scalar>(a: T) -> T {
    ComplexField::sqrt(a)
}

/// Four-quadrant arctangent of `y / x`.
#[must_use]
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    RealField::atan2(y, x)
}

/// Converts any primitive numeric value into `T`.
///
/// Integers of every width convert, rounding to the nearest representable
/// value when `T` cannot hold them exactly.
///
/// ```
/// let x: f32 = geokernel::math::scalar::cast(3_u8);
/// assert_eq!(x, 3.0);
/// let y: f64 = geokernel::math::scalar::cast(1_u64 << 40);
/// assert_eq!(y, 1_099_511_627_776.0);
/// ```
#[must_use]
pub fn cast<N, T>(value: N) -> T
where
    T: Scalar + SupersetOf<N>,
{
    <T as SupersetOf<N>>::from_subset(&value)
}
