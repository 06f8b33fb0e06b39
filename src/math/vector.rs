//! Vector type classes.
//!
//! [`VectorAlgebra`] captures what every fixed-dimension vector offers;
//! [`Vector2Algebra`] and [`Vector3Algebra`] add the dimension-specific
//! products. All operations return new values and never touch their
//! operands. Implementations are provided for nalgebra's `Vector2`/`Vector3`
//! over any [`Scalar`], and for plain `[T; 2]` / `[T; 3]` arrays.

use nalgebra::ComplexField;

use super::scalar::{self, Scalar};

/// Operations shared by all vector representations.
pub trait VectorAlgebra: Copy {
    /// Component type.
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    /// Returns the component at `index` (`0..DIM`).
    fn component(&self, index: usize) -> Self::Scalar;

    /// Builds a vector from a per-component function.
    fn from_components<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    #[must_use]
    fn plus(&self, other: &Self) -> Self {
        Self::from_components(|i| self.component(i) + other.component(i))
    }

    #[must_use]
    fn minus(&self, other: &Self) -> Self {
        Self::from_components(|i| self.component(i) - other.component(i))
    }

    #[must_use]
    fn scaled(&self, factor: Self::Scalar) -> Self {
        Self::from_components(|i| self.component(i) * factor)
    }

    #[must_use]
    fn divided(&self, divisor: Self::Scalar) -> Self {
        Self::from_components(|i| self.component(i) / divisor)
    }

    #[must_use]
    fn negated(&self) -> Self {
        Self::from_components(|i| -self.component(i))
    }

    #[must_use]
    fn dot(&self, other: &Self) -> Self::Scalar {
        (0..Self::DIM).fold(<Self::Scalar as Scalar>::of(0.0), |acc, i| {
            acc + self.component(i) * other.component(i)
        })
    }

    #[must_use]
    fn length_squared(&self) -> Self::Scalar {
        self.dot(self)
    }

    #[must_use]
    fn length(&self) -> Self::Scalar {
        scalar::sqrt(self.length_squared())
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector yields NaN components.
    #[must_use]
    fn normalized(&self) -> Self {
        self.divided(self.length())
    }

    /// Componentwise comparison with absolute tolerance `epsilon`.
    #[must_use]
    fn approx_eq(&self, other: &Self, epsilon: Self::Scalar) -> bool {
        let close = |i| ComplexField::abs(self.component(i) - other.component(i)) <= epsilon;
        (0..Self::DIM).all(close)
    }
}

/// Planar vector operations.
pub trait Vector2Algebra: VectorAlgebra {
    #[must_use]
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self {
        Self::from_components(|i| if i == 0 { x } else { y })
    }

    #[must_use]
    fn x(&self) -> Self::Scalar {
        self.component(0)
    }

    #[must_use]
    fn y(&self) -> Self::Scalar {
        self.component(1)
    }

    /// Signed scalar cross product `self.x * other.y - self.y * other.x`.
    #[must_use]
    fn perp_dot(&self, other: &Self) -> Self::Scalar {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Rotates counter-clockwise by `angle` radians.
    #[must_use]
    fn rotated(&self, angle: Self::Scalar) -> Self {
        let (sin, cos) = ComplexField::sin_cos(angle);
        Self::from_xy(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Polar angle `atan2(y, x)`.
    #[must_use]
    fn heading(&self) -> Self::Scalar {
        scalar::atan2(self.y(), self.x())
    }

    /// Signed difference `other.heading() - self.heading()`.
    ///
    /// The result is not reduced into any canonical range; it lies in
    /// `(-2π, 2π)`.
    #[must_use]
    fn angle_to(&self, other: &Self) -> Self::Scalar {
        other.heading() - self.heading()
    }

    /// Rotation by +90°.
    #[must_use]
    fn perp_left(&self) -> Self {
        Self::from_xy(-self.y(), self.x())
    }

    /// Rotation by -90°.
    #[must_use]
    fn perp_right(&self) -> Self {
        Self::from_xy(self.y(), -self.x())
    }

    /// Scalar projection of `other` onto the direction of `self`.
    #[must_use]
    fn project(&self, other: &Self) -> Self::Scalar {
        other.dot(&self.normalized())
    }
}

/// Spatial vector operations.
pub trait Vector3Algebra: VectorAlgebra {
    #[must_use]
    fn from_xyz(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self {
        Self::from_components(|i| match i {
            0 => x,
            1 => y,
            _ => z,
        })
    }

    #[must_use]
    fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::from_xyz(
            a.component(1) * b.component(2) - a.component(2) * b.component(1),
            a.component(2) * b.component(0) - a.component(0) * b.component(2),
            a.component(0) * b.component(1) - a.component(1) * b.component(0),
        )
    }
}

impl<T: Scalar> VectorAlgebra for nalgebra::Vector2<T> {
    type Scalar = T;
    const DIM: usize = 2;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components<F: FnMut(usize) -> T>(mut f: F) -> Self {
        Self::from_fn(|i, _| f(i))
    }
}

impl<T: Scalar> Vector2Algebra for nalgebra::Vector2<T> {}

impl<T: Scalar> VectorAlgebra for nalgebra::Vector3<T> {
    type Scalar = T;
    const DIM: usize = 3;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components<F: FnMut(usize) -> T>(mut f: F) -> Self {
        Self::from_fn(|i, _| f(i))
    }
}

impl<T: Scalar> Vector3Algebra for nalgebra::Vector3<T> {}

impl<T: Scalar> VectorAlgebra for [T; 2] {
    type Scalar = T;
    const DIM: usize = 2;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components<F: FnMut(usize) -> T>(f: F) -> Self {
        std::array::from_fn(f)
    }
}

impl<T: Scalar> Vector2Algebra for [T; 2] {}

impl<T: Scalar> VectorAlgebra for [T; 3] {
    type Scalar = T;
    const DIM: usize = 3;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_components<F: FnMut(usize) -> T>(f: F) -> Self {
        std::array::from_fn(f)
    }
}

impl<T: Scalar> Vector3Algebra for [T; 3] {}
