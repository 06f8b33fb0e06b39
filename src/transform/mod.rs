//! Affine transform algebra.
//!
//! A transform is always handled through `Arc<dyn Transform>`: composition
//! and inversion may hand back one of their operands instead of allocating,
//! and callers can observe that with [`same_transform`].

mod builders;
mod identity;
mod matrix;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub use builders::{mirror, rotation, rotation_z, scaling, translation, uniform_scaling};
pub use identity::IdentityTransform;
pub use matrix::MatrixTransform;

use crate::error::Result;
use crate::math::{Point2, Point3, Vector2, Vector3};

/// A coordinate mapping of 3D space.
pub trait Transform: fmt::Debug + Send + Sync + Any {
    /// Short name of the concrete representation, used in error messages.
    fn kind(&self) -> &'static str;

    /// Maps a position. Translation applies.
    fn transform_point(&self, point: &Point3) -> Point3;

    /// Maps a free vector. Translation does not apply.
    fn transform_vector(&self, vector: &Vector3) -> Vector3;

    /// Returns whether this transform maps every point to itself.
    fn is_identity(&self) -> bool;

    fn as_any(&self) -> &dyn Any;

    /// Returns the transform that applies `other` first, then `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Unsupported`](crate::error::TransformError::Unsupported)
    /// when no composition rule exists for the two representations.
    fn concat(self: Arc<Self>, other: Arc<dyn Transform>) -> Result<Arc<dyn Transform>>;

    /// Returns the transform undoing `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SingularMatrix`](crate::error::TransformError::SingularMatrix)
    /// when the transform is not invertible.
    fn inverse(self: Arc<Self>) -> Result<Arc<dyn Transform>>;

    /// Maps a point of the `z = 0` plane.
    fn transform_point2(&self, point: &Point2) -> Point2 {
        let p = self.transform_point(&Point3::new(point.x, point.y, 0.0));
        Point2::new(p.x, p.y)
    }

    /// Maps a vector of the `z = 0` plane.
    fn transform_vector2(&self, vector: &Vector2) -> Vector2 {
        let v = self.transform_vector(&Vector3::new(vector.x, vector.y, 0.0));
        Vector2::new(v.x, v.y)
    }

    /// Maps a point given as a plain coordinate tuple.
    fn transform_tuple(&self, (x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
        let p = self.transform_point(&Point3::new(x, y, z));
        (p.x, p.y, p.z)
    }
}

/// Returns whether two handles refer to the same transform object.
#[must_use]
pub fn same_transform(a: &Arc<dyn Transform>, b: &Arc<dyn Transform>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Composes `first` then `second` into a single transform.
///
/// # Errors
///
/// Propagates the error of [`Transform::concat`].
pub fn then(first: &Arc<dyn Transform>, second: &Arc<dyn Transform>) -> Result<Arc<dyn Transform>> {
    Arc::clone(second).concat(Arc::clone(first))
}
