use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use nalgebra::Vector4;
use tracing::{debug, trace};

use crate::error::{Result, TransformError};
use crate::math::{Matrix4, Point3, Vector3};

use super::{IdentityTransform, Transform};

/// Link from a transform to its inverse.
///
/// The transform that computed the inverse owns it; the inverse only points
/// back weakly, so the pair never forms an ownership cycle.
enum InverseLink {
    Owned(Arc<MatrixTransform>),
    Origin(Weak<MatrixTransform>),
}

/// An affine transform backed by a 4x4 homogeneous matrix.
///
/// The inverse is computed on first request and cached for the lifetime of
/// the transform. The cached inverse reports the original as its own
/// inverse, so `t.inverse()?.inverse()?` hands back `t` itself.
pub struct MatrixTransform {
    matrix: Arc<Matrix4>,
    inverse: OnceLock<InverseLink>,
}

impl MatrixTransform {
    /// Creates a transform that exclusively owns `matrix`.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self::shared(Arc::new(matrix))
    }

    /// Creates a transform that aliases a matrix shared with other owners.
    #[must_use]
    pub fn shared(matrix: Arc<Matrix4>) -> Self {
        Self {
            matrix,
            inverse: OnceLock::new(),
        }
    }

    /// Returns the backing matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Returns a shared handle to the backing matrix.
    #[must_use]
    pub fn matrix_handle(&self) -> Arc<Matrix4> {
        Arc::clone(&self.matrix)
    }

    /// Returns whether an inverse has already been computed or linked.
    #[must_use]
    pub fn has_cached_inverse(&self) -> bool {
        self.inverse.get().is_some()
    }

    /// Returns the row-major entries of the backing matrix.
    #[must_use]
    pub fn to_rows(&self) -> [[f64; 4]; 4] {
        let m = &self.matrix;
        std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)]))
    }

    fn inverse_arc(self: &Arc<Self>) -> Result<Arc<Self>> {
        match self.inverse.get() {
            Some(InverseLink::Owned(inverse)) => {
                trace!("reusing cached inverse");
                return Ok(Arc::clone(inverse));
            }
            Some(InverseLink::Origin(origin)) => {
                if let Some(origin) = origin.upgrade() {
                    trace!("inverse resolved through back-link");
                    return Ok(origin);
                }
            }
            None => {}
        }

        let inverted = self
            .matrix
            .try_inverse()
            .ok_or(TransformError::SingularMatrix)?;
        debug!("computed inverse of matrix transform");

        let inverse = Arc::new(Self {
            matrix: Arc::new(inverted),
            inverse: OnceLock::from(InverseLink::Origin(Arc::downgrade(self))),
        });
        if self
            .inverse
            .set(InverseLink::Owned(Arc::clone(&inverse)))
            .is_err()
        {
            // Lost a race, or this is an inverse whose origin is gone.
            if let Some(InverseLink::Owned(existing)) = self.inverse.get() {
                return Ok(Arc::clone(existing));
            }
        }
        Ok(inverse)
    }
}

impl fmt::Debug for MatrixTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixTransform")
            .field("matrix", &self.matrix)
            .field("inverse_cached", &self.has_cached_inverse())
            .finish_non_exhaustive()
    }
}

impl Clone for MatrixTransform {
    /// Clones the matrix into a fresh transform with no cached inverse.
    fn clone(&self) -> Self {
        Self::new(*self.matrix)
    }
}

impl Transform for MatrixTransform {
    fn kind(&self) -> &'static str {
        "matrix"
    }

    fn transform_point(&self, point: &Point3) -> Point3 {
        let v = *self.matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        let v = *self.matrix * Vector4::new(vector.x, vector.y, vector.z, 0.0);
        Vector3::new(v.x, v.y, v.z)
    }

    /// Exact comparison against the identity matrix; no tolerance.
    fn is_identity(&self) -> bool {
        *self.matrix == Matrix4::identity()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn concat(self: Arc<Self>, other: Arc<dyn Transform>) -> Result<Arc<dyn Transform>> {
        let any = other.as_any();
        if any.is::<IdentityTransform>() {
            return Ok(self);
        }
        if let Some(rhs) = any.downcast_ref::<Self>() {
            return Ok(Arc::new(Self::new(*self.matrix * *rhs.matrix)));
        }
        Err(TransformError::Unsupported {
            left: self.kind(),
            right: other.kind(),
        }
        .into())
    }

    fn inverse(self: Arc<Self>) -> Result<Arc<dyn Transform>> {
        let inverse: Arc<dyn Transform> = self.inverse_arc()?;
        Ok(inverse)
    }
}
