use std::any::Any;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::Transform;

/// The transform that leaves everything in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransform;

impl IdentityTransform {
    /// Returns the process-wide identity handle.
    #[must_use]
    pub fn shared() -> Arc<dyn Transform> {
        static SHARED: OnceLock<Arc<IdentityTransform>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self)).clone()
    }
}

impl Transform for IdentityTransform {
    fn kind(&self) -> &'static str {
        "identity"
    }

    fn transform_point(&self, point: &Point3) -> Point3 {
        *point
    }

    fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        *vector
    }

    fn is_identity(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn concat(self: Arc<Self>, other: Arc<dyn Transform>) -> Result<Arc<dyn Transform>> {
        Ok(other)
    }

    fn inverse(self: Arc<Self>) -> Result<Arc<dyn Transform>> {
        Ok(self)
    }
}
