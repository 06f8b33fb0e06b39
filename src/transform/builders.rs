use crate::error::{GeometryError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

use super::MatrixTransform;

/// Translation by `offset`.
#[must_use]
pub fn translation(offset: &Vector3) -> MatrixTransform {
    MatrixTransform::new(Matrix4::new_translation(offset))
}

/// Axis-aligned scaling about the origin.
#[must_use]
pub fn scaling(sx: f64, sy: f64, sz: f64) -> MatrixTransform {
    MatrixTransform::new(Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
}

/// Uniform scaling by `factor` about `center`.
#[must_use]
pub fn uniform_scaling(center: &Point3, factor: f64) -> MatrixTransform {
    let t_neg = Matrix4::new_translation(&(-center.coords));
    let scale = Matrix4::new_nonuniform_scaling(&Vector3::repeat(factor));
    let t_pos = Matrix4::new_translation(&center.coords);
    MatrixTransform::new(t_pos * scale * t_neg)
}

/// Counter-clockwise rotation about the z axis through the origin.
#[must_use]
pub fn rotation_z(angle: f64) -> MatrixTransform {
    MatrixTransform::new(rotation_matrix(&Vector3::z(), angle))
}

/// Rotation by `angle` radians about the axis through `axis_origin`.
///
/// # Errors
///
/// Returns an error if the axis direction is zero-length.
pub fn rotation(
    axis_origin: &Point3,
    axis_direction: &Vector3,
    angle: f64,
) -> Result<MatrixTransform> {
    let len = axis_direction.norm();
    if len < TOLERANCE {
        return Err(GeometryError::InvalidArgument("rotation axis must be non-zero".into()).into());
    }
    let axis = axis_direction / len;

    // Translate to origin, rotate, translate back
    let t_neg = Matrix4::new_translation(&(-axis_origin.coords));
    let rot = rotation_matrix(&axis, angle);
    let t_pos = Matrix4::new_translation(&axis_origin.coords);
    Ok(MatrixTransform::new(t_pos * rot * t_neg))
}

/// Reflection across the plane through `plane_origin` with normal `plane_normal`.
///
/// # Errors
///
/// Returns an error if the normal is zero-length.
pub fn mirror(plane_origin: &Point3, plane_normal: &Vector3) -> Result<MatrixTransform> {
    let len = plane_normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::InvalidArgument("mirror normal must be non-zero".into()).into());
    }
    let n = plane_normal / len;

    // Householder reflection I - 2nnᵀ, shifted so the plane stays fixed.
    let linear = nalgebra::Matrix3::identity() - n * n.transpose() * 2.0;
    let offset = n * (2.0 * n.dot(&plane_origin.coords));
    let mut m = linear.to_homogeneous();
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(&offset);
    Ok(MatrixTransform::new(m))
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::transform::Transform;

    #[test]
    fn rotate_90_around_z() {
        let t = rotation_z(FRAC_PI_2);
        let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_offset_axis() {
        let t = rotation(&Point3::new(1.0, 1.0, 0.0), &Vector3::z(), FRAC_PI_2).unwrap();
        let p = t.transform_point(&Point3::new(2.0, 1.0, 5.0));
        assert_relative_eq!(p, Point3::new(1.0, 2.0, 5.0), epsilon = 1e-12);
        // Directions only see the rotation.
        let v = t.transform_vector(&Vector3::x());
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_returns_error() {
        assert!(rotation(&Point3::origin(), &Vector3::zeros(), 1.0).is_err());
        assert!(mirror(&Point3::origin(), &Vector3::zeros()).is_err());
    }

    #[test]
    fn mirror_across_offset_plane() {
        let t = mirror(&Point3::new(0.0, 0.0, 2.0), &Vector3::new(0.0, 0.0, 3.0)).unwrap();
        let p = t.transform_point(&Point3::new(1.0, 2.0, 5.0));
        assert_relative_eq!(p, Point3::new(1.0, 2.0, -1.0), epsilon = 1e-12);
        let on_plane = Point3::new(7.0, -3.0, 2.0);
        assert_relative_eq!(t.transform_point(&on_plane), on_plane, epsilon = 1e-12);
    }

    #[test]
    fn uniform_scaling_keeps_center_fixed() {
        let center = Point3::new(1.0, 1.0, 1.0);
        let t = uniform_scaling(&center, 3.0);
        assert_relative_eq!(t.transform_point(&center), center, epsilon = 1e-12);
        let p = t.transform_point(&Point3::new(2.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3::new(4.0, 1.0, 1.0), epsilon = 1e-12);
    }
}
