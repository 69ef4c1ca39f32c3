/// Builders for the homogeneous matrices the object pose is composed from
use nalgebra::{Matrix4, UnitQuaternion, Vector3};

use crate::axis::Axis;

/// Transform builder for pose matrices
pub struct Transform;

impl Transform {
    /// Rotation of `degrees` about `axis`, built as a unit quaternion
    /// and widened to the equivalent homogeneous matrix.
    pub fn axis_rotation(axis: Axis, degrees: f32) -> Matrix4<f32> {
        UnitQuaternion::from_axis_angle(&axis.unit(), degrees.to_radians()).to_homogeneous()
    }

    /// Translation by `offset`.
    pub fn translation(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Non-uniform scale by `factors`.
    pub fn scale(factors: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_rotation_matches_matrix_form() {
        let quat_form = Transform::axis_rotation(Axis::X, 90.0);
        let matrix_form = Matrix4::new_rotation(Vector3::new(90.0_f32.to_radians(), 0.0, 0.0));
        assert!((quat_form - matrix_form).norm() < 1e-5);
    }

    #[test]
    fn test_axis_rotation_carries_no_translation() {
        let rotation = Transform::axis_rotation(Axis::Y, 37.0);
        assert_eq!(rotation[(0, 3)], 0.0);
        assert_eq!(rotation[(1, 3)], 0.0);
        assert_eq!(rotation[(2, 3)], 0.0);
        assert_eq!(rotation[(3, 3)], 1.0);
    }

    #[test]
    fn test_post_multiplication_preserves_translation() {
        let start = Transform::translation(&Vector3::new(0.0, 0.0, -4.0));
        let stepped = start * Transform::axis_rotation(Axis::Z, 1.0);
        assert_eq!(stepped[(0, 3)], 0.0);
        assert_eq!(stepped[(1, 3)], 0.0);
        assert_eq!(stepped[(2, 3)], -4.0);
    }

    #[test]
    fn test_translation_and_scale_builders() {
        let translation = Transform::translation(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(translation[(0, 3)], 1.0);
        assert_eq!(translation[(1, 3)], 2.0);
        assert_eq!(translation[(2, 3)], 3.0);

        let scale = Transform::scale(&Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(scale[(0, 0)], 2.0);
        assert_eq!(scale[(1, 1)], 3.0);
        assert_eq!(scale[(2, 2)], 4.0);
    }
}
