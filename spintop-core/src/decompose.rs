/// Affine and projective matrix decomposition
///
/// Factors a homogeneous transform back into translation, rotation,
/// scale, skew, and perspective parts in the manner of the classic
/// "unmatrix" routine: normalize by the homogeneous w, solve out the
/// projective row, read off the translation column, then Gram-Schmidt
/// the linear block's basis columns to peel scale and shear until only
/// a pure rotation remains.
use nalgebra::{Matrix3, Matrix4, Rotation3, UnitQuaternion, Vector3, Vector4};
use thiserror::Error;

/// Near-zero threshold for the normalization and singularity tests.
const EPSILON: f32 = f32::EPSILON;

/// Why a matrix could not be decomposed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecomposeError {
    /// The bottom-right homogeneous component is zero, so the matrix
    /// cannot be brought into normalized homogeneous form.
    #[error("homogeneous w component is zero")]
    ZeroW,
    /// The upper-left 3x3 block is singular; no rotation factor is
    /// defined for it.
    #[error("linear block is singular")]
    SingularLinearBlock,
}

/// The factors of a decomposed transform. Composing them back in
/// scale, shear, rotation, translation order reproduces the affine
/// part of the input.
#[derive(Debug, Clone)]
pub struct DecomposedPose {
    /// Per-axis scale factors.
    pub scale: Vector3<f32>,
    /// Pure rotation factor.
    pub rotation: UnitQuaternion<f32>,
    /// Translation, straight off the matrix's last column.
    pub translation: Vector3<f32>,
    /// Shear factors in `(yz, xz, xy)` order.
    pub skew: Vector3<f32>,
    /// Projective row contribution; `(0, 0, 0, 1)` for affine input.
    pub perspective: Vector4<f32>,
}

impl DecomposedPose {
    /// Euler angles of the rotation factor in degrees, using the XYZ
    /// convention: the rotation equals `Rz(z) * Ry(y) * Rx(x)`.
    ///
    /// Near a +/-90 degree middle (Y) angle several triples describe
    /// the same rotation, so consecutive readouts can jump between
    /// equivalent forms. That ambiguity is inherent to Euler angles and
    /// is not worked around here.
    pub fn euler_degrees(&self) -> Vector3<f32> {
        let (x, y, z) = self.rotation.euler_angles();
        Vector3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

/// Factor `matrix` into scale, rotation, translation, skew, and
/// perspective parts.
///
/// Fails on degenerate input: a zero homogeneous w component, or a
/// linear block with zero determinant.
pub fn decompose(matrix: &Matrix4<f32>) -> Result<DecomposedPose, DecomposeError> {
    let mut local = *matrix;

    let w = local[(3, 3)];
    if w.abs() <= EPSILON {
        return Err(DecomposeError::ZeroW);
    }
    local /= w;

    // The singularity test runs against the matrix with its projective
    // row cleared; the same matrix later solves for the perspective
    // part.
    let mut affine = local;
    affine[(3, 0)] = 0.0;
    affine[(3, 1)] = 0.0;
    affine[(3, 2)] = 0.0;
    affine[(3, 3)] = 1.0;

    if affine.determinant().abs() <= EPSILON {
        return Err(DecomposeError::SingularLinearBlock);
    }

    // Isolate the perspective partition, if the projective row carries
    // one, then strip it from the working copy.
    let perspective = if local[(3, 0)].abs() > EPSILON
        || local[(3, 1)].abs() > EPSILON
        || local[(3, 2)].abs() > EPSILON
    {
        let right_hand_side =
            Vector4::new(local[(3, 0)], local[(3, 1)], local[(3, 2)], local[(3, 3)]);
        let inverse = affine
            .try_inverse()
            .ok_or(DecomposeError::SingularLinearBlock)?;
        let solved = inverse.transpose() * right_hand_side;

        local[(3, 0)] = 0.0;
        local[(3, 1)] = 0.0;
        local[(3, 2)] = 0.0;
        local[(3, 3)] = 1.0;
        solved
    } else {
        Vector4::new(0.0, 0.0, 0.0, 1.0)
    };

    // Translation reads straight off the last column, which then takes
    // no further part.
    let translation = Vector3::new(local[(0, 3)], local[(1, 3)], local[(2, 3)]);
    local[(0, 3)] = 0.0;
    local[(1, 3)] = 0.0;
    local[(2, 3)] = 0.0;

    // Peel scale and shear off the linear block's basis columns.
    let mut x_basis = Vector3::new(local[(0, 0)], local[(1, 0)], local[(2, 0)]);
    let mut y_basis = Vector3::new(local[(0, 1)], local[(1, 1)], local[(2, 1)]);
    let mut z_basis = Vector3::new(local[(0, 2)], local[(1, 2)], local[(2, 2)]);

    let mut scale = Vector3::zeros();
    let mut skew = Vector3::zeros();

    // X scale, then the XY shear that makes the Y basis orthogonal.
    scale.x = x_basis.normalize_mut();
    skew.z = x_basis.dot(&y_basis);
    y_basis -= x_basis * skew.z;
    scale.y = y_basis.normalize_mut();
    skew.z /= scale.y;

    // XZ and YZ shears, orthogonalizing the Z basis against both.
    skew.y = x_basis.dot(&z_basis);
    z_basis -= x_basis * skew.y;
    skew.x = y_basis.dot(&z_basis);
    z_basis -= y_basis * skew.x;
    scale.z = z_basis.normalize_mut();
    skew.y /= scale.z;
    skew.x /= scale.z;

    // A negative triple product means the basis contains a reflection;
    // negating the scale factors and every basis vector restores a
    // proper rotation.
    if x_basis.dot(&y_basis.cross(&z_basis)) < 0.0 {
        scale = -scale;
        x_basis = -x_basis;
        y_basis = -y_basis;
        z_basis = -z_basis;
    }

    // What remains is orthonormal by construction: a pure rotation.
    let rotation_matrix = Matrix3::from_columns(&[x_basis, y_basis, z_basis]);
    let rotation =
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation_matrix));

    Ok(DecomposedPose {
        scale,
        rotation,
        translation,
        skew,
        perspective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::transform::Transform;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_identity_decomposes_to_neutral_factors() {
        let pose = decompose(&Matrix4::identity()).unwrap();
        assert!((pose.scale - Vector3::new(1.0, 1.0, 1.0)).norm() < TOLERANCE);
        assert!(pose.skew.norm() < TOLERANCE);
        assert!(pose.translation.norm() < TOLERANCE);
        assert!((pose.perspective - Vector4::new(0.0, 0.0, 0.0, 1.0)).norm() < TOLERANCE);
        assert!(pose.rotation.angle() < TOLERANCE);
    }

    #[test]
    fn test_translation_reads_off_last_column() {
        let pose = decompose(&Transform::translation(&Vector3::new(1.0, 2.0, 3.0))).unwrap();
        assert_eq!(pose.translation, Vector3::new(1.0, 2.0, 3.0));
        assert!(pose.rotation.angle() < TOLERANCE);
        assert!((pose.scale - Vector3::new(1.0, 1.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_translation_rotation_scale_roundtrip() {
        let rotation = UnitQuaternion::from_euler_angles(0.3, -0.4, 0.5);
        let matrix = Transform::translation(&Vector3::new(1.0, 2.0, 3.0))
            * rotation.to_homogeneous()
            * Transform::scale(&Vector3::new(2.0, 3.0, 4.0));

        let pose = decompose(&matrix).unwrap();
        assert!((pose.translation - Vector3::new(1.0, 2.0, 3.0)).norm() < TOLERANCE);
        assert!((pose.scale - Vector3::new(2.0, 3.0, 4.0)).norm() < TOLERANCE);
        assert!(pose.skew.norm() < TOLERANCE);
        assert!(pose.rotation.angle_to(&rotation) < TOLERANCE);
    }

    #[test]
    fn test_rotation_factor_rebuilds_linear_block() {
        let transform = Transform::translation(&Vector3::new(0.0, 0.0, -4.0))
            * Transform::axis_rotation(Axis::X, 10.0)
            * Transform::axis_rotation(Axis::Y, 20.0)
            * Transform::axis_rotation(Axis::Z, 30.0);

        let pose = decompose(&transform).unwrap();
        let rebuilt = pose.rotation.to_homogeneous();
        let delta = transform.fixed_view::<3, 3>(0, 0) - rebuilt.fixed_view::<3, 3>(0, 0);
        assert!(delta.norm() < TOLERANCE);
        assert!((pose.scale - Vector3::new(1.0, 1.0, 1.0)).norm() < TOLERANCE);
        assert!(pose.skew.norm() < TOLERANCE);
        assert!((pose.perspective - Vector4::new(0.0, 0.0, 0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_euler_degrees_of_single_axis_rotation() {
        let pose = decompose(&Transform::axis_rotation(Axis::X, 30.0)).unwrap();
        assert!((pose.euler_degrees() - Vector3::new(30.0, 0.0, 0.0)).norm() < TOLERANCE);

        let pose = decompose(&Transform::axis_rotation(Axis::Z, -45.0)).unwrap();
        assert!((pose.euler_degrees() - Vector3::new(0.0, 0.0, -45.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_euler_degrees_of_composed_rotation() {
        // The XYZ convention reads Rz(z) * Ry(y) * Rx(x) back as
        // (x, y, z); mixing up the axis order would land degrees away.
        let matrix = Transform::axis_rotation(Axis::Z, 30.0)
            * Transform::axis_rotation(Axis::Y, 20.0)
            * Transform::axis_rotation(Axis::X, 10.0);

        let pose = decompose(&matrix).unwrap();
        assert!((pose.euler_degrees() - Vector3::new(10.0, 20.0, 30.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_reflection_folds_into_negative_scale() {
        let flipped = Transform::scale(&Vector3::new(-2.0, 3.0, 4.0));
        let pose = decompose(&flipped).unwrap();
        assert!((pose.scale - Vector3::new(-2.0, -3.0, -4.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_perspective_partition_is_recovered() {
        let mut matrix = Matrix4::identity();
        matrix[(3, 2)] = -0.25;

        let pose = decompose(&matrix).unwrap();
        assert!((pose.perspective - Vector4::new(0.0, 0.0, -0.25, 1.0)).norm() < TOLERANCE);
        assert!((pose.scale - Vector3::new(1.0, 1.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_zero_w_is_rejected() {
        let mut matrix = Matrix4::identity();
        matrix[(3, 3)] = 0.0;
        assert_eq!(decompose(&matrix).unwrap_err(), DecomposeError::ZeroW);
    }

    #[test]
    fn test_singular_linear_block_is_rejected() {
        let squashed = Transform::scale(&Vector3::new(0.0, 1.0, 1.0));
        assert_eq!(
            decompose(&squashed).unwrap_err(),
            DecomposeError::SingularLinearBlock
        );
    }
}
