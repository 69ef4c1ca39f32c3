/// Pose reports, the text the demo emits after each rotation
use std::fmt;

use nalgebra::Vector3;

use crate::decompose::DecomposedPose;

/// Orientation and position of the object, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseReport {
    /// Euler angles of the rotation factor, in degrees, XYZ convention.
    pub rotation_degrees: Vector3<f32>,
    /// Translation factor.
    pub translation: Vector3<f32>,
}

impl PoseReport {
    /// Build a report from a successfully decomposed pose.
    pub fn from_pose(pose: &DecomposedPose) -> Self {
        Self {
            rotation_degrees: pose.euler_degrees(),
            translation: pose.translation,
        }
    }

    /// First report line: the rotation angles, space separated.
    pub fn rotation_line(&self) -> String {
        format!(
            "rotation: {} {} {}",
            self.rotation_degrees.x, self.rotation_degrees.y, self.rotation_degrees.z
        )
    }

    /// Second report line: the translation, space separated.
    pub fn translation_line(&self) -> String {
        format!(
            "translation: {} {} {}",
            self.translation.x, self.translation.y, self.translation.z
        )
    }
}

impl fmt::Display for PoseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.rotation_line())?;
        write!(f, "{}", self.translation_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::decompose::decompose;
    use crate::transform::Transform;

    #[test]
    fn test_line_formatting() {
        let report = PoseReport {
            rotation_degrees: Vector3::new(1.0, 0.0, 0.0),
            translation: Vector3::new(0.0, 0.0, -4.0),
        };
        assert_eq!(report.rotation_line(), "rotation: 1 0 0");
        assert_eq!(report.translation_line(), "translation: 0 0 -4");
    }

    #[test]
    fn test_display_emits_both_lines() {
        let report = PoseReport {
            rotation_degrees: Vector3::new(45.5, -9.25, 0.125),
            translation: Vector3::new(1.5, 2.5, -3.75),
        };
        assert_eq!(
            report.to_string(),
            "rotation: 45.5 -9.25 0.125\ntranslation: 1.5 2.5 -3.75"
        );
    }

    #[test]
    fn test_from_pose_carries_angles_and_translation() {
        let matrix = Transform::translation(&Vector3::new(0.0, 0.0, -4.0))
            * Transform::axis_rotation(Axis::Y, 15.0);
        let pose = decompose(&matrix).unwrap();

        let report = PoseReport::from_pose(&pose);
        assert!((report.rotation_degrees - Vector3::new(0.0, 15.0, 0.0)).norm() < 1e-4);
        assert_eq!(report.translation, Vector3::new(0.0, 0.0, -4.0));
    }
}
