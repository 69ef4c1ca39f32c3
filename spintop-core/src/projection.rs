/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

/// Camera configuration for rendering the scene
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(10.0, 10.0, 10.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined model-view-projection matrix for a model transform.
    pub fn mvp_matrix(&self, model: &Matrix4<f32>) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix() * model
    }

    /// Project a 3D point through a precomputed MVP matrix into screen
    /// space.
    ///
    /// Returns `(x, y, depth)` with x and y in cells and depth in
    /// normalized device coordinates, or `None` when the point falls
    /// outside the view frustum (including behind the camera).
    pub fn project_to_screen(
        mvp: &Matrix4<f32>,
        point: &Point3<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let clip = mvp * point.to_homogeneous();

        // Points at or behind the camera plane never reach the screen.
        if clip.w <= 1e-6 {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let depth = clip.z / clip.w;

        // Clip test
        if ndc_x < -1.0 || ndc_x > 1.0 || ndc_y < -1.0 || ndc_y > 1.0 || depth < -1.0 || depth > 1.0
        {
            return None;
        }

        // Convert to screen space
        let screen_x = (ndc_x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * height as f32;

        Some((screen_x, screen_y, depth))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.position, Point3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_view_matrix_is_nontrivial() {
        let camera = Camera::new(80, 24);
        assert!(camera.view_matrix().norm() > 0.0);
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::new(80, 24);
        let mvp = camera.mvp_matrix(&Matrix4::identity());

        let (x, y, depth) = Camera::project_to_screen(&mvp, &Point3::origin(), 80, 24).unwrap();
        assert!((x - 40.0).abs() < 1e-3);
        assert!((y - 12.0).abs() < 1e-3);
        assert!(depth > -1.0 && depth < 1.0);
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let camera = Camera::new(80, 24);
        let mvp = camera.mvp_matrix(&Matrix4::identity());
        let behind = Point3::new(20.0, 20.0, 20.0);
        assert!(Camera::project_to_screen(&mvp, &behind, 80, 24).is_none());
    }

    #[test]
    fn test_point_outside_frustum_is_culled() {
        let camera = Camera::new(80, 24);
        let mvp = camera.mvp_matrix(&Matrix4::identity());
        let off_screen = Point3::new(0.0, 20.0, 0.0);
        assert!(Camera::project_to_screen(&mvp, &off_screen, 80, 24).is_none());
    }
}
