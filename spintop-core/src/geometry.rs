/// Geometry primitives for the rendered scene
use nalgebra::{Point3, Vector3};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle face with a flat color
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    /// RGB components in `0.0..=1.0`.
    pub color: [f32; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex, color: [f32; 3]) -> Self {
        Self {
            vertices: [v0, v1, v2],
            color,
        }
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    fn add_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], color: [f32; 3]) {
        let [nx, ny, nz] = normal;
        let vertex = |c: [f32; 3]| Vertex::new(c[0], c[1], c[2], nx, ny, nz);
        self.add_triangle(Triangle::new(
            vertex(corners[0]),
            vertex(corners[1]),
            vertex(corners[2]),
            color,
        ));
        self.add_triangle(Triangle::new(
            vertex(corners[0]),
            vertex(corners[2]),
            vertex(corners[3]),
            color,
        ));
    }

    /// Create a cube mesh of edge length `size` centered at the origin.
    pub fn cube(size: f32) -> Self {
        Self::cube_at(Point3::origin(), size)
    }

    /// Create a cube mesh of edge length `size` centered at `center`.
    ///
    /// Face pairs are colored by the axis they face: red for Z, green
    /// for Y, blue for X.
    pub fn cube_at(center: Point3<f32>, size: f32) -> Self {
        let h = size / 2.0;
        let (cx, cy, cz) = (center.x, center.y, center.z);
        let mut mesh = Self::with_capacity(12);

        let red = [1.0, 0.0, 0.0];
        let green = [0.0, 1.0, 0.0];
        let blue = [0.0, 0.0, 1.0];

        // Front and back faces (Z axis, red)
        mesh.add_quad(
            [
                [cx - h, cy - h, cz + h],
                [cx + h, cy - h, cz + h],
                [cx + h, cy + h, cz + h],
                [cx - h, cy + h, cz + h],
            ],
            [0.0, 0.0, 1.0],
            red,
        );
        mesh.add_quad(
            [
                [cx - h, cy - h, cz - h],
                [cx - h, cy + h, cz - h],
                [cx + h, cy + h, cz - h],
                [cx + h, cy - h, cz - h],
            ],
            [0.0, 0.0, -1.0],
            red,
        );

        // Top and bottom faces (Y axis, green)
        mesh.add_quad(
            [
                [cx - h, cy + h, cz - h],
                [cx - h, cy + h, cz + h],
                [cx + h, cy + h, cz + h],
                [cx + h, cy + h, cz - h],
            ],
            [0.0, 1.0, 0.0],
            green,
        );
        mesh.add_quad(
            [
                [cx - h, cy - h, cz - h],
                [cx + h, cy - h, cz - h],
                [cx + h, cy - h, cz + h],
                [cx - h, cy - h, cz + h],
            ],
            [0.0, -1.0, 0.0],
            green,
        );

        // Right and left faces (X axis, blue)
        mesh.add_quad(
            [
                [cx + h, cy - h, cz - h],
                [cx + h, cy + h, cz - h],
                [cx + h, cy + h, cz + h],
                [cx + h, cy - h, cz + h],
            ],
            [1.0, 0.0, 0.0],
            blue,
        );
        mesh.add_quad(
            [
                [cx - h, cy - h, cz - h],
                [cx - h, cy - h, cz + h],
                [cx - h, cy + h, cz + h],
                [cx - h, cy + h, cz - h],
            ],
            [-1.0, 0.0, 0.0],
            blue,
        );

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
