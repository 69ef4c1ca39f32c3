/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Point3, Vector3};
use spintop_core::{Camera, Mesh, Triangle};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Ambient floor so faces turned away from the light stay visible.
const AMBIENT: f32 = 0.2;

/// Glyph used for the axis helper lines.
const AXIS_GLYPH: char = '.';

/// Samples taken along each axis helper segment. The segments are long,
/// so the sampling must be dense enough to leave no gaps near the
/// camera.
const SEGMENT_SAMPLES: usize = 8192;

/// ASCII renderer that converts the 3D scene to colored terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        let mvp = camera.mvp_matrix(model_matrix);
        // Light shines from the camera toward the scene, so faces turned
        // toward the viewer read brightest.
        let light_dir = camera.position.coords.normalize();

        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, &mvp, &light_dir);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        model_matrix: &Matrix4<f32>,
        mvp: &Matrix4<f32>,
        light_dir: &Vector3<f32>,
    ) {
        // Project vertices to screen space
        let mut screen_coords = Vec::new();
        for vertex in &triangle.vertices {
            if let Some((x, y, z)) = Camera::project_to_screen(
                mvp,
                &vertex.position,
                self.width as u32,
                self.height as u32,
            ) {
                screen_coords.push((x, y, z));
            } else {
                return; // Triangle is clipped
            }
        }

        // Shade from the face normal carried into world space.
        let normal = model_matrix.transform_vector(&triangle.vertices[0].normal);
        let diffuse = normal.dot(light_dir).max(0.0);
        let brightness = AMBIENT + (1.0 - AMBIENT) * diffuse;

        // Map brightness to character
        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.min(LUMINOSITY_RAMP.len() - 1);
        let character = LUMINOSITY_RAMP[char_index];

        // Rasterize triangle using scanline algorithm
        self.rasterize_triangle(&screen_coords, character, rgb_color(triangle.color));
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32)], character: char, color: Color) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.char_buffer[idx] = character;
                            self.color_buffer[idx] = color;
                        }
                    }
                }
            }
        }
    }

    /// Sample a world-space segment and plot every visible point. Used
    /// for the axis helper lines.
    pub fn render_segment(
        &mut self,
        start: &Point3<f32>,
        end: &Point3<f32>,
        color: [f32; 3],
        camera: &Camera,
    ) {
        let mvp = camera.mvp_matrix(&Matrix4::identity());
        let color = rgb_color(color);
        let direction = end - start;

        for i in 0..=SEGMENT_SAMPLES {
            let t = i as f32 / SEGMENT_SAMPLES as f32;
            let point = start + direction * t;
            if let Some((x, y, depth)) =
                Camera::project_to_screen(&mvp, &point, self.width as u32, self.height as u32)
            {
                self.plot(x, y, depth, AXIS_GLYPH, color);
            }
        }
    }

    fn plot(&mut self, x: f32, y: f32, depth: f32, character: char, color: Color) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
            self.color_buffer[idx] = color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            // Raw mode does not translate newlines, so address each row.
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];

                if current != Some(color) {
                    writer.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

/// Quantize an RGB triple in `0.0..=1.0` to a terminal color.
fn rgb_color(rgb: [f32; 3]) -> Color {
    Color::Rgb {
        r: (rgb[0].clamp(0.0, 1.0) * 255.0) as u8,
        g: (rgb[1].clamp(0.0, 1.0) * 255.0) as u8,
        b: (rgb[2].clamp(0.0, 1.0) * 255.0) as u8,
    }
}
