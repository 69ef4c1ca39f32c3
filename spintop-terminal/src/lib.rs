/// Terminal frontend: event loop, input dispatch, and the HUD
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nalgebra::{Point3, Vector3};
use spintop_core::{Camera, InputHandler, Key, KeyAction, KeyResponse, Mesh, SpinSession};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Terminal cells are roughly twice as tall as they are wide; folding
/// that into the camera aspect keeps the cube from stretching
/// vertically.
const CELL_ASPECT: f32 = 0.5;

/// Half-length of each axis helper line, in world units.
const AXIS_LENGTH: f32 = 1e3;

/// Main application struct for the terminal session
pub struct TerminalApp {
    session: SpinSession,
    mesh: Mesh,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(session: SpinSession) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut camera = Camera::new(width as u32, height as u32);
        camera.aspect = width as f32 * CELL_ASPECT / height as f32;

        Ok(Self {
            session,
            // The cube sits off the local origin, so stepping about the
            // origin visibly swings it rather than spinning it in place.
            mesh: Mesh::cube_at(Point3::new(1.5, 1.5, 0.0), 1.0),
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// The session driving this app; the final pose outlives the run.
    pub fn session(&self) -> &SpinSession {
        &self.session
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Drain every event that arrived since the last frame.
            while event::poll(Duration::from_millis(0))? {
                let event = event::read()?;
                self.handle_event(event);
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => match dispatch_key_event(&mut self.session, &key_event) {
                KeyResponse::Rotated(report) => {
                    log::info!("{}", report.rotation_line());
                    log::info!("{}", report.translation_line());
                }
                KeyResponse::Quit => {
                    self.running = false;
                }
                // A failed decomposition is logged inside the session;
                // the stale HUD report stands until a step succeeds.
                KeyResponse::ReportStale(_) | KeyResponse::Ignored => {}
            },
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.camera.aspect = width as f32 * CELL_ASPECT / height as f32;
        self.renderer = AsciiRenderer::new(width as usize, height as usize);
    }

    fn render(&mut self) -> io::Result<()> {
        // Clear renderer
        self.renderer.clear();

        // Render the object under its cumulative transform, then the
        // fixed world axes.
        let model = *self.session.transform();
        self.renderer.render_mesh(&self.mesh, &model, &self.camera);
        self.draw_axes();

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Spintop | FPS: {:.1} | Controls: X/Y/Z=Rotate Esc=Quit",
                self.fps
            )),
            ResetColor
        )?;
        if let Some(report) = self.session.last_report() {
            queue!(
                stdout,
                SetForegroundColor(Color::White),
                cursor::MoveTo(0, 1),
                Print(report.rotation_line()),
                cursor::MoveTo(0, 2),
                Print(report.translation_line()),
                ResetColor
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    /// World axis helpers: one bright half-line along each positive
    /// axis, one dim half-line along the negative.
    fn draw_axes(&mut self) {
        let origin = Point3::origin();
        let axes = [
            (Vector3::x(), [1.0, 0.0, 0.0], [0.5, 0.0, 0.0]),
            (Vector3::y(), [0.0, 1.0, 0.0], [0.0, 0.5, 0.0]),
            (Vector3::z(), [0.0, 0.0, 1.0], [0.0, 0.0, 0.5]),
        ];

        for (direction, bright, dim) in axes {
            self.renderer.render_segment(
                &origin,
                &(origin + direction * AXIS_LENGTH),
                bright,
                &self.camera,
            );
            self.renderer.render_segment(
                &origin,
                &(origin - direction * AXIS_LENGTH),
                dim,
                &self.camera,
            );
        }
    }
}

/// Translate a backend key event and hand it to an input handler.
///
/// This is the seam between crossterm and the rotation logic: handlers
/// only ever see the core crate's own key types.
pub fn dispatch_key_event<H: InputHandler>(handler: &mut H, event: &KeyEvent) -> KeyResponse {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    };
    let action = match event.kind {
        KeyEventKind::Press => KeyAction::Press,
        KeyEventKind::Repeat => KeyAction::Repeat,
        KeyEventKind::Release => KeyAction::Release,
    };
    handler.handle_key(key, action)
}
