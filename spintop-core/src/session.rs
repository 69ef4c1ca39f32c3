/// Interactive session state and the per-key rotation pipeline
use nalgebra::{Matrix4, Vector3};

use crate::axis::Axis;
use crate::decompose::decompose;
use crate::input::{InputHandler, Key, KeyAction, KeyResponse};
use crate::report::PoseReport;
use crate::transform::Transform;

/// Session configuration, injected at construction.
#[derive(Debug, Clone, Copy)]
pub struct SpinConfig {
    /// Degrees applied per recognized rotation key event.
    pub step_degrees: f32,
    /// Offset the object starts at before any rotation.
    pub start_offset: Vector3<f32>,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            step_degrees: 1.0,
            start_offset: Vector3::new(0.0, 0.0, -4.0),
        }
    }
}

/// Lifecycle of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input; the transform is mutable.
    Running,
    /// The quit symbol arrived; nothing mutates anymore.
    Closing,
}

/// Owns the cumulative object transform and runs the map, compose,
/// decompose, report pipeline for every key event fed to it.
pub struct SpinSession {
    transform: Matrix4<f32>,
    step_degrees: f32,
    state: SessionState,
    last_report: Option<PoseReport>,
}

impl SpinSession {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            transform: Transform::translation(&config.start_offset),
            step_degrees: config.step_degrees,
            state: SessionState::Running,
            last_report: None,
        }
    }

    /// Current cumulative transform. The renderer reads this between
    /// events; nothing outside the session writes it.
    pub fn transform(&self) -> &Matrix4<f32> {
        &self.transform
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Most recent successfully decomposed report, if any. A failed
    /// decomposition leaves it untouched.
    pub fn last_report(&self) -> Option<&PoseReport> {
        self.last_report.as_ref()
    }

    fn rotate(&mut self, axis: Axis) -> KeyResponse {
        // Post-multiplying keeps the translation column fixed and makes
        // each step act in the object's current local frame, so repeated
        // presses compound in that evolving frame.
        self.transform *= Transform::axis_rotation(axis, self.step_degrees);

        match decompose(&self.transform) {
            Ok(pose) => {
                let report = PoseReport::from_pose(&pose);
                self.last_report = Some(report.clone());
                KeyResponse::Rotated(report)
            }
            Err(err) => {
                log::warn!("skipping pose report, decomposition failed: {err}");
                KeyResponse::ReportStale(err)
            }
        }
    }
}

impl InputHandler for SpinSession {
    /// Every delivered event for a mapped key advances the rotation by
    /// one step. The action is carried through unfiltered, so repeats
    /// and releases step exactly like presses.
    fn handle_key(&mut self, key: Key, _action: KeyAction) -> KeyResponse {
        if self.state == SessionState::Closing {
            return KeyResponse::Ignored;
        }
        if key == Key::Esc {
            self.state = SessionState::Closing;
            return KeyResponse::Quit;
        }
        match Axis::from_key(key) {
            Some(axis) => self.rotate(axis),
            None => KeyResponse::Ignored,
        }
    }
}
