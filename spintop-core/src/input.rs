/// Input contract between the event loop and the rotation logic
use crate::decompose::DecomposeError;
use crate::report::PoseReport;

/// A key symbol, independent of any terminal or windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key.
    Char(char),
    /// The escape key, treated by the session as the quit symbol.
    Esc,
    /// Any key this demo has no name for.
    Other,
}

/// What the backend reported happening to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// Outcome of feeding one key event into a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyResponse {
    /// The transform advanced and a fresh pose report is available.
    Rotated(PoseReport),
    /// The transform advanced but could not be decomposed; the
    /// previously reported pose stays in effect.
    ReportStale(DecomposeError),
    /// The quit symbol was consumed; the handler accepts nothing
    /// further.
    Quit,
    /// Unrecognized key, or the handler is already closing.
    Ignored,
}

/// Capability implemented by anything that consumes key events from the
/// dispatch loop. Keeps the rotation logic decoupled from the backend's
/// own event types.
pub trait InputHandler {
    /// Consume one key event.
    fn handle_key(&mut self, key: Key, action: KeyAction) -> KeyResponse;
}
