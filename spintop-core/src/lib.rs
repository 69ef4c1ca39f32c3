/// Spintop Core Library - Shared transform pipeline and scene types
///
/// This library provides the stateless core of the spinning-cube demo:
/// key-to-axis mapping, rotation composition into a cumulative transform,
/// affine decomposition, pose reporting, and the session state machine,
/// plus the mesh and camera types the terminal frontend renders with.

pub mod axis;
pub mod decompose;
pub mod geometry;
pub mod input;
pub mod projection;
pub mod report;
pub mod session;
pub mod transform;

// Re-export commonly used types
pub use axis::Axis;
pub use decompose::{decompose, DecomposeError, DecomposedPose};
pub use geometry::{Mesh, Triangle, Vertex};
pub use input::{InputHandler, Key, KeyAction, KeyResponse};
pub use projection::Camera;
pub use report::PoseReport;
pub use session::{SessionState, SpinConfig, SpinSession};
pub use transform::Transform;
