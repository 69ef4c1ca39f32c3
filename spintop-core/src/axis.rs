/// Rotation axes and the key-to-axis mapping
use nalgebra::{Unit, Vector3};

use crate::input::Key;

/// One of the three world basis axes the object can rotate about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Map a key symbol to the axis it rotates about.
    ///
    /// Both cases of a letter select the same axis. Every other symbol
    /// (the quit key included) maps to nothing.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('x') | Key::Char('X') => Some(Axis::X),
            Key::Char('y') | Key::Char('Y') => Some(Axis::Y),
            Key::Char('z') | Key::Char('Z') => Some(Axis::Z),
            _ => None,
        }
    }

    /// Unit basis vector for this axis.
    pub fn unit(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}
