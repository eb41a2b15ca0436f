// src/numerics/types/vector2.rs
// Planar companion type; source of the Vector3 promotion constructor.

#![allow(dead_code)]

use serde::{Serialize, Deserialize};

use super::traits::Scalar;

/// Vector2 is the two-component planar vector the engine hands to
/// `Vector3::from_vec2` when promoting screen- or plane-space values
/// into 3D.
///
/// It carries no arithmetic of its own; it exists as a promotion source
/// and for field-compatible interop.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T: Scalar = f32> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    /// Construct a new Vector2 from two components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

// Reverse direction as Into; the generic From form for a foreign tuple
// type is rejected by the orphan rule.
#[allow(clippy::from_over_into)]
impl<T: Scalar> Into<(T, T)> for Vector2<T> {
    fn into(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }
}

#[allow(clippy::from_over_into)]
impl<T: Scalar> Into<[T; 2]> for Vector2<T> {
    fn into(self) -> [T; 2] {
        [self.x, self.y]
    }
}
