// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the Scalar trait from super::traits.

#![allow(dead_code)]

use core::ops::{Add, Sub};
use serde::{Serialize, Deserialize};

use super::traits::Scalar;
use super::vector2::Vector2;

/// Vector3 is a 3-component vector with a template-able component kind.
///
/// The `f32` default parameter makes the bare `Vector3` name the
/// single-precision instantiation; [`IntVector3`] and [`Vector3D`] fix
/// the integer and double-precision kinds. The aliases add no behavior.
///
/// The named operations mutate the receiver in place and read their
/// other operands immutably, which keeps call sites allocation-free.
/// Dot products, lengths and cross-product intermediates are always
/// computed in `f32`, whatever the component kind: a widening for
/// `IntVector3` and a narrowing for `Vector3D`. Cross products store the
/// `f32` intermediates back into the component kind, which truncates for
/// the integer kind.
///
/// The type enforces no invariant. Any `(x, y, z)` triple is valid,
/// including zero vectors and non-finite float components. `Default`
/// zero-initializes all three fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: Scalar = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// 3D integer vector.
pub type IntVector3 = Vector3<i32>;

/// 3D double-precision vector.
pub type Vector3D = Vector3<f64>;

// Serde encodes the vector as a flat (x, y, z) tuple.
impl<T> Serialize for Vector3<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: Scalar> Vector3<T> {
    /// Construct a new Vector3 from three components.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self {
            x: T::one(),
            y: T::one(),
            z: T::one(),
        }
    }

    /// Promote a planar vector: `x`, `y` are converted from the source
    /// kind, `z` is set to zero.
    pub fn from_vec2<P: Scalar>(point: &Vector2<P>) -> Self {
        Self {
            x: T::from_f64(point.x.to_f64()),
            y: T::from_f64(point.y.to_f64()),
            z: T::zero(),
        }
    }

    /// Convert a vector of another component kind field by field.
    pub fn from_vector<P: Scalar>(vec: &Vector3<P>) -> Self {
        Self {
            x: T::from_f64(vec.x.to_f64()),
            y: T::from_f64(vec.y.to_f64()),
            z: T::from_f64(vec.z.to_f64()),
        }
    }

    /// Assign all three components in place.
    pub fn init(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    // V = V + vec
    pub fn add(&mut self, vec: &Self) {
        self.x = self.x + vec.x;
        self.y = self.y + vec.y;
        self.z = self.z + vec.z;
    }

    // V += vec * scale
    pub fn add_scaled(&mut self, vec: &Self, scale: T) {
        self.x = self.x + (vec.x * scale);
        self.y = self.y + (vec.y * scale);
        self.z = self.z + (vec.z * scale);
    }

    // V = V - vec
    pub fn sub(&mut self, vec: &Self) {
        self.x = self.x - vec.x;
        self.y = self.y - vec.y;
        self.z = self.z - vec.z;
    }

    // V -= vec * scale
    pub fn sub_scaled(&mut self, vec: &Self, scale: T) {
        self.x = self.x - (vec.x * scale);
        self.y = self.y - (vec.y * scale);
        self.z = self.z - (vec.z * scale);
    }

    /// Component-wise (Hadamard) product; not a dot or cross product.
    pub fn multiply(&mut self, vec: &Self) {
        self.x = self.x * vec.x;
        self.y = self.y * vec.y;
        self.z = self.z * vec.z;
    }

    // V *= scale
    pub fn scale(&mut self, scale: T) {
        self.x = self.x * scale;
        self.y = self.y * scale;
        self.z = self.z * scale;
    }

    /// Displace by `vec * d`. Same arithmetic as [`add_scaled`]; the
    /// separate name keeps displacement call sites readable.
    ///
    /// [`add_scaled`]: Vector3::add_scaled
    pub fn offset(&mut self, vec: &Self, d: T) {
        self.add_scaled(vec, d);
    }

    // V = -V
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Dot product, computed in the component kind and widened to the
    /// working float.
    pub fn dot(&self, vec: &Self) -> f32 {
        ((self.x * vec.x) + (self.y * vec.y) + (self.z * vec.z)).to_f32()
    }

    /// Right-handed cross product, V = V x vec.
    pub fn cross(&mut self, vec: &Self) {
        let tx = (self.y.to_f32() * vec.z.to_f32()) - (self.z.to_f32() * vec.y.to_f32());
        let ty = (self.z.to_f32() * vec.x.to_f32()) - (self.x.to_f32() * vec.z.to_f32());
        let tz = (self.x.to_f32() * vec.y.to_f32()) - (self.y.to_f32() * vec.x.to_f32());
        self.x = T::from_f32(tx);
        self.y = T::from_f32(ty);
        self.z = T::from_f32(tz);
    }

    /// Assigning cross product, V = v0 x v1.
    pub fn cross_of(&mut self, v0: &Self, v1: &Self) {
        let tx = (v0.y.to_f32() * v1.z.to_f32()) - (v0.z.to_f32() * v1.y.to_f32());
        let ty = (v0.z.to_f32() * v1.x.to_f32()) - (v0.x.to_f32() * v1.z.to_f32());
        let tz = (v0.x.to_f32() * v1.y.to_f32()) - (v0.y.to_f32() * v1.x.to_f32());
        self.x = T::from_f32(tx);
        self.y = T::from_f32(ty);
        self.z = T::from_f32(tz);
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> f32 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).to_f32()
    }

    /// Return the Euclidean length in the working float precision.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize in place and return the pre-normalization length.
    ///
    /// Unguarded: a zero-length float vector divides by zero and ends up
    /// with non-finite components. Use [`norm_safe`] when the zero-length
    /// case is reachable.
    ///
    /// [`norm_safe`]: Vector3::norm_safe
    pub fn norm(&mut self) -> T {
        let length = T::from_f32(self.length());
        self.x = self.x / length;
        self.y = self.y / length;
        self.z = self.z / length;
        length
    }

    /// Guarded [`norm`](Vector3::norm): on exactly-zero length the
    /// components are left untouched and zero is returned.
    pub fn norm_safe(&mut self) -> T {
        let length = T::from_f32(self.length());
        if length != T::zero() {
            self.x = self.x / length;
            self.y = self.y / length;
            self.z = self.z / length;
        }
        length
    }

    /// Rescale to the requested magnitude and return it.
    ///
    /// Unguarded like [`norm`](Vector3::norm): a zero-length vector
    /// divides by zero.
    pub fn set_length(&mut self, length: T) -> T {
        let scale = T::from_f32(self.length() / length.to_f32());
        self.x = self.x / scale;
        self.y = self.y / scale;
        self.z = self.z / scale;
        length
    }

    /// Resolution-based approximate equality: true iff every component
    /// of `self` lies within `res` of the corresponding component of
    /// `vec`, bounds inclusive. Negative `res` is the caller's problem.
    pub fn compare(&self, vec: &Self, res: T) -> bool {
        self.x <= (vec.x + res) && self.x >= (vec.x - res)
            && self.y <= (vec.y + res) && self.y >= (vec.y - res)
            && self.z <= (vec.z + res) && self.z >= (vec.z - res)
    }

    /// Clamp each component into `[-limits.c, +limits.c]` independently.
    pub fn clamp(&mut self, limits: &Self) {
        if self.x > limits.x { self.x = limits.x; }
        else if self.x < -limits.x { self.x = -limits.x; }
        if self.y > limits.y { self.y = limits.y; }
        else if self.y < -limits.y { self.y = -limits.y; }
        if self.z > limits.z { self.z = limits.z; }
        else if self.z < -limits.z { self.z = -limits.z; }
    }

    /// Move each component toward zero by up to the matching component
    /// of `step`, never crossing zero. One fixed step per call; callers
    /// drive it once per frame for motion damping.
    pub fn dampen(&mut self, step: &Self) {
        self.x = dampened(self.x, step.x);
        self.y = dampened(self.y, step.y);
        self.z = dampened(self.z, step.z);
    }

    /// Linear interpolation toward `target` by `t`.
    ///
    /// `t` is not clamped to `[0, 1]`; values outside the segment
    /// extrapolate.
    pub fn lerp(&mut self, target: &Self, t: T) {
        self.x = self.x + ((target.x - self.x) * t);
        self.y = self.y + ((target.y - self.y) * t);
        self.z = self.z + ((target.z - self.z) * t);
    }

    /// Remove the component of `self` along `normal`.
    ///
    /// `normal` is assumed unit length; no internal normalization takes
    /// place, so a non-unit normal silently yields a wrong but
    /// well-defined result.
    pub fn project(&mut self, normal: &Self) {
        let dot = T::from_f32(self.dot(normal));
        self.x = self.x - (normal.x * dot);
        self.y = self.y - (normal.y * dot);
        self.z = self.z - (normal.z * dot);
    }

    /// Non-orthonormal-basis projection: subtracts `axis * scale` from
    /// `self` where `scale = dot(normal, axis) / dot(self, normal)`.
    pub fn project_axis(&mut self, normal: &Self, axis: &Self) {
        let scale = T::from_f32(normal.dot(axis) / self.dot(normal));
        self.x = self.x - (axis.x * scale);
        self.y = self.y - (axis.y * scale);
        self.z = self.z - (axis.z * scale);
    }

    /// Reflect about the plane with unit normal `normal`:
    /// `V -= normal * (2 * dot(V, normal))`.
    pub fn reflect(&mut self, normal: &Self) {
        let dot = T::from_f32(2.0 * self.dot(normal));
        self.x = self.x - (normal.x * dot);
        self.y = self.y - (normal.y * dot);
        self.z = self.z - (normal.z * dot);
    }

    /// Rotate by `theta` within the plane spanned by `x_axis`/`y_axis`
    /// (assumed orthonormal).
    ///
    /// Only the measured in-plane part is removed and reinserted, so the
    /// component orthogonal to the basis is preserved by construction.
    pub fn rotate_in_basis(&mut self, x_axis: &Self, y_axis: &Self, theta: T) {
        let sin_theta = T::from_f32(theta.to_f32().sin());
        let cos_theta = T::from_f32(theta.to_f32().cos());

        // In-plane coordinates of the vector.
        let x = T::from_f32(self.dot(x_axis));
        let y = T::from_f32(self.dot(y_axis));

        // Move the in-plane part back to the origin.
        self.x = self.x - ((x * x_axis.x) + (y * y_axis.x));
        self.y = self.y - ((x * x_axis.y) + (y * y_axis.y));
        self.z = self.z - ((x * x_axis.z) + (y * y_axis.z));

        // Rotated coordinates.
        let xp = (x * cos_theta) - (y * sin_theta);
        let yp = (y * cos_theta) + (x * sin_theta);

        // Reinsert the rotated in-plane part.
        self.x = self.x + ((xp * x_axis.x) + (yp * y_axis.x));
        self.y = self.y + ((xp * x_axis.y) + (yp * y_axis.y));
        self.z = self.z + ((xp * x_axis.z) + (yp * y_axis.z));
    }

    /// Snap each component to the nearest lower multiple of `step`.
    ///
    /// Truncates `component / step` toward zero, not round-to-nearest;
    /// a zero `step` is the caller's problem.
    pub fn quantize(&mut self, step: T) {
        self.x = T::from_i32((self.x / step).to_i32()) * step;
        self.y = T::from_i32((self.y / step).to_i32()) * step;
        self.z = T::from_i32((self.z / step).to_i32()) * step;
    }

    /// Snap each component to the resolution `step`. Functionally the
    /// same truncate-and-rescale as [`quantize`](Vector3::quantize);
    /// both names are kept so call sites read as intended.
    pub fn res(&mut self, step: T) {
        let x = (self.x / step).to_i32();
        let y = (self.y / step).to_i32();
        let z = (self.z / step).to_i32();
        self.init(
            T::from_i32(x) * step,
            T::from_i32(y) * step,
            T::from_i32(z) * step,
        );
    }
}

// One damping step toward zero, never crossing it.
fn dampened<T: Scalar>(value: T, step: T) -> T {
    if value > T::zero() {
        let next = value - step;
        if next < T::zero() { T::zero() } else { next }
    } else if value < T::zero() {
        let next = value + step;
        if next > T::zero() { T::zero() } else { next }
    } else {
        value
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Implement operator + for Vector3<T>
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Implement operator - for Vector3<T>
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Conversions between Vector3<T> and tuples

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

// The reverse direction is spelled as Into: a generic From impl for a
// foreign tuple/array type runs afoul of the orphan rule.
#[allow(clippy::from_over_into)]
impl<T: Scalar> Into<(T, T, T)> for Vector3<T> {
    fn into(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

#[allow(clippy::from_over_into)]
impl<T: Scalar> Into<[T; 3]> for Vector3<T> {
    fn into(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}
