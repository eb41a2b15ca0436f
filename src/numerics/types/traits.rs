// src/numerics/types/traits.rs
// Scalar component trait shared by the vector types.

#![allow(dead_code)]

/// Scalar is the minimal numeric surface the vector types need from a
/// component kind.
///
/// Implemented for the three kinds the engine instantiates: `i32`, `f32`
/// and `f64`. All conversions use `as` cast semantics, so narrowing a
/// float into the integer kind truncates toward zero.
pub trait Scalar:
Copy + PartialEq + PartialOrd + core::fmt::Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Widen to the working float precision used for dot products,
    /// lengths and cross-product intermediates.
    fn to_f32(self) -> f32;

    /// Narrow from the working float back into the component kind.
    fn from_f32(v: f32) -> Self;

    /// Exact route for converting fields between component kinds; `f64`
    /// represents every `i32` and every `f32` without loss.
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;

    /// Truncate toward zero to a 32-bit integer.
    fn to_i32(self) -> i32;
    fn from_i32(v: i32) -> Self;
}

impl Scalar for i32 {
    fn zero() -> Self { 0 }
    fn one() -> Self { 1 }
    fn to_f32(self) -> f32 { self as f32 }
    fn from_f32(v: f32) -> Self { v as i32 }
    fn to_f64(self) -> f64 { self as f64 }
    fn from_f64(v: f64) -> Self { v as i32 }
    fn to_i32(self) -> i32 { self }
    fn from_i32(v: i32) -> Self { v }
}

impl Scalar for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn to_f32(self) -> f32 { self }
    fn from_f32(v: f32) -> Self { v }
    fn to_f64(self) -> f64 { self as f64 }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn to_i32(self) -> i32 { self as i32 }
    fn from_i32(v: i32) -> Self { v as f32 }
}

impl Scalar for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn to_f32(self) -> f32 { self as f32 }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn to_f64(self) -> f64 { self }
    fn from_f64(v: f64) -> Self { v }
    fn to_i32(self) -> i32 { self as i32 }
    fn from_i32(v: i32) -> Self { v as f64 }
}
