//! Generic 2D and 3D vectors.
//!
//! Vectors are plain `Copy` values over any [`Number`] component type. All
//! arithmetic is component-wise and only defined between vectors that share
//! the same component type; mixing `Vector2<i32>` with `Vector2<f32>` requires
//! an explicit [`Vector2::cast`].

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Numeric component type usable in [`Vector2`] and [`Vector3`].
pub trait Number:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Lossy conversion used for magnitudes and casts.
    fn to_f64(self) -> f64;

    /// Lossy conversion from `f64`; integers truncate toward zero and saturate.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_number! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    isize => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    usize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

/// A two-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A three-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Eq> Eq for Vector2<T> {}

impl<T: Eq> Eq for Vector3<T> {}

impl<T: Number> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    pub const fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    pub const fn one() -> Self {
        Self::new(T::ONE, T::ONE)
    }

    pub const fn right() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    pub const fn up() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Euclidean length, computed in `f64` regardless of the component type.
    pub fn magnitude(&self) -> f64 {
        let x = self.x.to_f64();
        let y = self.y.to_f64();
        (x * x + y * y).sqrt()
    }

    /// Converts every component to another numeric type.
    pub fn cast<U: Number>(self) -> Vector2<U> {
        Vector2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }

    /// Extends this vector with a `z` component.
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Number + Neg<Output = T>> Vector2<T> {
    pub fn left() -> Self {
        Self::new(-T::ONE, T::ZERO)
    }

    pub fn down() -> Self {
        Self::new(T::ZERO, -T::ONE)
    }
}

impl<T: Number> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    pub const fn one() -> Self {
        Self::new(T::ONE, T::ONE, T::ONE)
    }

    pub const fn right() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    pub const fn up() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    pub const fn forward() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    pub fn magnitude(&self) -> f64 {
        let x = self.x.to_f64();
        let y = self.y.to_f64();
        let z = self.z.to_f64();
        (x * x + y * y + z * z).sqrt()
    }

    pub fn cast<U: Number>(self) -> Vector3<U> {
        Vector3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }

    /// Drops the `z` component.
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Number + Neg<Output = T>> Vector3<T> {
    pub fn left() -> Self {
        Self::new(-T::ONE, T::ZERO, T::ZERO)
    }

    pub fn down() -> Self {
        Self::new(T::ZERO, -T::ONE, T::ZERO)
    }

    pub fn back() -> Self {
        Self::new(T::ZERO, T::ZERO, -T::ONE)
    }
}

// Component-wise operators against another vector and against a scalar.
macro_rules! impl_vector_op {
    ($vector:ident { $($field:ident),+ }, $trait:ident, $method:ident) => {
        impl<T: Number> $trait for $vector<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field.$method(rhs.$field)),+ }
            }
        }

        impl<T: Number> $trait<T> for $vector<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field.$method(rhs)),+ }
            }
        }
    };
}

impl_vector_op!(Vector2 { x, y }, Add, add);
impl_vector_op!(Vector2 { x, y }, Sub, sub);
impl_vector_op!(Vector2 { x, y }, Mul, mul);
impl_vector_op!(Vector2 { x, y }, Div, div);
impl_vector_op!(Vector2 { x, y }, Rem, rem);
impl_vector_op!(Vector3 { x, y, z }, Add, add);
impl_vector_op!(Vector3 { x, y, z }, Sub, sub);
impl_vector_op!(Vector3 { x, y, z }, Mul, mul);
impl_vector_op!(Vector3 { x, y, z }, Div, div);
impl_vector_op!(Vector3 { x, y, z }, Rem, rem);

impl<T: Number + Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Number + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Display> Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Display> Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl<T: Number> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_wise_ops() {
        let a = Vector2::new(6, 9);
        let b = Vector2::new(2, 4);

        assert_eq!(a + b, Vector2::new(8, 13));
        assert_eq!(a - b, Vector2::new(4, 5));
        assert_eq!(a * b, Vector2::new(12, 36));
        assert_eq!(a / b, Vector2::new(3, 2));
        assert_eq!(a % b, Vector2::new(0, 1));
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector3::new(1.5_f32, -2.0, 4.0);

        assert_eq!(v * 2.0, Vector3::new(3.0, -4.0, 8.0));
        assert_eq!(v + 1.0, Vector3::new(2.5, -1.0, 5.0));
        assert_eq!(v / 0.5, Vector3::new(3.0, -4.0, 8.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector2::new(3, 4).magnitude(), 5.0);
        assert_eq!(Vector3::new(2.0_f64, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Vector2::<u8>::zero().magnitude(), 0.0);
    }

    #[test]
    fn test_direction_constants() {
        assert_eq!(Vector2::<i32>::left(), Vector2::new(-1, 0));
        assert_eq!(Vector2::<i32>::down(), Vector2::new(0, -1));
        assert_eq!(Vector3::<f32>::back(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(Vector2::<u32>::right() + Vector2::up(), Vector2::one());
    }

    #[test]
    fn test_cast_truncates_toward_zero() {
        let v = Vector2::new(2.9_f32, -1.7);
        assert_eq!(v.cast::<i32>(), Vector2::new(2, -1));
        assert_eq!(Vector2::new(800, 600).cast::<f32>(), Vector2::new(800.0, 600.0));
    }

    #[test]
    fn test_glam_round_trip() {
        let v = Vector2::new(1.0_f32, 2.0);
        let g: Vec2 = v.into();
        assert_eq!(g, Vec2::new(1.0, 2.0));
        assert_eq!(Vector2::from(g), v);
    }

    #[test]
    fn test_integer_vectors_are_eq() {
        fn distinct<T: Eq + Copy>(values: &[T]) -> Vec<T> {
            let mut out: Vec<T> = Vec::new();
            for &value in values {
                if !out.contains(&value) {
                    out.push(value);
                }
            }
            out
        }

        let sizes = [Vector2::new(800, 600), Vector2::new(800, 600), Vector2::new(1, 2)];
        assert_eq!(distinct(&sizes), vec![Vector2::new(800, 600), Vector2::new(1, 2)]);
        assert_eq!(distinct(&[Vector3::new(1_u8, 2, 3); 3]).len(), 1);
    }
}
