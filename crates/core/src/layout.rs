//! Scale-plus-offset layout vectors.
//!
//! A [`LayoutVector`] describes one 2D quantity (a size or a position) relative
//! to a parent dimension: a fractional `scale` of the parent plus an absolute
//! pixel `offset`. `LayoutVector::new(0.5, 0.5, 10, 0)` against a 800×600
//! parent resolves to `(410, 300)`.

use crate::vector::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Rem, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutVector {
    pub scale: Vector2<f32>,
    pub offset: Vector2<i32>,
}

impl LayoutVector {
    pub fn new(scale_x: f32, scale_y: f32, offset_x: i32, offset_y: i32) -> Self {
        Self {
            scale: Vector2::new(scale_x, scale_y),
            offset: Vector2::new(offset_x, offset_y),
        }
    }

    /// A purely proportional vector with zero offset.
    pub fn from_scale(scale_x: f32, scale_y: f32) -> Self {
        Self::new(scale_x, scale_y, 0, 0)
    }

    /// A purely absolute vector with zero scale.
    pub fn from_offset(offset_x: i32, offset_y: i32) -> Self {
        Self::new(0.0, 0.0, offset_x, offset_y)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Resolves against a parent dimension: `parent * scale + offset`.
    pub fn resolve(&self, parent: Vector2<f32>) -> Vector2<f32> {
        parent * self.scale + self.offset.cast::<f32>()
    }
}

// Scale combines with scale and offset with offset. Integer offsets follow
// integer semantics, so `/` and `%` panic on a zero offset component.
macro_rules! impl_layout_op {
    ($trait:ident, $method:ident) => {
        impl $trait for LayoutVector {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self {
                    scale: self.scale.$method(rhs.scale),
                    offset: self.offset.$method(rhs.offset),
                }
            }
        }
    };
}

impl_layout_op!(Add, add);
impl_layout_op!(Sub, sub);
impl_layout_op!(Mul, mul);
impl_layout_op!(Div, div);
impl_layout_op!(Rem, rem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_scale_and_offset() {
        let size = LayoutVector::new(0.5, 0.25, 10, -4);
        assert_eq!(
            size.resolve(Vector2::new(800.0, 800.0)),
            Vector2::new(410.0, 196.0)
        );
    }

    #[test]
    fn test_constructors() {
        assert_eq!(LayoutVector::from_scale(1.0, 1.0).offset, Vector2::zero());
        assert_eq!(
            LayoutVector::from_offset(200, 200).resolve(Vector2::new(50.0, 75.0)),
            Vector2::new(200.0, 200.0)
        );
    }

    #[test]
    fn test_arithmetic_is_per_part() {
        let a = LayoutVector::new(0.5, 0.5, 10, 20);
        let b = LayoutVector::new(0.25, 0.5, 5, 3);

        assert_eq!(a + b, LayoutVector::new(0.75, 1.0, 15, 23));
        assert_eq!(a - b, LayoutVector::new(0.25, 0.0, 5, 17));
        assert_eq!(a * b, LayoutVector::new(0.125, 0.25, 50, 60));
        assert_eq!(a / b, LayoutVector::new(2.0, 1.0, 2, 6));
        assert_eq!(a % b, LayoutVector::new(0.0, 0.0, 0, 2));
    }
}
