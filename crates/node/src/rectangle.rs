//! Rectangle primitive
//!
//! Corners are generated around the origin from half the size, in the order
//! bottom-left, bottom-right, top-right, top-left (screen y grows downward),
//! then rotated and translated to the center position.

use crate::drawable::Drawable;
use crate::outline::{clamp_rotation, Outline};
use espresso_core::{Color, Vector2};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    size: Vector2<f32>,
    position: Vector2<f32>,
    rotation: f32,
    fill: Color,
    outline: Outline,
}

impl Rectangle {
    pub fn new(size: Vector2<f32>, position: Vector2<f32>) -> Self {
        Self {
            size,
            position,
            rotation: 0.0,
            fill: Color::white(),
            outline: Self::calculate(size, position, 0.0),
        }
    }

    /// Corner points and cyclic edges for a rectangle centered on `position`.
    ///
    /// `rotation` is in degrees and is not clamped here.
    pub fn calculate(size: Vector2<f32>, position: Vector2<f32>, rotation: f32) -> Outline {
        let half = Vec2::from(size) * 0.5;
        let corners = [
            Vec2::new(-half.x, half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(-half.x, -half.y),
        ];
        Outline::place(corners, position, rotation)
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.set_rotation(rotation);
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn size(&self) -> Vector2<f32> {
        self.size
    }

    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_size(&mut self, size: Vector2<f32>) {
        self.size = size;
        self.recalculate();
    }

    pub fn set_position(&mut self, position: Vector2<f32>) {
        self.position = position;
        self.recalculate();
    }

    /// Sets the rotation in degrees, clamped to `[-360, 360]`.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = clamp_rotation(rotation);
        self.recalculate();
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    fn recalculate(&mut self) {
        self.outline = Self::calculate(self.size, self.position, self.rotation);
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(Vector2::new(100.0, 100.0), Vector2::zero())
    }
}

impl Drawable for Rectangle {
    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn fill(&self) -> Color {
        self.fill
    }
}
