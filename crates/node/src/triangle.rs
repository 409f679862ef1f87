//! Triangle primitive
//!
//! Each [`TriangleType`] has a fixed vertex template inside its bounding box
//! `[0, w] x [0, h]`. Templates are centered on the box before rotation, so
//! `position` is the center of the unrotated bounding box.

use crate::drawable::Drawable;
use crate::outline::{clamp_rotation, Outline};
use espresso_core::{Color, Vector2};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum TriangleType {
    #[default]
    Acute,
    /// Side length is the width; height is `side * sqrt(3) / 2` and the
    /// requested height is ignored.
    Equilateral,
    Isosceles,
    Obtuse,
    Right,
    Scalene,
}

impl TriangleType {
    /// Vertices inside the bounding box, plus the box size.
    fn template(self, size: Vec2) -> ([Vec2; 3], Vec2) {
        let (w, h) = (size.x, size.y);
        match self {
            TriangleType::Acute => (
                [Vec2::new(0.0, h), Vec2::new(w, h), Vec2::new(w * 0.25, 0.0)],
                size,
            ),
            TriangleType::Equilateral => {
                let side = w;
                let height = side * 3f32.sqrt() / 2.0;
                (
                    [
                        Vec2::new(0.0, height),
                        Vec2::new(side, height),
                        Vec2::new(side / 2.0, 0.0),
                    ],
                    Vec2::new(side, height),
                )
            }
            TriangleType::Isosceles => (
                [Vec2::new(0.0, h), Vec2::new(w, h), Vec2::new(w / 2.0, 0.0)],
                size,
            ),
            TriangleType::Obtuse => (
                [Vec2::new(0.0, h), Vec2::new(w, h), Vec2::new(w * 0.2, 0.0)],
                size,
            ),
            TriangleType::Right => (
                [Vec2::new(0.0, 0.0), Vec2::new(w, 0.0), Vec2::new(0.0, h)],
                size,
            ),
            TriangleType::Scalene => (
                [Vec2::new(0.0, h), Vec2::new(w, h * 0.8), Vec2::new(w * 0.1, 0.0)],
                size,
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    kind: TriangleType,
    size: Vector2<f32>,
    position: Vector2<f32>,
    rotation: f32,
    fill: Color,
    outline: Outline,
}

impl Triangle {
    pub fn new(kind: TriangleType, size: Vector2<f32>, position: Vector2<f32>) -> Self {
        Self {
            kind,
            size,
            position,
            rotation: 0.0,
            fill: Color::white(),
            outline: Self::calculate(kind, size, position, 0.0),
        }
    }

    /// Vertices and cyclic edges for a triangle whose bounding box is centered
    /// on `position`. `rotation` is in degrees and is not clamped here.
    pub fn calculate(
        kind: TriangleType,
        size: Vector2<f32>,
        position: Vector2<f32>,
        rotation: f32,
    ) -> Outline {
        let (vertices, extent) = kind.template(Vec2::from(size));
        let center = extent * 0.5;
        Outline::place(vertices.map(|v| v - center), position, rotation)
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.set_rotation(rotation);
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn kind(&self) -> TriangleType {
        self.kind
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

    pub fn set_kind(&mut self, kind: TriangleType) {
        self.kind = kind;
        self.recalculate();
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
        self.outline = Self::calculate(self.kind, self.size, self.position, self.rotation);
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(TriangleType::Acute, Vector2::new(100.0, 100.0), Vector2::zero())
    }
}

impl Drawable for Triangle {
    fn outline(&self) -> &Outline {
        &self.outline
    }

    fn fill(&self) -> Color {
        self.fill
    }
}
