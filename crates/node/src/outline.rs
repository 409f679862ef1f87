use crate::shape::{Line, Point, Shape};
use espresso_core::{Color, Vector2};
use glam::Vec2;

pub const MAX_ROTATION: f32 = 360.0;

/// Clamps a rotation in degrees to `[-360, 360]`. NaN becomes `0`.
pub fn clamp_rotation(degrees: f32) -> f32 {
    if degrees.is_nan() {
        0.0
    } else {
        degrees.clamp(-MAX_ROTATION, MAX_ROTATION)
    }
}

/// Absolute points plus edges referencing them by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub points: Vec<Vector2<f32>>,
    pub edges: Vec<(usize, usize)>,
}

impl Outline {
    /// Rotates `local` points (centered on the origin) by `rotation` degrees,
    /// then translates them to `position`. Edges connect consecutive points
    /// cyclically.
    pub(crate) fn place<I>(local: I, position: Vector2<f32>, rotation: f32) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        let position = Vec2::from(position);
        let rotor = (rotation != 0.0).then(|| Vec2::from_angle(rotation.to_radians()));

        let points: Vec<Vector2<f32>> = local
            .into_iter()
            .map(|point| {
                let rotated = match rotor {
                    Some(rotor) => rotor.rotate(point),
                    None => point,
                };
                Vector2::from(rotated + position)
            })
            .collect();

        let len = points.len();
        let edges = (0..len).map(|i| (i, (i + 1) % len)).collect();

        Self { points, edges }
    }

    /// Mean of all points.
    pub fn centroid(&self) -> Option<Vector2<f32>> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |sum, point| sum + Vec2::from(*point));
        Some(Vector2::from(sum / self.points.len() as f32))
    }

    /// Converts to a single render shape. Edge indices of an outline always
    /// refer to its own points.
    pub fn to_shape(&self, fill: Color) -> Shape {
        let points = self
            .points
            .iter()
            .map(|point| Point::new(point.extend(0.0)))
            .collect();
        let lines = self
            .edges
            .iter()
            .map(|&(start, end)| Line::new(start, end))
            .collect();
        Shape::from_parts_unchecked(points, lines, fill)
    }
}
