//! The renderer-agnostic drawing representation.
//!
//! Shapes are built fresh by each render pass or by a canvas `draw` call and
//! are never mutated in place by the renderer; transforms produce new shapes.

use crate::error::GeometryError;
use espresso_core::{Bounds, Color, Vector3};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A vertex of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Vector3<f32>,
    /// Reserved for point rendering; the rasterizer ignores it.
    pub radius: Option<f32>,
}

impl Point {
    pub fn new(position: Vector3<f32>) -> Self {
        Self {
            position,
            radius: None,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    DashDot,
}

/// An edge between two points of the owning shape, by index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    pub thickness: f32,
    pub opacity: f32,
    pub style: LineStyle,
    /// Overrides the shape fill for this line when set.
    pub fill: Option<Color>,
}

impl Line {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            thickness: 1.0,
            opacity: 1.0,
            style: LineStyle::Solid,
            fill: None,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Points, the lines connecting them, and a fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    points: Vec<Point>,
    lines: Vec<Line>,
    fill: Color,
}

impl Shape {
    /// Builds a shape, rejecting lines that reference missing points and
    /// points with non-finite coordinates.
    pub fn new(points: Vec<Point>, lines: Vec<Line>, fill: Color) -> Result<Self, GeometryError> {
        if let Some(index) = points.iter().position(|point| {
            !(point.position.x.is_finite()
                && point.position.y.is_finite()
                && point.position.z.is_finite())
        }) {
            return Err(GeometryError::NonFinitePoint { index });
        }

        let len = points.len();
        for (line, edge) in lines.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= len {
                    return Err(GeometryError::PointOutOfRange { line, index, len });
                }
            }
        }

        Ok(Self::from_parts_unchecked(points, lines, fill))
    }

    /// A closed polygon through `points` in order.
    pub fn polygon(points: Vec<Point>, fill: Color) -> Result<Self, GeometryError> {
        let len = points.len();
        let lines = (0..len).map(|i| Line::new(i, (i + 1) % len)).collect();
        Self::new(points, lines, fill)
    }

    pub(crate) fn from_parts_unchecked(points: Vec<Point>, lines: Vec<Line>, fill: Color) -> Self {
        Self {
            points,
            lines,
            fill,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Edges as point index pairs. A shape without lines is the closed polygon
    /// of its points in index order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        if self.lines.is_empty() {
            let len = self.points.len();
            (0..len).map(|i| (i, (i + 1) % len)).collect()
        } else {
            self.lines.iter().map(|line| (line.start, line.end)).collect()
        }
    }

    /// Axis-aligned bounds of the points in the xy plane.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().map(Point::xy))
    }

    /// A copy with every point position mapped through `transform`. Fill,
    /// radii and line topology are preserved.
    pub fn map_points<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(Vector3<f32>) -> Vector3<f32>,
    {
        let points = self
            .points
            .iter()
            .map(|point| Point {
                position: transform(point.position),
                radius: point.radius,
            })
            .collect();
        Self::from_parts_unchecked(points, self.lines.clone(), self.fill)
    }
}

/// An ordered list of shapes making up one drawing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawInfo {
    shapes: Vec<Shape>,
}

impl DrawInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn extend(&mut self, other: DrawInfo) {
        self.shapes.extend(other.shapes);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Union of all shape bounds, `None` when there are no points at all.
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .filter_map(Shape::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn map_points<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(Vector3<f32>) -> Vector3<f32>,
    {
        Self {
            shapes: self
                .shapes
                .iter()
                .map(|shape| shape.map_points(&mut transform))
                .collect(),
        }
    }
}

impl From<Shape> for DrawInfo {
    fn from(shape: Shape) -> Self {
        Self::from_shapes(vec![shape])
    }
}
