//! Render IR and drawing primitives for Espresso.
//!
//! A [`DrawInfo`] is an ordered list of [`Shape`]s. Each shape owns its points,
//! the [`Line`]s connecting them by point index, and a fill. Scene nodes and
//! canvases produce draw infos, and the renderer rasterizes them.
//!
//! [`Rectangle`] and [`Triangle`] are pure generators: given a size, a center
//! position and a rotation they produce an [`Outline`] of absolute points plus
//! index edges.

mod drawable;
mod error;
mod outline;
mod rectangle;
mod shape;
mod triangle;

pub use drawable::Drawable;
pub use error::GeometryError;
pub use outline::{clamp_rotation, Outline};
pub use rectangle::Rectangle;
pub use shape::{DrawInfo, Line, LineStyle, Point, Shape};
pub use triangle::{Triangle, TriangleType};
