//! # Core value types for Espresso
//!
//! This crate provides the numeric and styling building blocks shared by every
//! other Espresso crate: generic vectors, the scale-plus-offset layout vector,
//! axis-aligned bounds and the color model used as fill values.

pub mod bounds;
pub mod color;
pub mod layout;
pub mod vector;

pub use bounds::Bounds;
pub use color::{BlendMode, Color, ColorShade, GrayscaleMethod, Hsl, NamedColor};
pub use layout::LayoutVector;
pub use vector::{Number, Vector2, Vector3};
