use crate::outline::Outline;
use crate::shape::{DrawInfo, Shape};
use espresso_core::Color;

/// Anything that can describe itself as points, index edges and a fill.
///
/// Canvases accept any drawable and store it as a one-shape [`DrawInfo`].
pub trait Drawable {
    fn outline(&self) -> &Outline;

    fn fill(&self) -> Color;

    fn to_shape(&self) -> Shape {
        self.outline().to_shape(self.fill())
    }

    fn to_draw_info(&self) -> DrawInfo {
        DrawInfo::from(self.to_shape())
    }
}
