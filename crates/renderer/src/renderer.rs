//! # Renderer
//!
//! Turns a [`SceneGraph`] into pixels. Every frame starts from a surface
//! cleared to the root fill; nodes are then painted depth-first in child
//! insertion order, each shape rasterized by [`raster::scanline_spans`] and
//! composited source-over with one draw call per span.

pub mod raster;
mod surface;

pub use raster::{coverage, scanline_spans, Span};
pub use surface::{
    blend_over, DrawBlend, PixelSurface, Surface, SurfaceError, SurfaceEvent,
    MAX_SURFACE_DIMENSION,
};

use espresso_core::Bounds;
use glam::Vec2;
use scene_graph::SceneGraph;

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub items: usize,
    pub shapes: usize,
    pub spans: usize,
}

#[derive(Debug, Default)]
pub struct Renderer {
    last_frame: FrameStats,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Renders one full frame of `graph` onto `surface` and presents it.
    ///
    /// Layout is resolved as part of the pass, so node geometry read after
    /// this call reflects the frame just drawn.
    pub fn render<S>(&mut self, graph: &mut SceneGraph, surface: &mut S) -> Result<FrameStats, SurfaceError>
    where
        S: Surface + ?Sized,
    {
        let size = surface.size();
        let surface_bounds =
            Bounds::from_origin_size(Vec2::ZERO, Vec2::new(size.x as f32, size.y as f32));

        surface.set_blend_mode(DrawBlend::None);
        surface.set_draw_color(graph.surface().fill);
        surface.clear();
        surface.set_blend_mode(DrawBlend::Alpha);

        let items = graph.render_tree();
        let mut stats = FrameStats {
            items: items.len(),
            ..Default::default()
        };

        for item in &items {
            let clip = match item.clip {
                Some(clip) => match clip.intersection(&surface_bounds) {
                    Some(clip) => clip,
                    None => continue,
                },
                None => surface_bounds,
            };

            for shape in item.draw_info.shapes() {
                stats.shapes += 1;
                let spans = scanline_spans(shape, Some(&clip));
                if spans.is_empty() {
                    continue;
                }

                surface.set_draw_color(shape.fill());
                for span in &spans {
                    surface.fill_rect(span.start, span.y, span.len(), 1);
                }
                stats.spans += spans.len();
            }
        }

        surface.present()?;
        log::trace!(
            "frame: {} items, {} shapes, {} spans",
            stats.items,
            stats.shapes,
            stats.spans
        );

        self.last_frame = stats;
        Ok(stats)
    }
}
