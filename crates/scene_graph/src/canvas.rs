//! Canvas drawings.
//!
//! Drawings are stored in canvas-local coordinates and re-emitted on every
//! render pass as `p * scale + canvas_position`, where the scale comes from the
//! canvas [`ScaleRule`] and the drawing's own bounding box.

use crate::scene_node::{CanvasContent, ScaleRule};
use crate::{NodeId, SceneError, SceneGraph};
use espresso_core::{Vector2, Vector3};
use node::{DrawInfo, Drawable};

impl ScaleRule {
    /// Per-axis scale mapping a drawing of `drawing_size` into `canvas_size`.
    ///
    /// Zero or non-finite drawing dimensions can't be scaled; they fall back to
    /// 1:1 and a debug message is logged.
    pub fn scale(self, drawing_size: Vector2<f32>, canvas_size: Vector2<f32>) -> Vector2<f32> {
        if self == ScaleRule::None {
            return Vector2::one();
        }

        let degenerate = |d: f32| d == 0.0 || !d.is_finite();
        if degenerate(drawing_size.x) || degenerate(drawing_size.y) {
            log::debug!("drawing size {drawing_size} is degenerate, drawing at 1:1 instead of {self}");
            return Vector2::one();
        }

        let ratio = canvas_size / drawing_size;
        match self {
            ScaleRule::Fit => Vector2::splat(ratio.x.min(ratio.y)),
            ScaleRule::Stretch => ratio,
            ScaleRule::None => Vector2::one(),
        }
    }

    /// A transformed copy of `drawing` placed in a canvas at `canvas_position`.
    pub fn apply(
        self,
        drawing: &DrawInfo,
        canvas_size: Vector2<f32>,
        canvas_position: Vector2<f32>,
    ) -> DrawInfo {
        let drawing_size = drawing
            .bounds()
            .map_or(Vector2::zero(), |bounds| Vector2::from(bounds.size()));
        let scale = self.scale(drawing_size, canvas_size);

        drawing.map_points(|p| {
            Vector3::new(
                p.x * scale.x + canvas_position.x,
                p.y * scale.y + canvas_position.y,
                p.z,
            )
        })
    }
}

impl SceneGraph {
    fn canvas_content(&self, canvas: NodeId) -> Result<&CanvasContent, SceneError> {
        self.nodes
            .get(canvas)
            .ok_or(SceneError::NodeNotFound(canvas))?
            .canvas
            .as_ref()
            .ok_or(SceneError::NotACanvas(canvas))
    }

    fn canvas_content_mut(&mut self, canvas: NodeId) -> Result<&mut CanvasContent, SceneError> {
        self.nodes
            .get_mut(canvas)
            .ok_or(SceneError::NodeNotFound(canvas))?
            .canvas
            .as_mut()
            .ok_or(SceneError::NotACanvas(canvas))
    }

    /// Appends a drawing to a canvas.
    pub fn draw(&mut self, canvas: NodeId, drawing: DrawInfo) -> Result<(), SceneError> {
        self.canvas_content_mut(canvas)?.drawings.push(drawing);
        Ok(())
    }

    /// Appends any drawable as a single-shape drawing.
    pub fn draw_drawable(
        &mut self,
        canvas: NodeId,
        drawable: &impl Drawable,
    ) -> Result<(), SceneError> {
        self.draw(canvas, drawable.to_draw_info())
    }

    /// Removes the first drawing equal to `drawing`. Returns whether one was found.
    pub fn erase(&mut self, canvas: NodeId, drawing: &DrawInfo) -> Result<bool, SceneError> {
        let drawings = &mut self.canvas_content_mut(canvas)?.drawings;
        match drawings.iter().position(|d| d == drawing) {
            Some(index) => {
                drawings.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self, canvas: NodeId) -> Result<(), SceneError> {
        self.canvas_content_mut(canvas)?.drawings.clear();
        Ok(())
    }

    pub fn drawings(&self, canvas: NodeId) -> Result<&[DrawInfo], SceneError> {
        Ok(&self.canvas_content(canvas)?.drawings)
    }

    pub fn scale_rule(&self, canvas: NodeId) -> Result<ScaleRule, SceneError> {
        Ok(self.canvas_content(canvas)?.scale_rule)
    }

    pub fn set_scale_rule(&mut self, canvas: NodeId, rule: ScaleRule) -> Result<(), SceneError> {
        self.canvas_content_mut(canvas)?.scale_rule = rule;
        Ok(())
    }
}
