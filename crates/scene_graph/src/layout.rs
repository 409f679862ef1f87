//! Layout resolution.
//!
//! A node resolves its size and position against the geometry of its parent,
//! which is either the root surface or another interface node. Both expose
//! that geometry through [`LayoutReference`].

use crate::scene_node::{Interface, NodeLayout, RootSurface};
use crate::{NodeId, SceneGraph};
use espresso_core::Vector2;
use node::{DrawInfo, Drawable, Rectangle};

/// Geometry a child lays itself out against.
pub trait LayoutReference {
    fn resolved_size(&self) -> Vector2<f32>;

    fn resolved_position(&self) -> Vector2<f32>;

    /// Root references act as the coordinate origin: their position is not
    /// added to children.
    fn is_root(&self) -> bool;
}

impl LayoutReference for RootSurface {
    fn resolved_size(&self) -> Vector2<f32> {
        self.size.cast()
    }

    fn resolved_position(&self) -> Vector2<f32> {
        self.position.cast()
    }

    fn is_root(&self) -> bool {
        true
    }
}

impl LayoutReference for Interface {
    fn resolved_size(&self) -> Vector2<f32> {
        self.absolute_size()
    }

    fn resolved_position(&self) -> Vector2<f32> {
        self.absolute_position()
    }

    fn is_root(&self) -> bool {
        false
    }
}

impl LayoutReference for NodeLayout {
    fn resolved_size(&self) -> Vector2<f32> {
        match self {
            NodeLayout::Surface(surface) => surface.resolved_size(),
            NodeLayout::Interface(interface) => interface.resolved_size(),
        }
    }

    fn resolved_position(&self) -> Vector2<f32> {
        match self {
            NodeLayout::Surface(surface) => surface.resolved_position(),
            NodeLayout::Interface(interface) => interface.resolved_position(),
        }
    }

    fn is_root(&self) -> bool {
        match self {
            NodeLayout::Surface(surface) => surface.is_root(),
            NodeLayout::Interface(interface) => interface.is_root(),
        }
    }
}

impl SceneGraph {
    /// Resolves a node's absolute geometry and returns its drawing.
    ///
    /// Returns `None` for the root, for missing nodes and for detached nodes.
    /// The parent's cached geometry is used as is, so parents must be rendered
    /// before their children; [`SceneGraph::render_tree`] does this.
    pub fn render_node(&mut self, id: NodeId) -> Option<DrawInfo> {
        let parent_id = self.nodes.get(id)?.parent?;
        let parent = self.nodes.get(parent_id)?;
        let parent_size = parent.layout.resolved_size();
        let parent_offset = if parent.layout.is_root() {
            Vector2::zero()
        } else {
            parent.layout.resolved_position()
        };

        let constraint = self.active_size_constraint(id).copied();

        let node = self.nodes.get_mut(id)?;
        let interface = node.interface_mut()?;

        let mut size = interface.size.resolve(parent_size);
        let position = interface.position.resolve(parent_size) + parent_offset;
        if let Some(constraint) = constraint {
            size = constraint.clamp(size);
        }
        interface.set_resolved(size, position);

        let fill = interface.background_color.with_opacity(interface.opacity());
        let center = position + size / 2.0;
        let mut info = Rectangle::new(size, center)
            .with_rotation(interface.rotation())
            .with_fill(fill)
            .to_draw_info();

        if let Some(canvas) = &node.canvas {
            for drawing in &canvas.drawings {
                info.extend(canvas.scale_rule.apply(drawing, size, position));
            }
        }

        Some(info)
    }
}
