//! Scene node data: the root surface, interface properties, canvas content.

use crate::{ModifierId, NodeId};
use espresso_core::{Color, LayoutVector, Vector2};
use node::{clamp_rotation, DrawInfo};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum_macros::Display;

/// The concrete type of a node. Its `Display` form is the type name matched by
/// `<TypeName>` selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    Frame,
    Canvas,
}

/// How a canvas fits its drawings into its own resolved size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ScaleRule {
    /// Draw at 1:1.
    #[default]
    None,
    /// Uniform scale so the drawing fits inside the canvas.
    Fit,
    /// Independent per-axis scale so the drawing fills the canvas.
    Stretch,
}

/// The root of the tree: the surface the window renders onto.
///
/// Its size is used directly by children and its position is the coordinate
/// origin; children never add it to their own position.
#[derive(Clone, Debug, PartialEq)]
pub struct RootSurface {
    pub size: Vector2<i32>,
    pub position: Vector2<i32>,
    pub fill: Color,
}

impl Default for RootSurface {
    fn default() -> Self {
        Self {
            size: Vector2::new(800, 600),
            position: Vector2::zero(),
            fill: Color::white(),
        }
    }
}

/// Layout and appearance shared by frames and canvases.
#[derive(Clone, Debug, PartialEq)]
pub struct Interface {
    pub size: LayoutVector,
    pub position: LayoutVector,
    pub background_color: Color,
    /// Hidden nodes render nothing and neither do their descendants.
    pub visible: bool,
    /// Restricts painting of descendants to this node's resolved bounds.
    pub clip: bool,
    rotation: f32,
    opacity: f32,
    absolute_size: Vector2<f32>,
    absolute_position: Vector2<f32>,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            size: LayoutVector::from_offset(200, 200),
            position: LayoutVector::zero(),
            background_color: Color::white(),
            visible: true,
            clip: false,
            rotation: 0.0,
            opacity: 1.0,
            absolute_size: Vector2::zero(),
            absolute_position: Vector2::zero(),
        }
    }
}

impl Interface {
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Degrees, clamped to `[-360, 360]`.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = clamp_rotation(rotation);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Clamped to `[0, 1]`; multiplies the background alpha when rendered.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    /// Resolved size from the most recent render pass.
    pub fn absolute_size(&self) -> Vector2<f32> {
        self.absolute_size
    }

    /// Resolved top-left corner from the most recent render pass.
    pub fn absolute_position(&self) -> Vector2<f32> {
        self.absolute_position
    }

    pub(crate) fn set_resolved(&mut self, size: Vector2<f32>, position: Vector2<f32>) {
        self.absolute_size = size;
        self.absolute_position = position;
    }
}

/// Drawings submitted to a canvas, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasContent {
    pub(crate) drawings: Vec<DrawInfo>,
    pub(crate) scale_rule: ScaleRule,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum NodeLayout {
    Surface(RootSurface),
    Interface(Interface),
}

/// A single node in the scene graph.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub(crate) kind: NodeKind,
    pub(crate) name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) tags: SmallVec<[String; 2]>,
    pub(crate) modifiers: SmallVec<[ModifierId; 2]>,
    pub(crate) layout: NodeLayout,
    pub(crate) canvas: Option<CanvasContent>,
}

impl SceneNode {
    pub(crate) fn root() -> Self {
        Self::with_layout(NodeKind::Root, NodeLayout::Surface(RootSurface::default()))
    }

    pub(crate) fn new(kind: NodeKind) -> Self {
        let mut node = Self::with_layout(kind, NodeLayout::Interface(Interface::default()));
        if kind == NodeKind::Canvas {
            node.canvas = Some(CanvasContent::default());
        }
        node
    }

    fn with_layout(kind: NodeKind, layout: NodeLayout) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            parent: None,
            children: Vec::new(),
            tags: SmallVec::new(),
            modifiers: SmallVec::new(),
            layout,
            canvas: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order, which is also paint order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn modifiers(&self) -> &[ModifierId] {
        &self.modifiers
    }

    pub fn interface(&self) -> Option<&Interface> {
        match &self.layout {
            NodeLayout::Interface(interface) => Some(interface),
            NodeLayout::Surface(_) => None,
        }
    }

    pub(crate) fn interface_mut(&mut self) -> Option<&mut Interface> {
        match &mut self.layout {
            NodeLayout::Interface(interface) => Some(interface),
            NodeLayout::Surface(_) => None,
        }
    }

    /// Whether this node paints at all; the root is always visible.
    pub fn is_visible(&self) -> bool {
        self.interface().map_or(true, |interface| interface.visible)
    }
}
