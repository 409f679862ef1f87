//! # Modifiers
//!
//! Modifiers are named decorations or constraints attached to at most one
//! node. A node holds at most one modifier of each [`ModifierKind`]; attaching
//! a second one is rejected with a warning and leaves the rejected modifier
//! detached.
//!
//! Only [`SizeConstraint`] takes part in layout. [`Border`] and [`Corner`] are
//! stored data and are not painted by the rasterizer.

use crate::event::SceneEvent;
use crate::{ModifierId, NodeId, SceneError, SceneGraph};
use espresso_core::{Color, Vector2};
use strum_macros::Display;

/// The de-duplication key of a modifier on its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ModifierKind {
    SizeConstraint,
    Border,
    Corner,
}

/// Per-axis bounds applied to a node's resolved size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraint {
    pub minimum: Vector2<f32>,
    pub maximum: Vector2<f32>,
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self {
            minimum: Vector2::splat(f32::NEG_INFINITY),
            maximum: Vector2::splat(f32::INFINITY),
        }
    }
}

impl SizeConstraint {
    pub fn new(minimum: Vector2<f32>, maximum: Vector2<f32>) -> Self {
        Self { minimum, maximum }
    }

    /// Clamps each axis into `[minimum, maximum]`. When the bounds cross, the
    /// maximum wins.
    pub fn clamp(&self, size: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            size.x.max(self.minimum.x).min(self.maximum.x),
            size.y.max(self.minimum.y).min(self.maximum.y),
        )
    }
}

/// Per-edge values, in bottom, left, right, top order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges<T> {
    pub bottom: T,
    pub left: T,
    pub right: T,
    pub top: T,
}

impl<T: Copy> Edges<T> {
    pub fn all(value: T) -> Self {
        Self {
            bottom: value,
            left: value,
            right: value,
            top: value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub color: Edges<Color>,
    pub opacity: Edges<f32>,
    pub radius: Edges<f32>,
    pub width: Edges<f32>,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: Edges::all(Color::black()),
            opacity: Edges::all(1.0),
            radius: Edges::all(0.0),
            width: Edges::all(5.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corner {
    pub radius: Edges<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModifierData {
    SizeConstraint(SizeConstraint),
    Border(Border),
    Corner(Corner),
}

impl ModifierData {
    pub fn kind(&self) -> ModifierKind {
        match self {
            ModifierData::SizeConstraint(_) => ModifierKind::SizeConstraint,
            ModifierData::Border(_) => ModifierKind::Border,
            ModifierData::Corner(_) => ModifierKind::Corner,
        }
    }
}

impl From<SizeConstraint> for ModifierData {
    fn from(value: SizeConstraint) -> Self {
        ModifierData::SizeConstraint(value)
    }
}

impl From<Border> for ModifierData {
    fn from(value: Border) -> Self {
        ModifierData::Border(value)
    }
}

impl From<Corner> for ModifierData {
    fn from(value: Corner) -> Self {
        ModifierData::Corner(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    pub(crate) parent: Option<NodeId>,
    pub active: bool,
    pub data: ModifierData,
}

impl Modifier {
    pub fn kind(&self) -> ModifierKind {
        self.data.kind()
    }

    /// The node this modifier is attached to.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

impl SceneGraph {
    /// Creates a detached, active modifier.
    pub fn create_modifier(&mut self, data: impl Into<ModifierData>) -> ModifierId {
        self.modifiers.insert(Modifier {
            parent: None,
            active: true,
            data: data.into(),
        })
    }

    pub fn modifier(&self, id: ModifierId) -> Option<&Modifier> {
        self.modifiers.get(id)
    }

    pub fn modifier_mut(&mut self, id: ModifierId) -> Option<&mut Modifier> {
        self.modifiers.get_mut(id)
    }

    /// Moves a modifier to `parent`, or detaches it with `None`.
    ///
    /// The modifier first leaves its current node. If the new parent already
    /// holds a modifier of the same kind the attach is rejected: a warning is
    /// logged, the modifier stays detached and `Ok(false)` is returned.
    pub fn set_modifier_parent(
        &mut self,
        modifier: ModifierId,
        parent: Option<NodeId>,
    ) -> Result<bool, SceneError> {
        let (old_parent, kind) = self
            .modifiers
            .get(modifier)
            .map(|entry| (entry.parent, entry.kind()))
            .ok_or(SceneError::ModifierNotFound(modifier))?;
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(SceneError::NodeNotFound(parent));
            }
        }
        if old_parent == parent {
            return Ok(true);
        }

        if let Some(old_parent) = old_parent {
            self.detach_modifier(old_parent, modifier);
        }

        let Some(parent) = parent else {
            return Ok(true);
        };

        if self.modifier_of_kind(parent, kind).is_some() {
            log::warn!("node {parent} already has a {kind} modifier, not attaching modifier {modifier}");
            return Ok(false);
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.modifiers.push(modifier);
        }
        if let Some(entry) = self.modifiers.get_mut(modifier) {
            entry.parent = Some(parent);
        }
        self.events.push(SceneEvent::ModifierAdded {
            node: parent,
            modifier,
        });
        Ok(true)
    }

    /// Attaches `modifier` to `node`. See [`SceneGraph::set_modifier_parent`].
    pub fn add_modifier(&mut self, node: NodeId, modifier: ModifierId) -> Result<bool, SceneError> {
        self.set_modifier_parent(modifier, Some(node))
    }

    /// Detaches `modifier` from `node`. Returns `false` if it wasn't attached there.
    pub fn remove_modifier(&mut self, node: NodeId, modifier: ModifierId) -> bool {
        let attached = self
            .modifiers
            .get(modifier)
            .is_some_and(|entry| entry.parent == Some(node));
        if attached {
            self.detach_modifier(node, modifier);
        }
        attached
    }

    pub fn has_modifier(&self, node: NodeId, kind: ModifierKind) -> bool {
        self.modifier_of_kind(node, kind).is_some()
    }

    /// Modifiers attached to `node`, in attach order.
    pub fn modifiers(&self, node: NodeId) -> &[ModifierId] {
        self.nodes
            .get(node)
            .map(|node| node.modifiers.as_slice())
            .unwrap_or_default()
    }

    pub fn modifier_of_kind(&self, node: NodeId, kind: ModifierKind) -> Option<ModifierId> {
        self.modifiers(node).iter().copied().find(|&id| {
            self.modifiers
                .get(id)
                .is_some_and(|modifier| modifier.kind() == kind)
        })
    }

    /// Detaches and deletes a modifier.
    pub fn destroy_modifier(&mut self, modifier: ModifierId) -> Result<(), SceneError> {
        self.set_modifier_parent(modifier, None)?;
        self.modifiers.remove(modifier);
        Ok(())
    }

    pub(crate) fn active_size_constraint(&self, node: NodeId) -> Option<&SizeConstraint> {
        let id = self.modifier_of_kind(node, ModifierKind::SizeConstraint)?;
        match self.modifiers.get(id)? {
            Modifier {
                active: true,
                data: ModifierData::SizeConstraint(constraint),
                ..
            } => Some(constraint),
            _ => None,
        }
    }

    fn detach_modifier(&mut self, node: NodeId, modifier: ModifierId) {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.modifiers.retain(|id| *id != modifier);
        }
        if let Some(entry) = self.modifiers.get_mut(modifier) {
            entry.parent = None;
        }
        self.events.push(SceneEvent::ModifierRemoved { node, modifier });
    }
}
