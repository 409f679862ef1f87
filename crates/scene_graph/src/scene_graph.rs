//! # Scene Graph
//!
//! The scene graph owns every node of a window's interface tree in a slotmap
//! arena. The root node is the window's surface; frames and canvases hang below
//! it and resolve their absolute geometry from their parent on every render
//! pass.
//!
//! ## Key Concepts
//!
//! - **Nodes**: a parent link, ordered unique children, unique tags, and at
//!   most one modifier per [`ModifierKind`]
//! - **Layout**: scale-plus-offset size and position resolved against the
//!   parent through [`LayoutReference`]
//! - **Modifiers**: a second arena of size constraints and border/corner data,
//!   each attached to at most one node
//! - **Events**: structural changes are queued as [`SceneEvent`]s and drained
//!   by the caller, never delivered during traversal
//!
//! Parent links and child lists are only changed together, by the tree
//! operations in this module.

mod canvas;
mod error;
mod event;
mod layout;
mod modifier;
mod scene_node;
mod render;
mod selector;

pub use error::SceneError;
pub use event::SceneEvent;
pub use layout::LayoutReference;
pub use modifier::{
    Border, Corner, Edges, Modifier, ModifierData, ModifierKind, SizeConstraint,
};
pub use render::RenderItem;
pub use scene_node::{CanvasContent, Interface, NodeKind, RootSurface, ScaleRule, SceneNode};
pub use selector::Selector;

use espresso_core::{Color, Vector2};
use scene_node::{NodeLayout, SceneNode as Node};
use slotmap::{Key, SlotMap};
use std::fmt::{self, Display};

slotmap::new_key_type! {
    /// Identifies a node within a [`SceneGraph`].
    pub struct NodeId;

    /// Identifies a modifier within a [`SceneGraph`].
    pub struct ModifierId;
}

impl NodeId {
    pub fn as_u64(self) -> u64 {
        self.data().as_ffi()
    }
}

impl ModifierId {
    pub fn as_u64(self) -> u64 {
        self.data().as_ffi()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

impl Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

/// The retained interface tree of one window.
///
/// All mutation and traversal happen through `&mut self`, so a render pass
/// can't observe a half-edited tree.
#[derive(Debug)]
pub struct SceneGraph {
    root: NodeId,
    nodes: SlotMap<NodeId, Node>,
    modifiers: SlotMap<ModifierId, Modifier>,
    events: Vec<SceneEvent>,
}

impl SceneGraph {
    /// Creates a graph containing only the root surface node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::root());

        Self {
            root,
            nodes,
            modifiers: SlotMap::with_key(),
            events: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn surface(&self) -> &RootSurface {
        match &self.nodes[self.root].layout {
            NodeLayout::Surface(surface) => surface,
            NodeLayout::Interface(_) => unreachable!("root node always holds the surface"),
        }
    }

    fn surface_mut(&mut self) -> &mut RootSurface {
        match &mut self.nodes[self.root].layout {
            NodeLayout::Surface(surface) => surface,
            NodeLayout::Interface(_) => unreachable!("root node always holds the surface"),
        }
    }

    /// Updates the root geometry, typically from a surface resize or move.
    pub fn set_surface_geometry(&mut self, size: Vector2<i32>, position: Vector2<i32>) {
        let surface = self.surface_mut();
        surface.size = size;
        surface.position = position;
    }

    pub fn set_surface_fill(&mut self, fill: Color) {
        self.surface_mut().fill = fill;
    }

    /// Creates a detached node of `kind`, or attaches it to `parent`.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        if kind == NodeKind::Root {
            return Err(SceneError::RootNode);
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(SceneError::NodeNotFound(parent));
            }
        }

        let id = self.nodes.insert(Node::new(kind));
        if let Some(parent) = parent {
            self.add_child(parent, id)?;
        }
        Ok(id)
    }

    pub fn create_frame(&mut self, parent: NodeId) -> Result<NodeId, SceneError> {
        self.create_node(NodeKind::Frame, Some(parent))
    }

    pub fn create_canvas(&mut self, parent: NodeId) -> Result<NodeId, SceneError> {
        self.create_node(NodeKind::Canvas, Some(parent))
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(id).map(|node| node.kind)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.name = name.into();
        }
    }

    pub fn interface(&self, id: NodeId) -> Option<&Interface> {
        self.nodes.get(id).and_then(|node| node.interface())
    }

    pub fn interface_mut(&mut self, id: NodeId) -> Option<&mut Interface> {
        self.nodes.get_mut(id).and_then(|node| node.interface_mut())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children in insertion order. Empty for missing nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn has_child(&self, parent: NodeId, child: NodeId) -> bool {
        self.children(parent).contains(&child)
    }

    /// Adds `child` to the end of `parent`'s children, detaching it from its
    /// previous parent first.
    ///
    /// Adding an existing child is a no-op. Fails for missing nodes, for the
    /// root as a child, for self-parenting, and when `child` is an ancestor
    /// of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        for id in [parent, child] {
            if !self.nodes.contains_key(id) {
                return Err(SceneError::NodeNotFound(id));
            }
        }
        if child == self.root {
            return Err(SceneError::RootNode);
        }
        if parent == child {
            return Err(SceneError::SelfParent(child));
        }
        if self.has_child(parent, child) {
            return Ok(());
        }
        if self.is_ancestor(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        if let Some(old_parent) = self.parent(child) {
            self.detach(old_parent, child);
        }

        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        self.events.push(SceneEvent::ChildAdded { parent, child });
        Ok(())
    }

    /// Removes `child` from `parent`. A non-member is a no-op.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        for id in [parent, child] {
            if !self.nodes.contains_key(id) {
                return Err(SceneError::NodeNotFound(id));
            }
        }
        if self.has_child(parent, child) {
            self.detach(parent, child);
        }
        Ok(())
    }

    /// Re-parents `child`, or detaches it with `None`.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<(), SceneError> {
        match parent {
            Some(parent) => self.add_child(parent, child),
            None => match self.parent(child) {
                Some(old_parent) => self.remove_child(old_parent, child),
                None if self.nodes.contains_key(child) => Ok(()),
                None => Err(SceneError::NodeNotFound(child)),
            },
        }
    }

    /// Children first, then each child's descendants in child order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let children = self.children(id);
        let mut descendants = children.to_vec();
        for &child in children {
            descendants.extend(self.descendants(child));
        }
        descendants
    }

    /// Adds a tag. Returns `false` if the node is missing or already tagged.
    pub fn add_tag(&mut self, id: NodeId, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        match self.nodes.get_mut(id) {
            Some(node) if !node.has_tag(&tag) => {
                node.tags.push(tag);
                true
            }
            _ => false,
        }
    }

    /// Removes a tag. Returns `false` if it wasn't there.
    pub fn remove_tag(&mut self, id: NodeId, tag: &str) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let before = node.tags.len();
        node.tags.retain(|t| t != tag);
        node.tags.len() != before
    }

    pub fn has_tag(&self, id: NodeId, tag: &str) -> bool {
        self.nodes.get(id).is_some_and(|node| node.has_tag(tag))
    }

    pub fn tags(&self, id: NodeId) -> &[String] {
        self.nodes
            .get(id)
            .map(|node| node.tags.as_slice())
            .unwrap_or_default()
    }

    /// Detaches a node and deletes it with its whole subtree and their modifiers.
    pub fn destroy(&mut self, id: NodeId) -> Result<(), SceneError> {
        if id == self.root {
            return Err(SceneError::RootNode);
        }
        if !self.nodes.contains_key(id) {
            return Err(SceneError::NodeNotFound(id));
        }

        if let Some(parent) = self.parent(id) {
            self.detach(parent, id);
        }

        let mut doomed = self.descendants(id);
        doomed.push(id);
        for node_id in doomed {
            if let Some(node) = self.nodes.remove(node_id) {
                for modifier in node.modifiers {
                    self.modifiers.remove(modifier);
                }
            }
        }
        Ok(())
    }

    /// Deep-copies a node into a new detached node.
    ///
    /// Value fields, tags, canvas drawings and modifiers are copied and
    /// children are cloned recursively. Building the copy queues no events.
    pub fn clone_subtree(&mut self, id: NodeId) -> Result<NodeId, SceneError> {
        if id == self.root {
            return Err(SceneError::RootNode);
        }
        let source = self.nodes.get(id).ok_or(SceneError::NodeNotFound(id))?;

        let mut copy = source.clone();
        copy.parent = None;
        copy.children = Vec::new();
        let source_modifiers = std::mem::take(&mut copy.modifiers);
        let source_children = source.children.clone();

        let copy_id = self.nodes.insert(copy);

        for modifier_id in source_modifiers {
            if let Some(modifier) = self.modifiers.get(modifier_id) {
                let mut modifier = modifier.clone();
                modifier.parent = Some(copy_id);
                let new_id = self.modifiers.insert(modifier);
                self.nodes[copy_id].modifiers.push(new_id);
            }
        }

        for child in source_children {
            let child_copy = self.clone_subtree(child)?;
            self.nodes[child_copy].parent = Some(copy_id);
            self.nodes[copy_id].children.push(child_copy);
        }

        Ok(copy_id)
    }

    /// Takes all queued structural events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|&id| id != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        self.events.push(SceneEvent::ChildRemoved { parent, child });
    }

    /// Whether `node_id` is `descendant_id` or one of its ancestors.
    fn is_ancestor(&self, node_id: NodeId, descendant_id: NodeId) -> bool {
        let mut current = Some(descendant_id);
        while let Some(id) = current {
            if id == node_id {
                return true;
            }
            current = self.nodes.get(id).and_then(|node| node.parent);
        }
        false
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espresso_core::LayoutVector;

    #[test]
    fn test_scene_graph_creation() {
        let graph = SceneGraph::new();

        assert!(graph.node(graph.root()).is_some());
        assert_eq!(graph.parent(graph.root()), None);
        assert!(graph.children(graph.root()).is_empty());
        assert_eq!(graph.kind(graph.root()), Some(NodeKind::Root));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_create_node() {
        let mut graph = SceneGraph::new();
        let root = graph.root();

        let frame = graph.create_frame(root).unwrap();
        let canvas = graph.create_canvas(frame).unwrap();
        let loose = graph.create_node(NodeKind::Frame, None).unwrap();

        assert_eq!(graph.parent(frame), Some(root));
        assert_eq!(graph.parent(canvas), Some(frame));
        assert_eq!(graph.parent(loose), None);
        assert_eq!(graph.name(canvas), Some("Canvas"));
        assert_eq!(
            graph.create_node(NodeKind::Root, None),
            Err(SceneError::RootNode)
        );
    }

    #[test]
    fn test_add_child_twice_is_idempotent() {
        let mut graph = SceneGraph::new();
        let parent = graph.create_frame(graph.root()).unwrap();
        let child = graph.create_node(NodeKind::Frame, None).unwrap();

        graph.add_child(parent, child).unwrap();
        graph.add_child(parent, child).unwrap();

        assert_eq!(graph.children(parent), &[child]);
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(root).unwrap();

        graph.remove_child(a, b).unwrap();

        assert_eq!(graph.children(root).len(), 2);
        assert_eq!(graph.parent(b), Some(root));
    }

    #[test]
    fn test_reparent_detaches_from_old_parent() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(root).unwrap();

        graph.add_child(a, b).unwrap();

        assert!(!graph.has_child(root, b));
        assert!(graph.has_child(a, b));
        assert_eq!(graph.parent(b), Some(a));
    }

    #[test]
    fn test_usage_errors() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(a).unwrap();

        assert_eq!(graph.add_child(a, a), Err(SceneError::SelfParent(a)));
        assert_eq!(
            graph.add_child(b, a),
            Err(SceneError::Cycle { parent: b, child: a })
        );
        assert_eq!(graph.add_child(a, root), Err(SceneError::RootNode));

        graph.destroy(b).unwrap();
        assert_eq!(graph.add_child(a, b), Err(SceneError::NodeNotFound(b)));

        // Nothing moved
        assert_eq!(graph.parent(a), Some(root));
        assert!(graph.children(a).is_empty());
    }

    #[test]
    fn test_descendants_order() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(root).unwrap();
        let a1 = graph.create_frame(a).unwrap();
        let b1 = graph.create_frame(b).unwrap();
        let a1x = graph.create_frame(a1).unwrap();

        assert_eq!(graph.descendants(root), vec![a, b, a1, a1x, b1]);
    }

    #[test]
    fn test_tags_are_unique() {
        let mut graph = SceneGraph::new();
        let frame = graph.create_frame(graph.root()).unwrap();

        assert!(graph.add_tag(frame, "red"));
        assert!(!graph.add_tag(frame, "red"));
        assert_eq!(graph.tags(frame), &["red".to_string()]);
        assert!(graph.remove_tag(frame, "red"));
        assert!(!graph.remove_tag(frame, "red"));
        assert!(!graph.has_tag(frame, "red"));
    }

    #[test]
    fn test_tag_selector_keeps_insertion_order() {
        let mut graph = SceneGraph::new();
        let parent = graph.create_frame(graph.root()).unwrap();
        graph.add_tag(parent, "red");
        let first = graph.create_frame(parent).unwrap();
        let second = graph.create_frame(parent).unwrap();
        let third = graph.create_frame(parent).unwrap();
        graph.add_tag(third, "red");
        graph.add_tag(first, "red");

        assert_eq!(graph.children_selector(parent, "#red"), Ok(vec![first, third]));
        assert!(!graph.children_selector(parent, "#red").unwrap().contains(&second));
    }

    #[test]
    fn test_destroy_removes_subtree_and_modifiers() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(a).unwrap();
        let corner = graph.create_modifier(Corner::default());
        graph.add_modifier(b, corner).unwrap();

        graph.destroy(a).unwrap();

        assert!(!graph.contains(a));
        assert!(!graph.contains(b));
        assert!(graph.modifier(corner).is_none());
        assert!(graph.children(root).is_empty());
        assert_eq!(graph.destroy(root), Err(SceneError::RootNode));
    }

    #[test]
    fn test_clone_subtree_is_deep_and_detached() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let panel = graph.create_frame(root).unwrap();
        graph.set_name(panel, "Panel");
        graph.add_tag(panel, "red");
        graph.interface_mut(panel).unwrap().size = LayoutVector::from_scale(0.5, 0.5);
        let canvas = graph.create_canvas(panel).unwrap();
        graph
            .draw_drawable(canvas, &node::Rectangle::default())
            .unwrap();
        let constraint = graph.create_modifier(SizeConstraint::default());
        graph.add_modifier(panel, constraint).unwrap();
        graph.drain_events();

        let copy = graph.clone_subtree(panel).unwrap();

        assert_eq!(graph.parent(copy), None);
        assert_eq!(graph.name(copy), Some("Panel"));
        assert!(graph.has_tag(copy, "red"));
        assert_eq!(
            graph.interface(copy).unwrap().size,
            LayoutVector::from_scale(0.5, 0.5)
        );
        assert!(graph.has_modifier(copy, ModifierKind::SizeConstraint));
        assert_ne!(graph.modifiers(copy), graph.modifiers(panel));

        let copied_canvas = graph.children(copy)[0];
        assert_ne!(copied_canvas, canvas);
        assert_eq!(graph.parent(copied_canvas), Some(copy));
        assert_eq!(graph.drawings(copied_canvas).unwrap().len(), 1);

        // The original is untouched
        assert_eq!(graph.children(panel), &[canvas]);
        assert!(graph.drain_events().is_empty());
    }

    #[test]
    fn test_child_events() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.create_frame(root).unwrap();
        let b = graph.create_frame(root).unwrap();
        graph.add_child(a, b).unwrap();
        graph.add_child(a, b).unwrap();

        assert_eq!(
            graph.drain_events(),
            vec![
                SceneEvent::ChildAdded { parent: root, child: a },
                SceneEvent::ChildAdded { parent: root, child: b },
                SceneEvent::ChildRemoved { parent: root, child: b },
                SceneEvent::ChildAdded { parent: a, child: b },
            ]
        );
        assert!(graph.drain_events().is_empty());
    }
}
