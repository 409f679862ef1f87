//! Node selectors.
//!
//! - `#tag` matches nodes carrying `tag`
//! - `'Name'` or `"Name"` matches nodes whose name is `Name`
//! - `<TypeName>` matches nodes whose [`NodeKind`](crate::NodeKind) displays as `TypeName`

use crate::scene_node::SceneNode;
use crate::{NodeId, SceneError, SceneGraph};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Name(String),
    Kind(String),
}

impl Selector {
    pub fn matches(&self, node: &SceneNode) -> bool {
        match self {
            Selector::Tag(tag) => node.has_tag(tag),
            Selector::Name(name) => node.name() == name,
            Selector::Kind(kind) => node.kind().to_string() == *kind,
        }
    }
}

impl FromStr for Selector {
    type Err = SceneError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        if let Some(tag) = selector.strip_prefix('#') {
            return Ok(Selector::Tag(tag.to_string()));
        }

        let enclosed = |open: char, close: char| {
            selector
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
                .map(str::to_string)
        };

        if let Some(name) = enclosed('\'', '\'').or_else(|| enclosed('"', '"')) {
            Ok(Selector::Name(name))
        } else if let Some(kind) = enclosed('<', '>') {
            Ok(Selector::Kind(kind))
        } else {
            Err(SceneError::InvalidSelector(selector.to_string()))
        }
    }
}

impl SceneGraph {
    /// Children of `node` matching `selector`, in insertion order.
    pub fn children_selector(&self, node: NodeId, selector: &str) -> Result<Vec<NodeId>, SceneError> {
        let selector: Selector = selector.parse()?;
        let children = self
            .nodes
            .get(node)
            .ok_or(SceneError::NodeNotFound(node))?
            .children
            .clone();
        Ok(self.filter(children, &selector))
    }

    /// Descendants of `node` matching `selector`, in [`SceneGraph::descendants`] order.
    pub fn descendants_selector(
        &self,
        node: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, SceneError> {
        let selector: Selector = selector.parse()?;
        if !self.nodes.contains_key(node) {
            return Err(SceneError::NodeNotFound(node));
        }
        Ok(self.filter(self.descendants(node), &selector))
    }

    fn filter(&self, ids: Vec<NodeId>, selector: &Selector) -> Vec<NodeId> {
        ids.into_iter()
            .filter(|&id| self.nodes.get(id).is_some_and(|node| selector.matches(node)))
            .collect()
    }
}
