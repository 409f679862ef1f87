use crate::{ModifierId, NodeId};
use thiserror::Error;

/// Usage errors from tree, modifier and canvas operations.
///
/// Policy conflicts (duplicate children, tags or modifier names) are not
/// errors; those operations are no-ops or report `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),
    #[error("modifier {0} does not exist")]
    ModifierNotFound(ModifierId),
    #[error("node {0} cannot be its own child")]
    SelfParent(NodeId),
    #[error("node {child} is an ancestor of node {parent}")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("the root node cannot be re-parented, destroyed or cloned")]
    RootNode,
    #[error("node {0} is not a canvas")]
    NotACanvas(NodeId),
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}
