use crate::{ModifierId, NodeId};

/// A structural change, queued after the mutation that caused it.
///
/// Drain the queue with [`crate::SceneGraph::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    ChildAdded { parent: NodeId, child: NodeId },
    ChildRemoved { parent: NodeId, child: NodeId },
    ModifierAdded { node: NodeId, modifier: ModifierId },
    ModifierRemoved { node: NodeId, modifier: ModifierId },
}
