use crate::{NodeId, SceneGraph};
use espresso_core::Bounds;
use glam::Vec2;
use node::DrawInfo;

/// One node's drawing for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    pub node: NodeId,
    pub draw_info: DrawInfo,
    /// Pixels outside this box must not be painted. `None` means unclipped.
    pub clip: Option<Bounds>,
}

impl SceneGraph {
    /// Resolves every visible node depth-first, children in insertion order.
    ///
    /// The returned order is paint order: later items paint over earlier ones.
    /// Hidden nodes are skipped together with their subtrees.
    pub fn render_tree(&mut self) -> Vec<RenderItem> {
        let mut items = Vec::new();
        self.render_children(self.root, None, &mut items);
        items
    }

    fn render_children(&mut self, parent: NodeId, clip: Option<Bounds>, items: &mut Vec<RenderItem>) {
        // Snapshot so a child list edited mid-pass can't invalidate the walk.
        let children = self.children(parent).to_vec();

        for child in children {
            if !self.nodes.get(child).is_some_and(|node| node.is_visible()) {
                continue;
            }

            let Some(draw_info) = self.render_node(child) else {
                continue;
            };
            items.push(RenderItem {
                node: child,
                draw_info,
                clip,
            });

            let child_clip = match self.interface(child) {
                Some(interface) if interface.clip => {
                    let own = Bounds::from_origin_size(
                        Vec2::from(interface.absolute_position()),
                        Vec2::from(interface.absolute_size()),
                    );
                    Some(match clip {
                        Some(outer) => outer
                            .intersection(&own)
                            .unwrap_or_else(|| Bounds::new(own.min, own.min)),
                        None => own,
                    })
                }
                _ => clip,
            };

            self.render_children(child, child_clip, items);
        }
    }
}
