/// Scene: the permanent scene graph receiving placed instances.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The reticle is
/// not a member: it belongs to the session context and is drawn separately.

use rustc_hash::FxHashSet;
use slotmap::{SlotMap, new_key_type};
use crate::error::Result;
use crate::engine_err;
use super::node::Node;
use super::transform::Transform;

new_key_type! {
    /// Stable key for a top-level node within a Scene.
    ///
    /// Keys remain valid even after other nodes are removed.
    pub struct NodeKey;
}

/// Scene of top-level nodes with infinite lifetime
pub struct Scene {
    /// Top-level nodes
    nodes: SlotMap<NodeKey, Node>,
    /// Nodes added or moved since last take_dirty_transforms()
    dirty_transforms: FxHashSet<NodeKey>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            dirty_transforms: FxHashSet::default(),
        }
    }

    /// Insert a top-level node and return its stable key
    pub fn add(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.dirty_transforms.insert(key);
        key
    }

    /// Remove a top-level node
    pub fn remove(&mut self, key: NodeKey) -> Result<Node> {
        self.dirty_transforms.remove(&key);
        self.nodes
            .remove(key)
            .ok_or_else(|| engine_err!("galaxy3d::ar::Scene", "Unknown node key {:?}", key))
    }

    /// Get a node by key
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Replace the transform of a node. Returns false if key is invalid.
    pub fn set_transform(&mut self, key: NodeKey, transform: Transform) -> bool {
        if let Some(node) = self.nodes.get_mut(key) {
            node.set_transform(transform);
            self.dirty_transforms.insert(key);
            true
        } else {
            false
        }
    }

    /// Number of top-level nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all node keys
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys()
    }

    /// Iterate over all (key, node) pairs
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> + '_ {
        self.nodes.iter()
    }

    /// Drain the set of nodes whose transform changed (consumed by the renderer)
    pub fn take_dirty_transforms(&mut self) -> Vec<NodeKey> {
        self.dirty_transforms.drain().collect()
    }

    /// Remove every node (scene teardown)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.dirty_transforms.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
