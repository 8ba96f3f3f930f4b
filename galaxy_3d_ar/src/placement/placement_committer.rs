/// Instantiates the template model on user selection.

use crate::scene::{Cloneable, NodeKey, Scene};
use crate::{engine_debug, engine_info};
use super::placement_pose::PlacementPose;

const SOURCE: &str = "galaxy3d::ar::PlacementCommitter";

/// Commits placed instances into the permanent scene
pub struct PlacementCommitter {
    placed: Vec<NodeKey>,
}

impl PlacementCommitter {
    /// Committer with no placements
    pub fn new() -> Self {
        Self { placed: Vec::new() }
    }

    /// Handle one select event.
    ///
    /// Ignored while `pose` is hidden. Otherwise deep-clones `template`,
    /// sets the clone's transform to the decomposed pose matrix and adds it
    /// to `scene`. The template is never modified.
    pub fn on_select(
        &mut self,
        pose: &PlacementPose,
        template: &dyn Cloneable,
        scene: &mut Scene,
    ) -> Option<NodeKey> {
        if !pose.visible() {
            engine_debug!(SOURCE, "Select ignored: no surface locked");
            return None;
        }

        let mut instance = template.deep_clone();
        instance.set_transform(pose.decompose());
        let position = instance.transform().position;

        let key = scene.add(instance);
        self.placed.push(key);
        engine_info!(
            SOURCE,
            "Placed instance #{} at ({:.3}, {:.3}, {:.3})",
            self.placed.len(), position.x, position.y, position.z
        );
        Some(key)
    }

    /// Keys of every instance placed so far, in placement order
    pub fn placed_instances(&self) -> &[NodeKey] {
        &self.placed
    }
}

impl Default for PlacementCommitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "placement_committer_tests.rs"]
mod tests;
