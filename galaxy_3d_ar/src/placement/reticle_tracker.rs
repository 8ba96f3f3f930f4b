/// Per-frame hit-test query driving the placement pose.

use crate::xr::{HitTestSource, ReferenceSpace, XrFrame};
use crate::engine_trace;
use super::placement_pose::PlacementPose;

const SOURCE: &str = "galaxy3d::ar::ReticleTracker";

/// Tracks the current placement pose
pub struct ReticleTracker {
    pose: PlacementPose,
}

impl ReticleTracker {
    /// Tracker with a hidden pose
    pub fn new() -> Self {
        Self { pose: PlacementPose::hidden() }
    }

    /// Current pose (last value written by `update`)
    pub fn pose(&self) -> PlacementPose {
        self.pose
    }

    /// Forget the tracked pose (hidden at the origin).
    ///
    /// Poses are expressed in one session's world space; call this when the
    /// frames start coming from another session.
    pub fn reset(&mut self) {
        self.pose = PlacementPose::hidden();
    }

    /// Update the pose from this frame's hit results.
    ///
    /// - No source yet, or no world space: pose unchanged.
    /// - No hit: hidden, matrix kept as is.
    /// - First hit resolves in `world_space`: visible at the resolved matrix.
    /// - First hit does not resolve this frame: pose unchanged.
    ///
    /// Only the first result is used; the platform orders results.
    pub fn update(
        &mut self,
        frame: &dyn XrFrame,
        source: Option<&HitTestSource>,
        world_space: Option<&ReferenceSpace>,
    ) -> PlacementPose {
        let (Some(source), Some(world_space)) = (source, world_space) else {
            return self.pose;
        };
        // Hit poses are only meaningful in a world-anchored space
        if !world_space.space_type().is_world_anchored() {
            return self.pose;
        }

        let results = frame.hit_test_results(source);
        engine_trace!(SOURCE, "{} hit results", results.len());

        let Some(hit) = results.first() else {
            self.pose = self.pose.with_visible(false);
            return self.pose;
        };

        if let Some(pose) = hit.pose(world_space) {
            self.pose = PlacementPose::new(pose.transform.to_mat4(), true);
        } else {
            engine_trace!(SOURCE, "Hit pose unavailable this frame, holding previous pose");
        }
        self.pose
    }
}

impl Default for ReticleTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "reticle_tracker_tests.rs"]
mod tests;
