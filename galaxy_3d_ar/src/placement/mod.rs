//! Placement core
//!
//! Evaluated once per frame in this order:
//! 1. `HitTestSourceManager` establishes the hit-test source (once per session)
//! 2. `ReticleTracker` turns hit results into the current `PlacementPose`
//! 3. `PlacementCommitter` clones the template at that pose on user selection

mod placement_pose;
mod hit_test_source_manager;
mod reticle_tracker;
mod placement_committer;

pub use placement_pose::PlacementPose;
pub use hit_test_source_manager::{HitTestSourceManager, HitTestSourceState};
pub use reticle_tracker::ReticleTracker;
pub use placement_committer::PlacementCommitter;
