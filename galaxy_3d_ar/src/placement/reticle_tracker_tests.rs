/// Tests for ReticleTracker
///
/// These tests validate the per-frame pose update rules: no-op before the
/// source is ready, hide on empty results, exact passthrough on a resolved
/// hit, and hold on a transient pose failure.

use super::*;
use crate::placement::HitTestSourceManager;
use crate::xr::simulated::{SimulatedFrame, SimulatedHit, SimulatedSession};
use crate::xr::{ReferenceSpaceType, SessionFeatures};
use glam::{Mat4, Quat, Vec3};

// ============================================================================
// Helper Functions
// ============================================================================

/// Drive a manager until its source is ready and return the source
fn ready_source(session: &SimulatedSession) -> HitTestSource {
    let mut manager = HitTestSourceManager::new();
    for _ in 0..3 {
        manager.ensure_source(&SimulatedFrame::new(session));
        session.resolve_pending();
    }
    *manager.ensure_source(&SimulatedFrame::new(session)).unwrap()
}

fn surface_matrix() -> Mat4 {
    Mat4::from_rotation_translation(
        Quat::from_rotation_y(0.7),
        Vec3::new(0.25, -1.4, -0.9),
    )
}

// ============================================================================
// Tests: Preconditions
// ============================================================================

#[test]
fn test_no_source_keeps_hidden_default() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    let pose = tracker.update(&frame, None, Some(&world));

    assert_eq!(pose, PlacementPose::hidden());
    assert_eq!(frame.result_queries(), 0);
}

#[test]
fn test_missing_world_space_is_noop() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let mut tracker = ReticleTracker::new();

    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    let pose = tracker.update(&frame, Some(&source), None);

    assert!(!pose.visible());
    assert_eq!(frame.result_queries(), 0);
}

#[test]
fn test_viewer_space_is_never_used_for_resolution() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let viewer = session.create_reference_space(ReferenceSpaceType::Viewer);
    let mut tracker = ReticleTracker::new();

    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    let pose = tracker.update(&frame, Some(&source), Some(&viewer));

    assert!(!pose.visible());
    assert!(frame.pose_queries().is_empty());
}

// ============================================================================
// Tests: Hit Results
// ============================================================================

#[test]
fn test_resolved_hit_is_exact_passthrough() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let raw: [f32; 16] = [
        0.6, 0.0, -0.8, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.8, 0.0, 0.6, 0.0,
        0.1234567, -1.3333333, -0.7777777, 1.0,
    ];
    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at_cols(raw));
    let pose = tracker.update(&frame, Some(&source), Some(&world));

    assert!(pose.visible());
    let got = pose.matrix().to_cols_array();
    for (a, b) in got.iter().zip(raw.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(frame.pose_queries(), vec![world]);
}

#[test]
fn test_first_result_wins() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let near = surface_matrix();
    let far = Mat4::from_translation(Vec3::new(0.0, -1.4, -5.0));
    let frame = SimulatedFrame::new(&session)
        .with_hit(SimulatedHit::at(near))
        .with_hit(SimulatedHit::at(far));

    let pose = tracker.update(&frame, Some(&source), Some(&world));

    assert_eq!(*pose.matrix(), near);
    assert_eq!(frame.pose_queries().len(), 1);
}

#[test]
fn test_empty_results_hide_but_keep_matrix() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let hit = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    tracker.update(&hit, Some(&source), Some(&world));

    let empty = SimulatedFrame::new(&session);
    let pose = tracker.update(&empty, Some(&source), Some(&world));

    assert!(!pose.visible());
    assert_eq!(*pose.matrix(), surface_matrix());
}

#[test]
fn test_empty_results_hide_regardless_of_prior_state() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    for _ in 0..3 {
        let pose = tracker.update(&SimulatedFrame::new(&session), Some(&source), Some(&world));
        assert!(!pose.visible());
    }
}

#[test]
fn test_unresolved_pose_holds_previous_value() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let hit = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    let before = tracker.update(&hit, Some(&source), Some(&world));

    let flaky = SimulatedFrame::new(&session).with_hit(SimulatedHit::pose_unavailable());
    let after = tracker.update(&flaky, Some(&source), Some(&world));

    assert_eq!(after, before);
    assert!(after.visible());
}

#[test]
fn test_unresolved_pose_while_hidden_stays_hidden() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let flaky = SimulatedFrame::new(&session).with_hit(SimulatedHit::pose_unavailable());
    let pose = tracker.update(&flaky, Some(&source), Some(&world));

    assert_eq!(pose, PlacementPose::hidden());
    assert_eq!(tracker.pose(), pose);
}

// ============================================================================
// Tests: Reset
// ============================================================================

#[test]
fn test_reset_hides_tracked_pose() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = ready_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let mut tracker = ReticleTracker::new();

    let hit = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(surface_matrix()));
    assert!(tracker.update(&hit, Some(&source), Some(&world)).visible());

    tracker.reset();
    assert_eq!(tracker.pose(), PlacementPose::hidden());

    // Without a source the reset pose is what the next frame reports
    let pose = tracker.update(&hit, None, Some(&world));
    assert_eq!(pose, PlacementPose::hidden());
}
