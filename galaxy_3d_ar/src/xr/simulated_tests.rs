/// Tests for the simulated XR backend
///
/// These tests validate request counting, deferred resolution, rejection
/// on unsupported features, session end, and frame hit scripting.

use super::*;
use crate::xr::RequestStatus;
use glam::Vec3;

// ============================================================================
// Tests: Requests
// ============================================================================

#[test]
fn test_requests_stay_pending_until_resolved() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let mut pending = session.request_reference_space(ReferenceSpaceType::Viewer);

    assert_eq!(pending.poll(), RequestStatus::Pending);
    assert_eq!(session.outstanding_requests(), 1);
    assert_eq!(session.reference_space_requests(), 1);

    assert_eq!(session.resolve_pending(), 1);
    match pending.poll() {
        RequestStatus::Resolved(space) => assert_eq!(space.space_type(), ReferenceSpaceType::Viewer),
        other => panic!("expected resolved space, got {:?}", other),
    }
    assert_eq!(session.outstanding_requests(), 0);
}

#[test]
fn test_hit_test_source_rejected_without_feature() {
    let session = SimulatedSession::new(1, SessionFeatures::empty());
    let space = session.create_reference_space(ReferenceSpaceType::Viewer);
    let mut pending = session.request_hit_test_source(HitTestSourceOptions::new(space));

    session.resolve_pending();

    assert_eq!(
        pending.poll(),
        RequestStatus::Rejected(Error::Unsupported("hit-test".to_string()))
    );
}

#[test]
fn test_local_floor_requires_feature() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let mut pending = session.request_reference_space(ReferenceSpaceType::LocalFloor);
    session.resolve_pending();
    assert!(matches!(pending.poll(), RequestStatus::Rejected(Error::Unsupported(_))));
}

#[test]
fn test_reject_pending() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let mut pending = session.request_reference_space(ReferenceSpaceType::Viewer);
    assert_eq!(session.reject_pending(Error::RequestRejected("busy".to_string())), 1);
    assert!(matches!(pending.poll(), RequestStatus::Rejected(Error::RequestRejected(_))));
}

#[test]
fn test_end_abandons_outstanding_requests() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let mut pending = session.request_reference_space(ReferenceSpaceType::Viewer);

    session.end();

    assert!(session.is_ended());
    assert_eq!(pending.poll(), RequestStatus::Rejected(Error::SessionEnded));
    let mut late = session.request_reference_space(ReferenceSpaceType::Viewer);
    assert_eq!(late.poll(), RequestStatus::Rejected(Error::SessionEnded));
    assert_eq!(session.reference_space_requests(), 2);
}

// ============================================================================
// Tests: Frames
// ============================================================================

fn issue_source(session: &SimulatedSession) -> HitTestSource {
    let space = session.create_reference_space(ReferenceSpaceType::Viewer);
    let mut pending = session.request_hit_test_source(HitTestSourceOptions::new(space));
    session.resolve_pending();
    match pending.poll() {
        RequestStatus::Resolved(source) => source,
        other => panic!("expected source, got {:?}", other),
    }
}

#[test]
fn test_frame_returns_hits_in_order() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = issue_source(&session);
    let world = session.create_reference_space(ReferenceSpaceType::Local);
    let first = Mat4::from_translation(Vec3::X);
    let frame = SimulatedFrame::new(&session)
        .with_hit(SimulatedHit::at(first))
        .with_hit(SimulatedHit::pose_unavailable());

    let results = frame.hit_test_results(&source);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].pose(&world).unwrap().transform.to_mat4(), first);
    assert!(results[1].pose(&world).is_none());
    assert_eq!(frame.pose_queries(), vec![world, world]);
    assert_eq!(frame.result_queries(), 1);
}

#[test]
fn test_frame_ignores_foreign_source() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let foreign = HitTestSource::new(999, session.create_reference_space(ReferenceSpaceType::Viewer));
    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(Mat4::IDENTITY));
    assert!(frame.hit_test_results(&foreign).is_empty());
}

#[test]
fn test_frame_after_end_has_no_hits() {
    let session = SimulatedSession::new(1, SessionFeatures::HIT_TEST);
    let source = issue_source(&session);
    session.end();
    let frame = SimulatedFrame::new(&session).with_hit(SimulatedHit::at(Mat4::IDENTITY));
    assert!(frame.hit_test_results(&source).is_empty());
}

// ============================================================================
// Tests: Renderer
// ============================================================================

#[test]
fn test_renderer_records_frame() {
    let mut renderer = SimulatedRenderer::new();
    let mut scene = Scene::new();
    scene.add(crate::scene::Node::new("a"));
    let reticle = Reticle::new(crate::scene::ReticleConfig::default());

    renderer.render(&mut scene, &reticle).unwrap();

    assert_eq!(renderer.frames_rendered(), 1);
    assert_eq!(renderer.transforms_uploaded(), 1);
    assert_eq!(renderer.last_node_count(), 1);
    assert_eq!(renderer.last_reticle(), Some((Mat4::IDENTITY, false)));

    // Nothing moved since: no new uploads
    renderer.render(&mut scene, &reticle).unwrap();
    assert_eq!(renderer.transforms_uploaded(), 1);
}

#[test]
fn test_renderer_fail_next_render_fails_once() {
    let mut renderer = SimulatedRenderer::new();
    let mut scene = Scene::new();
    let reticle = Reticle::new(crate::scene::ReticleConfig::default());

    renderer.fail_next_render();
    assert!(renderer.render(&mut scene, &reticle).is_err());
    assert!(renderer.render(&mut scene, &reticle).is_ok());
    assert_eq!(renderer.frames_rendered(), 1);
}
