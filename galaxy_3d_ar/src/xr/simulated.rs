/// Simulated XR backend (no device required)
///
/// Software implementations of the session, frame and renderer
/// collaborators. Platform answers are delivered only when asked
/// (`resolve_pending`), which lets callers run any number of frames while
/// requests are outstanding. Request primitives are counted so the
/// one-request-chain-per-session rule can be checked.

use std::cell::{Cell, RefCell};
use glam::Mat4;
use crate::error::{Error, Result};
use crate::scene::{Reticle, Scene};
use crate::session::ArRenderer;
use crate::engine_bail;
use super::hit_test::{HitTestResult, HitTestSource, HitTestSourceOptions};
use super::pending_request::{pending_request, PendingRequest, Resolver};
use super::reference_space::{ReferenceSpace, ReferenceSpaceType, RigidTransform, XrPose};
use super::xr_session::{SessionFeatures, SessionId, XrFrame, XrSession};

// ============================================================================
// Simulated Session
// ============================================================================

struct SessionRequests {
    next_handle: u64,
    reference_space_requests: u32,
    hit_test_source_requests: u32,
    pending_spaces: Vec<(ReferenceSpaceType, Resolver<ReferenceSpace>)>,
    pending_sources: Vec<(HitTestSourceOptions, Resolver<HitTestSource>)>,
    issued_sources: Vec<HitTestSource>,
}

impl SessionRequests {
    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

/// Simulated AR session
pub struct SimulatedSession {
    id: SessionId,
    features: SessionFeatures,
    ended: Cell<bool>,
    requests: RefCell<SessionRequests>,
}

impl SimulatedSession {
    /// Session granted `features`
    pub fn new(id: u64, features: SessionFeatures) -> Self {
        Self {
            id: SessionId(id),
            features,
            ended: Cell::new(false),
            requests: RefCell::new(SessionRequests {
                next_handle: 0,
                reference_space_requests: 0,
                hit_test_source_requests: 0,
                pending_spaces: Vec::new(),
                pending_sources: Vec::new(),
                issued_sources: Vec::new(),
            }),
        }
    }

    /// Answer every outstanding request, as the platform would between frames.
    ///
    /// Reference spaces resolve unless `LocalFloor` is asked without the
    /// `LOCAL_FLOOR` feature. Hit-test sources resolve only with `HIT_TEST`.
    /// Returns the number of requests answered.
    pub fn resolve_pending(&self) -> usize {
        let mut requests = self.requests.borrow_mut();
        let spaces = std::mem::take(&mut requests.pending_spaces);
        let sources = std::mem::take(&mut requests.pending_sources);
        let answered = spaces.len() + sources.len();

        for (space_type, resolver) in spaces {
            if space_type == ReferenceSpaceType::LocalFloor
                && !self.features.contains(SessionFeatures::LOCAL_FLOOR)
            {
                resolver.reject(Error::Unsupported("local-floor reference space".to_string()));
            } else {
                let id = requests.next_handle();
                resolver.resolve(ReferenceSpace::new(id, space_type));
            }
        }

        for (options, resolver) in sources {
            if self.features.contains(SessionFeatures::HIT_TEST) {
                let id = requests.next_handle();
                let source = HitTestSource::new(id, options.space);
                requests.issued_sources.push(source);
                resolver.resolve(source);
            } else {
                resolver.reject(Error::Unsupported("hit-test".to_string()));
            }
        }

        answered
    }

    /// Reject every outstanding request with `error`
    pub fn reject_pending(&self, error: Error) -> usize {
        let mut requests = self.requests.borrow_mut();
        let spaces = std::mem::take(&mut requests.pending_spaces);
        let sources = std::mem::take(&mut requests.pending_sources);
        let answered = spaces.len() + sources.len();
        for (_, resolver) in spaces {
            resolver.reject(error.clone());
        }
        for (_, resolver) in sources {
            resolver.reject(error.clone());
        }
        answered
    }

    /// End the session: outstanding requests are dropped unanswered and
    /// issued sources stop producing results.
    pub fn end(&self) {
        self.ended.set(true);
        let mut requests = self.requests.borrow_mut();
        requests.pending_spaces.clear();
        requests.pending_sources.clear();
        requests.issued_sources.clear();
    }

    /// Whether `end` was called
    pub fn is_ended(&self) -> bool {
        self.ended.get()
    }

    /// Synchronously issue a reference space (renderer-side setup)
    pub fn create_reference_space(&self, space_type: ReferenceSpaceType) -> ReferenceSpace {
        let id = self.requests.borrow_mut().next_handle();
        ReferenceSpace::new(id, space_type)
    }

    /// Calls made to `request_reference_space`
    pub fn reference_space_requests(&self) -> u32 {
        self.requests.borrow().reference_space_requests
    }

    /// Calls made to `request_hit_test_source`
    pub fn hit_test_source_requests(&self) -> u32 {
        self.requests.borrow().hit_test_source_requests
    }

    /// Requests waiting for an answer
    pub fn outstanding_requests(&self) -> usize {
        let requests = self.requests.borrow();
        requests.pending_spaces.len() + requests.pending_sources.len()
    }

    fn is_issued(&self, source: &HitTestSource) -> bool {
        self.requests.borrow().issued_sources.contains(source)
    }
}

impl XrSession for SimulatedSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn enabled_features(&self) -> SessionFeatures {
        self.features
    }

    fn request_reference_space(&self, space_type: ReferenceSpaceType) -> PendingRequest<ReferenceSpace> {
        let mut requests = self.requests.borrow_mut();
        requests.reference_space_requests += 1;
        if self.ended.get() {
            return PendingRequest::rejected(Error::SessionEnded);
        }
        let (resolver, pending) = pending_request();
        requests.pending_spaces.push((space_type, resolver));
        pending
    }

    fn request_hit_test_source(&self, options: HitTestSourceOptions) -> PendingRequest<HitTestSource> {
        let mut requests = self.requests.borrow_mut();
        requests.hit_test_source_requests += 1;
        if self.ended.get() {
            return PendingRequest::rejected(Error::SessionEnded);
        }
        let (resolver, pending) = pending_request();
        requests.pending_sources.push((options, resolver));
        pending
    }
}

// ============================================================================
// Simulated Frame
// ============================================================================

/// A scripted hit: a pose in world space, or a pose the platform cannot
/// provide this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedHit {
    pose: Option<RigidTransform>,
}

impl SimulatedHit {
    /// Hit resolving to `matrix`
    pub fn at(matrix: Mat4) -> Self {
        Self { pose: Some(RigidTransform::from_mat4(matrix)) }
    }

    /// Hit resolving to raw column-major floats
    pub fn at_cols(matrix: [f32; 16]) -> Self {
        Self { pose: Some(RigidTransform::from_cols_array(matrix)) }
    }

    /// Hit whose pose is unavailable this frame
    pub fn pose_unavailable() -> Self {
        Self { pose: None }
    }
}

struct SimulatedHitResult<'a> {
    hit: SimulatedHit,
    queries: &'a RefCell<Vec<ReferenceSpace>>,
}

impl HitTestResult for SimulatedHitResult<'_> {
    fn pose(&self, space: &ReferenceSpace) -> Option<XrPose> {
        self.queries.borrow_mut().push(*space);
        self.hit.pose.map(XrPose::new)
    }
}

/// One frame of a simulated session with scripted hit results
pub struct SimulatedFrame<'a> {
    session: &'a SimulatedSession,
    hits: Vec<SimulatedHit>,
    result_queries: Cell<u32>,
    pose_queries: RefCell<Vec<ReferenceSpace>>,
}

impl<'a> SimulatedFrame<'a> {
    /// Frame without hits
    pub fn new(session: &'a SimulatedSession) -> Self {
        Self {
            session,
            hits: Vec::new(),
            result_queries: Cell::new(0),
            pose_queries: RefCell::new(Vec::new()),
        }
    }

    /// Builder: append a hit (platform order)
    pub fn with_hit(mut self, hit: SimulatedHit) -> Self {
        self.hits.push(hit);
        self
    }

    /// Calls made to `hit_test_results`
    pub fn result_queries(&self) -> u32 {
        self.result_queries.get()
    }

    /// Spaces hit poses were resolved against, in call order
    pub fn pose_queries(&self) -> Vec<ReferenceSpace> {
        self.pose_queries.borrow().clone()
    }
}

impl XrFrame for SimulatedFrame<'_> {
    fn session(&self) -> &dyn XrSession {
        self.session
    }

    fn hit_test_results(&self, source: &HitTestSource) -> Vec<Box<dyn HitTestResult + '_>> {
        self.result_queries.set(self.result_queries.get() + 1);
        if self.session.is_ended() || !self.session.is_issued(source) {
            return Vec::new();
        }
        let mut results: Vec<Box<dyn HitTestResult + '_>> = Vec::with_capacity(self.hits.len());
        for hit in &self.hits {
            results.push(Box::new(SimulatedHitResult { hit: *hit, queries: &self.pose_queries }));
        }
        results
    }
}

// ============================================================================
// Simulated Renderer
// ============================================================================

/// Renderer that records what it would draw
pub struct SimulatedRenderer {
    reference_space: Option<ReferenceSpace>,
    frames_rendered: u64,
    transforms_uploaded: usize,
    last_reticle: Option<(Mat4, bool)>,
    last_node_count: usize,
    fail_next_render: bool,
}

impl SimulatedRenderer {
    /// Renderer without a reference space yet
    pub fn new() -> Self {
        Self {
            reference_space: None,
            frames_rendered: 0,
            transforms_uploaded: 0,
            last_reticle: None,
            last_node_count: 0,
            fail_next_render: false,
        }
    }

    /// Set (or clear) the world-anchored reference space
    pub fn set_reference_space(&mut self, space: Option<ReferenceSpace>) {
        self.reference_space = space;
    }

    /// Make the next `render` call fail
    pub fn fail_next_render(&mut self) {
        self.fail_next_render = true;
    }

    /// Frames drawn
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Node transforms uploaded so far (dirty nodes only)
    pub fn transforms_uploaded(&self) -> usize {
        self.transforms_uploaded
    }

    /// Reticle matrix and visibility of the last frame drawn
    pub fn last_reticle(&self) -> Option<(Mat4, bool)> {
        self.last_reticle
    }

    /// Scene size of the last frame drawn
    pub fn last_node_count(&self) -> usize {
        self.last_node_count
    }
}

impl Default for SimulatedRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArRenderer for SimulatedRenderer {
    fn reference_space(&self) -> Option<ReferenceSpace> {
        self.reference_space
    }

    fn render(&mut self, scene: &mut Scene, reticle: &Reticle) -> Result<()> {
        if self.fail_next_render {
            self.fail_next_render = false;
            engine_bail!("galaxy3d::ar::SimulatedRenderer", "Simulated device lost");
        }
        self.transforms_uploaded += scene.take_dirty_transforms().len();
        self.last_reticle = Some((*reticle.matrix(), reticle.visible()));
        self.last_node_count = scene.node_count();
        self.frames_rendered += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
