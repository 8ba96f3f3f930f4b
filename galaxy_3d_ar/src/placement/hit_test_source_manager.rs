/// One-shot asynchronous hit-test source setup.
///
/// The source is obtained through two chained platform requests: a viewer
/// reference space, then a hit-test source scoped to it. The manager is an
/// explicit state machine polled once per frame:
///
/// ```text
/// Uninitialized -> RequestingReferenceSpace -> RequestingSource -> Ready
///                           |                         |
///                           +-------> Failed <--------+
/// ```
///
/// Exactly one request chain is issued per session. Pending states only
/// poll; they never re-issue. Failed is terminal (no retry) and is never
/// reported as an error to the caller: the source simply stays unready.

use crate::error::Error;
use crate::xr::{
    HitTestSource, HitTestSourceOptions, PendingRequest, ReferenceSpace,
    ReferenceSpaceType, RequestStatus, SessionFeatures, SessionId, XrFrame, XrSession,
};
use crate::{engine_debug, engine_info, engine_warn};

const SOURCE: &str = "galaxy3d::ar::HitTestSourceManager";

/// Observable state of the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestSourceState {
    /// No request issued for the current session
    Uninitialized,
    /// Waiting for the viewer reference space
    RequestingReferenceSpace,
    /// Waiting for the hit-test source
    RequestingSource,
    /// Source available
    Ready,
    /// A request was rejected; the source stays unavailable for this session
    Failed,
}

/// Internal state with the in-flight request handles
enum SourceRequest {
    Uninitialized,
    RequestingReferenceSpace(PendingRequest<ReferenceSpace>),
    RequestingSource(PendingRequest<HitTestSource>),
    Ready(HitTestSource),
    Failed(Error),
}

impl SourceRequest {
    fn state(&self) -> HitTestSourceState {
        match self {
            SourceRequest::Uninitialized => HitTestSourceState::Uninitialized,
            SourceRequest::RequestingReferenceSpace(_) => HitTestSourceState::RequestingReferenceSpace,
            SourceRequest::RequestingSource(_) => HitTestSourceState::RequestingSource,
            SourceRequest::Ready(_) => HitTestSourceState::Ready,
            SourceRequest::Failed(_) => HitTestSourceState::Failed,
        }
    }
}

/// Owns the hit-test source of one session
pub struct HitTestSourceManager {
    session: Option<SessionId>,
    request: SourceRequest,
    request_chains: u32,
}

impl HitTestSourceManager {
    /// Manager with no request issued
    pub fn new() -> Self {
        Self {
            session: None,
            request: SourceRequest::Uninitialized,
            request_chains: 0,
        }
    }

    /// Advance the state machine for this frame and return the source if ready.
    ///
    /// The first call for a session issues the viewer reference space request.
    /// Later calls only poll the outstanding request and chain the source
    /// request once the space resolves. A frame from another session starts
    /// over for that session.
    pub fn ensure_source(&mut self, frame: &dyn XrFrame) -> Option<&HitTestSource> {
        let session = frame.session();

        if self.session != Some(session.id()) {
            if let Some(previous) = self.session {
                engine_info!(SOURCE, "Session changed ({:?} -> {:?}), discarding hit-test source", previous, session.id());
            }
            self.session = Some(session.id());
            self.request = SourceRequest::Uninitialized;
        }

        // Advance until the state settles; a request answered synchronously
        // can move more than one step within a single frame.
        loop {
            let before = self.request.state();
            self.advance(session);
            if self.request.state() == before {
                break;
            }
        }

        self.source()
    }

    /// Resolved source, if any
    pub fn source(&self) -> Option<&HitTestSource> {
        match &self.request {
            SourceRequest::Ready(source) => Some(source),
            _ => None,
        }
    }

    /// Session the current request chain belongs to
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Current state
    pub fn state(&self) -> HitTestSourceState {
        self.request.state()
    }

    /// Why the source is unavailable, once Failed
    pub fn failure(&self) -> Option<&Error> {
        match &self.request {
            SourceRequest::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Number of request chains started since creation (one per session)
    pub fn request_chains(&self) -> u32 {
        self.request_chains
    }

    fn advance(&mut self, session: &dyn XrSession) {
        let current = std::mem::replace(&mut self.request, SourceRequest::Uninitialized);

        self.request = match current {
            SourceRequest::Uninitialized => {
                if !session.enabled_features().contains(SessionFeatures::HIT_TEST) {
                    engine_debug!(SOURCE, "Session {:?} was not granted hit-test; requesting anyway", session.id());
                }
                self.request_chains += 1;
                engine_debug!(SOURCE, "Requesting viewer reference space for {:?}", session.id());
                SourceRequest::RequestingReferenceSpace(
                    session.request_reference_space(ReferenceSpaceType::Viewer),
                )
            }
            SourceRequest::RequestingReferenceSpace(mut pending) => match pending.poll() {
                RequestStatus::Pending => SourceRequest::RequestingReferenceSpace(pending),
                RequestStatus::Resolved(space) => {
                    engine_debug!(SOURCE, "Viewer space {} ready, requesting hit-test source", space.id());
                    SourceRequest::RequestingSource(
                        session.request_hit_test_source(HitTestSourceOptions::new(space)),
                    )
                }
                RequestStatus::Rejected(error) => Self::fail("viewer reference space", error),
            },
            SourceRequest::RequestingSource(mut pending) => match pending.poll() {
                RequestStatus::Pending => SourceRequest::RequestingSource(pending),
                RequestStatus::Resolved(source) => {
                    engine_info!(SOURCE, "Hit-test source {} ready", source.id());
                    SourceRequest::Ready(source)
                }
                RequestStatus::Rejected(error) => Self::fail("hit-test source", error),
            },
            settled @ (SourceRequest::Ready(_) | SourceRequest::Failed(_)) => settled,
        };
    }

    fn fail(what: &str, error: Error) -> SourceRequest {
        engine_warn!(SOURCE, "Request for {} failed, hit testing disabled: {}", what, error);
        SourceRequest::Failed(error)
    }
}

impl Default for HitTestSourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "hit_test_source_manager_tests.rs"]
mod tests;
