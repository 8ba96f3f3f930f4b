//! XR platform module
//!
//! Traits and handle types for the platform collaborators the placement
//! core talks to: the session, the per-frame object, reference spaces and
//! hit-test sources. The `simulated` backend implements them in software.

mod pending_request;
mod reference_space;
mod xr_session;
pub mod simulated;

pub use pending_request::{PendingRequest, Resolver, RequestStatus, pending_request};
pub use reference_space::{ReferenceSpace, ReferenceSpaceType, RigidTransform, XrPose};
pub use hit_test::{HitTestSource, HitTestSourceOptions, HitTestResult};
pub use xr_session::{XrSession, XrFrame, SessionId, SessionFeatures};
