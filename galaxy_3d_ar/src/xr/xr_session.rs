/// Session and frame collaborator traits.
///
/// The platform delivers at most one frame per render tick. Everything
/// runs on that single cooperative loop, so neither trait requires
/// `Send` or `Sync`.

use bitflags::bitflags;
use super::pending_request::PendingRequest;
use super::reference_space::{ReferenceSpace, ReferenceSpaceType};
use super::hit_test::{HitTestSource, HitTestSourceOptions, HitTestResult};

/// Identifies one AR session for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

bitflags! {
    /// Session features a platform can offer or an application can require
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SessionFeatures: u32 {
        /// Ray hit testing against real-world surfaces
        const HIT_TEST    = 1 << 0;
        /// Floor-level local reference space
        const LOCAL_FLOOR = 1 << 1;
        /// 2D overlay on top of the passthrough view
        const DOM_OVERLAY = 1 << 2;
        /// Persistent spatial anchors
        const ANCHORS     = 1 << 3;
    }
}

/// Active AR session
pub trait XrSession {
    /// Session identity
    fn id(&self) -> SessionId;

    /// Features the session was granted
    fn enabled_features(&self) -> SessionFeatures;

    /// Asynchronously request a reference space of the given kind
    fn request_reference_space(&self, space_type: ReferenceSpaceType) -> PendingRequest<ReferenceSpace>;

    /// Asynchronously request a hit-test source scoped to `options.space`
    fn request_hit_test_source(&self, options: HitTestSourceOptions) -> PendingRequest<HitTestSource>;
}

/// One rendered frame of an AR session
pub trait XrFrame {
    /// Session that produced this frame
    fn session(&self) -> &dyn XrSession;

    /// Hit results of `source` for this frame, in platform order
    fn hit_test_results(&self, source: &HitTestSource) -> Vec<Box<dyn HitTestResult + '_>>;
}
