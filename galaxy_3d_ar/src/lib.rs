/*!
# Galaxy 3D AR

Surface detection and object placement for augmented-reality sessions.

This crate implements the per-frame placement core of an AR viewer: it
establishes a hit-test source against the device's passthrough camera,
turns raw hit results into a stable placement pose drawn as a reticle, and
commits copies of a template model into the scene when the user selects.

## Architecture

- **HitTestSourceManager**: one-shot asynchronous source setup (state machine)
- **ReticleTracker**: per-frame hit-test query and placement pose update
- **PlacementCommitter**: clones the template model on user selection
- **ArSession**: session-scoped context driving the three components per frame

Platform collaborators (session, frame, renderer) are traits, with a
simulated backend for tests and desktop runs.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod xr;
pub mod scene;
pub mod placement;
pub mod session;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (logging host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // XR platform collaborators
    pub mod xr {
        pub use crate::xr::*;
    }

    // Scene graph, template model and reticle
    pub mod scene {
        pub use crate::scene::*;
    }

    // Placement core
    pub mod placement {
        pub use crate::placement::*;
    }

    // Session context and configuration
    pub mod session {
        pub use crate::session::*;
    }
}

// Re-export math library at crate root
pub use glam;
