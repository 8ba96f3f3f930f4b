//! Session module
//!
//! The session-scoped context that owns the placement components and
//! drives them once per frame, plus its configuration and the renderer and
//! input collaborators.

mod session_config;
mod input;
mod ar_renderer;
mod ar_session;

pub use session_config::SessionConfig;
pub use input::InputEvent;
pub use ar_renderer::ArRenderer;
pub use ar_session::{ArSession, SessionState};
