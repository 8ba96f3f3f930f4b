/// Renderer collaborator of an AR session.

use crate::error::Result;
use crate::scene::{Reticle, Scene};
use crate::xr::ReferenceSpace;

/// Renderer drawing the permanent scene and the reticle over passthrough
pub trait ArRenderer {
    /// World-anchored reference space of the XR view.
    ///
    /// May be `None` right after session start.
    fn reference_space(&self) -> Option<ReferenceSpace>;

    /// Draw one frame.
    ///
    /// The renderer may drain `scene.take_dirty_transforms()` to upload
    /// only the nodes that moved.
    fn render(&mut self, scene: &mut Scene, reticle: &Reticle) -> Result<()>;
}
