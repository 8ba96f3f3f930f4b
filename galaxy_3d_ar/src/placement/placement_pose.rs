/// Where a placement would land this frame.
///
/// Written whole by the ReticleTracker once per frame and read by the
/// reticle and the PlacementCommitter. The value is `Copy`: readers always
/// see a complete snapshot, never a half-updated record.

use glam::Mat4;
use crate::scene::Transform;

/// Raw placement matrix plus visibility flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPose {
    matrix: Mat4,
    visible: bool,
}

impl PlacementPose {
    /// Pose with the given matrix and visibility
    pub fn new(matrix: Mat4, visible: bool) -> Self {
        Self { matrix, visible }
    }

    /// Invisible pose at the origin (no surface locked yet)
    pub fn hidden() -> Self {
        Self::new(Mat4::IDENTITY, false)
    }

    /// Raw matrix, exactly as resolved from the platform
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// True while a surface is locked
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Same matrix with a different visibility
    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    /// Position, orientation and scale of the matrix
    pub fn decompose(&self) -> Transform {
        Transform::from_matrix(&self.matrix)
    }
}

impl Default for PlacementPose {
    fn default() -> Self {
        Self::hidden()
    }
}
