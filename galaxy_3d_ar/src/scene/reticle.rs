/// Ring indicator showing where a placement would land.
///
/// Exactly one reticle exists per session. Its matrix is driven directly
/// from the tracked placement pose (no decomposition) and it is never
/// inserted into the permanent scene.

use glam::{Mat4, Vec3};
use crate::placement::PlacementPose;

/// Ring geometry of the reticle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleConfig {
    /// Inner ring radius in meters
    pub inner_radius: f32,
    /// Outer ring radius in meters
    pub outer_radius: f32,
    /// Segments per circle
    pub segments: u32,
}

impl Default for ReticleConfig {
    fn default() -> Self {
        Self {
            inner_radius: 0.15,
            outer_radius: 0.2,
            segments: 32,
        }
    }
}

/// Indicator entity mirroring a PlacementPose
#[derive(Debug, Clone)]
pub struct Reticle {
    config: ReticleConfig,
    matrix: Mat4,
    visible: bool,
}

impl Reticle {
    /// Hidden reticle at the origin
    pub fn new(config: ReticleConfig) -> Self {
        Self {
            config,
            matrix: Mat4::IDENTITY,
            visible: false,
        }
    }

    /// Copy matrix and visibility from `pose`
    pub fn sync(&mut self, pose: &PlacementPose) {
        self.matrix = *pose.matrix();
        self.visible = pose.visible();
    }

    /// Render matrix
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Whether the renderer should draw the reticle
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Ring geometry
    pub fn config(&self) -> &ReticleConfig {
        &self.config
    }

    /// Inner and outer circle points in local space.
    ///
    /// The ring lies flat on the XZ plane (the hit pose's Y axis is the
    /// surface normal). Returns `(inner, outer)`, `segments` points each.
    pub fn ring_outline(&self) -> (Vec<Vec3>, Vec<Vec3>) {
        let segments = self.config.segments.max(3);
        let step = std::f32::consts::TAU / segments as f32;
        let circle = |radius: f32| -> Vec<Vec3> {
            (0..segments)
                .map(|i| {
                    let (sin, cos) = (i as f32 * step).sin_cos();
                    Vec3::new(cos * radius, 0.0, sin * radius)
                })
                .collect()
        };
        (circle(self.config.inner_radius), circle(self.config.outer_radius))
    }
}

#[cfg(test)]
#[path = "reticle_tests.rs"]
mod tests;
