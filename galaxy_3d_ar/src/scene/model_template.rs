/// The model copied into the world on each placement.
///
/// Loading happens elsewhere; the template starts as an empty placeholder
/// group and receives the loaded asset as a child when loading completes.
/// It can be cloned at any point: a clone taken before completion is an
/// empty group.

use glam::Vec3;
use crate::{engine_info, engine_debug, engine_warn};
use super::node::{Node, Cloneable};
use super::transform::Transform;

/// Transform applied to a freshly loaded asset before it joins the template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Uniform scale applied to the asset root
    pub base_scale: f32,
    /// Offset of the asset root inside the template group
    pub base_offset: Vec3,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_scale: 0.02,
            base_offset: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

/// Loading state reported by the asset provider
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Still loading; `percent` in [0, 100]
    Loading { percent: f32 },
    /// Asset attached
    Loaded,
    /// Provider gave up; the template stays an empty group
    Failed(String),
}

/// Template model with a placeholder root
#[derive(Debug, Clone)]
pub struct ModelTemplate {
    root: Node,
    status: LoadStatus,
}

impl ModelTemplate {
    /// Empty placeholder group named `name`
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            root: Node::new(name),
            status: LoadStatus::Loading { percent: 0.0 },
        }
    }

    /// Template wrapping an already available node
    pub fn from_node(root: Node) -> Self {
        Self { root, status: LoadStatus::Loaded }
    }

    /// Placeholder root (group holding the loaded asset)
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Current loading state
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// True once the asset has been attached
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    /// Record loading progress. A zero `total` (unknown size) is ignored.
    pub fn report_progress(&mut self, loaded: u64, total: u64) {
        if total == 0 || !matches!(self.status, LoadStatus::Loading { .. }) {
            return;
        }
        let percent = (loaded.min(total) as f64 / total as f64 * 100.0) as f32;
        self.status = LoadStatus::Loading { percent };
        engine_debug!("galaxy3d::ar::ModelTemplate", "{}% loaded", percent);
    }

    /// Attach the loaded asset, after applying `config` to its root transform
    pub fn complete(&mut self, mut asset: Node, config: &ModelConfig) {
        asset.set_transform(Transform {
            position: config.base_offset,
            rotation: asset.transform().rotation,
            scale: Vec3::splat(config.base_scale),
        });
        engine_info!(
            "galaxy3d::ar::ModelTemplate",
            "Model '{}' loaded ({} nodes)",
            asset.name(),
            1 + asset.descendant_count()
        );
        self.root.add_child(asset);
        self.status = LoadStatus::Loaded;
    }

    /// Record a loading failure. Placements keep working with the empty group.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        engine_warn!("galaxy3d::ar::ModelTemplate", "An error happened while loading the model: {}", reason);
        self.status = LoadStatus::Failed(reason);
    }
}

impl Cloneable for ModelTemplate {
    fn deep_clone(&self) -> Node {
        self.root.deep_clone()
    }
}

#[cfg(test)]
#[path = "model_template_tests.rs"]
mod tests;
