/// Session-scoped placement context.
///
/// Owns everything one AR session needs: the three placement components,
/// the reticle, the permanent scene and the template model. Independent
/// sessions never share state.
///
/// Per frame, `on_frame` runs:
/// 1. HitTestSourceManager::ensure_source
/// 2. ReticleTracker::update, then reticle sync
/// 3. queued select events against the pose of step 2
/// 4. renderer draw

use crate::error::Result;
use crate::placement::{
    HitTestSourceManager, HitTestSourceState, PlacementCommitter, PlacementPose, ReticleTracker,
};
use crate::scene::{ModelTemplate, Node, NodeKey, Reticle, Scene};
use crate::xr::XrFrame;
use crate::{engine_error, engine_info};
use super::ar_renderer::ArRenderer;
use super::input::InputEvent;
use super::session_config::SessionConfig;

const SOURCE: &str = "galaxy3d::ar::ArSession";

/// Lifecycle of the session context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Driven by the frame loop
    Running,
    /// Session ended; frames and input are ignored
    Ended,
}

/// Session-scoped placement context
pub struct ArSession {
    config: SessionConfig,
    state: SessionState,
    source_manager: HitTestSourceManager,
    tracker: ReticleTracker,
    committer: PlacementCommitter,
    reticle: Reticle,
    scene: Scene,
    template: ModelTemplate,
    pending_events: Vec<InputEvent>,
    frame_count: u64,
}

impl ArSession {
    /// Create a running session context
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: SessionConfig, template: ModelTemplate) -> Result<Self> {
        if let Err(error) = config.validate() {
            engine_error!(SOURCE, "Rejected session configuration: {}", error);
            return Err(error);
        }

        engine_info!(SOURCE, "AR session context created (template '{}')", template.root().name());

        Ok(Self {
            reticle: Reticle::new(config.reticle),
            config,
            state: SessionState::Running,
            source_manager: HitTestSourceManager::new(),
            tracker: ReticleTracker::new(),
            committer: PlacementCommitter::new(),
            scene: Scene::new(),
            template,
            pending_events: Vec::new(),
            frame_count: 0,
        })
    }

    // ===== FRAME LOOP =====

    /// Queue an input event for the next `on_frame`
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.state == SessionState::Running {
            self.pending_events.push(event);
        }
    }

    /// Run one frame.
    ///
    /// `frame` is `None` on render ticks without XR data; the placement pose
    /// is then left untouched. Only renderer errors are returned.
    pub fn on_frame(
        &mut self,
        renderer: &mut dyn ArRenderer,
        frame: Option<&dyn XrFrame>,
    ) -> Result<()> {
        if self.state == SessionState::Ended {
            return Ok(());
        }
        self.frame_count += 1;

        if let Some(frame) = frame {
            let session_id = frame.session().id();
            if let Some(previous) = self.source_manager.session() {
                if previous != session_id {
                    engine_info!(SOURCE, "Frames now come from {:?}, placement pose reset", session_id);
                    self.tracker.reset();
                }
            }
            let world_space = renderer.reference_space();
            let source = self.source_manager.ensure_source(frame);
            let pose = self.tracker.update(frame, source, world_space.as_ref());
            self.reticle.sync(&pose);
        }

        self.commit_pending_selects();

        renderer.render(&mut self.scene, &self.reticle).map_err(|error| {
            engine_error!(SOURCE, "Render failed on frame {}: {}", self.frame_count, error);
            error
        })
    }

    /// Commit a placement immediately against the current pose
    pub fn select(&mut self) -> Option<NodeKey> {
        if self.state == SessionState::Ended {
            return None;
        }
        let pose = self.tracker.pose();
        self.committer.on_select(&pose, &self.template, &mut self.scene)
    }

    /// Stop the session. Outstanding platform requests are abandoned.
    pub fn end(&mut self) {
        if self.state == SessionState::Ended {
            return;
        }
        self.state = SessionState::Ended;
        self.pending_events.clear();
        engine_info!(
            SOURCE,
            "AR session ended after {} frames, {} instances placed",
            self.frame_count,
            self.committer.placed_instances().len()
        );
    }

    fn commit_pending_selects(&mut self) {
        let pose = self.tracker.pose();
        let controller = self.config.controller_index;
        for event in std::mem::take(&mut self.pending_events) {
            if event.is_select_from(controller) {
                self.committer.on_select(&pose, &self.template, &mut self.scene);
            }
        }
    }

    // ===== MODEL =====

    /// Attach the loaded asset to the template using the configured base transform
    pub fn complete_model_load(&mut self, asset: Node) {
        self.template.complete(asset, &self.config.model);
    }

    /// Template model
    pub fn template(&self) -> &ModelTemplate {
        &self.template
    }

    /// Mutable template model (progress and failure reporting)
    pub fn template_mut(&mut self) -> &mut ModelTemplate {
        &mut self.template
    }

    // ===== GETTERS =====

    /// Lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current placement pose
    pub fn placement_pose(&self) -> PlacementPose {
        self.tracker.pose()
    }

    /// Reticle entity
    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    /// Permanent scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable permanent scene (external scene edits and teardown)
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Hit-test source setup state
    pub fn hit_test_state(&self) -> HitTestSourceState {
        self.source_manager.state()
    }

    /// Hit-test source manager
    pub fn source_manager(&self) -> &HitTestSourceManager {
        &self.source_manager
    }

    /// Keys of placed instances, in placement order
    pub fn placed_instances(&self) -> &[NodeKey] {
        self.committer.placed_instances()
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
#[path = "ar_session_tests.rs"]
mod tests;
