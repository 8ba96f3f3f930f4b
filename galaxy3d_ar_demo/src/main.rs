//! Galaxy3D AR demo
//!
//! Drives one placement session against the simulated XR backend: the
//! hit-test source comes up over a few frames, the user aims at a floor,
//! loses tracking briefly, then taps twice to place two models.

use galaxy_3d_ar::galaxy3d::log::LogSeverity;
use galaxy_3d_ar::galaxy3d::scene::{AnimationState, ModelTemplate, Node};
use galaxy_3d_ar::galaxy3d::session::{ArSession, InputEvent, SessionConfig};
use galaxy_3d_ar::galaxy3d::xr::simulated::{
    SimulatedFrame, SimulatedHit, SimulatedRenderer, SimulatedSession,
};
use galaxy_3d_ar::galaxy3d::xr::{ReferenceSpaceType, SessionFeatures};
use galaxy_3d_ar::galaxy3d::{Engine, Result};
use galaxy_3d_ar::glam::{Mat4, Quat, Vec3};
use galaxy_3d_ar::{engine_info, engine_warn};

const SOURCE: &str = "galaxy3d::demo";

/// One scripted frame: what the platform reports and what the user does
struct ScriptedFrame {
    hits: Vec<SimulatedHit>,
    select: bool,
}

fn floor_at(x: f32, z: f32, yaw: f32) -> SimulatedHit {
    SimulatedHit::at(Mat4::from_rotation_translation(
        Quat::from_rotation_y(yaw),
        Vec3::new(x, -1.4, z),
    ))
}

fn script() -> Vec<ScriptedFrame> {
    let mut frames = Vec::new();
    // Camera sweeping over the floor
    for i in 0..6 {
        let t = i as f32 * 0.1;
        frames.push(ScriptedFrame { hits: vec![floor_at(t, -1.0 - t, t)], select: false });
    }
    // Tracking lost
    frames.push(ScriptedFrame { hits: Vec::new(), select: false });
    // Tap with no surface locked
    frames.push(ScriptedFrame { hits: Vec::new(), select: true });
    // Surface found again, pose briefly unavailable
    frames.push(ScriptedFrame { hits: vec![floor_at(0.3, -1.2, 0.5)], select: false });
    frames.push(ScriptedFrame { hits: vec![SimulatedHit::pose_unavailable()], select: true });
    frames.push(ScriptedFrame { hits: vec![floor_at(-0.4, -0.8, 1.1)], select: true });
    frames
}

fn build_tulip() -> Node {
    Node::new("tulip")
        .with_child(Node::new("stem"))
        .with_child(Node::new("petals").with_animation(AnimationState::playing("sway")))
}

fn main() -> Result<()> {
    Engine::set_min_severity(LogSeverity::Info);

    let platform = SessionFeatures::HIT_TEST | SessionFeatures::LOCAL_FLOOR;
    let config = SessionConfig::default();
    if !config.is_session_supported(platform) {
        engine_warn!(SOURCE, "immersive-ar with hit-test is not supported on this platform");
        return Ok(());
    }
    let features = config.negotiated_features(platform);
    engine_info!(SOURCE, "Starting AR session with features {:?}", features);

    let xr = SimulatedSession::new(1, features);
    let mut renderer = SimulatedRenderer::new();
    renderer.set_reference_space(Some(xr.create_reference_space(ReferenceSpaceType::Local)));

    let mut session = ArSession::new(config, ModelTemplate::placeholder("tulip"))?;

    // Model loads while the source is being set up
    session.template_mut().report_progress(512, 2048);
    session.template_mut().report_progress(2048, 2048);
    session.complete_model_load(build_tulip());

    for scripted in script() {
        let mut frame = SimulatedFrame::new(&xr);
        for hit in scripted.hits {
            frame = frame.with_hit(hit);
        }
        if scripted.select {
            session.handle_input(InputEvent::Select { controller: 0 });
        }
        session.on_frame(&mut renderer, Some(&frame))?;
        xr.resolve_pending();
    }

    for (index, key) in session.placed_instances().iter().enumerate() {
        if let Some(node) = session.scene().node(*key) {
            let position = node.transform().position;
            engine_info!(
                SOURCE,
                "Instance {} '{}' at ({:.2}, {:.2}, {:.2}), {} descendants",
                index + 1,
                node.name(),
                position.x,
                position.y,
                position.z,
                node.descendant_count()
            );
        }
    }

    session.end();
    xr.end();
    Ok(())
}
