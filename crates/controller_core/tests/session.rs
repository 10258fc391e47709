use controller_core::anim::{AnimClip, AnimState, AnimationBlender};
use controller_core::assets::{self, AssetEvent, AssetTx};
use controller_core::camera::{CameraRigCfg, ChaseCamera, OrbitConfig};
use controller_core::controller::{CharacterController, MoveTuning};
use controller_core::frame::Session;
use controller_core::present::Projection;
use glam::Vec3;

fn session() -> (Session, AssetTx) {
    let (tx, rx) = assets::channel();
    let s = Session::new(
        CharacterController::new(Vec3::ZERO, MoveTuning::default()),
        AnimationBlender::new(0.25),
        ChaseCamera::new(CameraRigCfg::default()),
        OrbitConfig::default(),
        Projection::default(),
        rx,
    );
    (s, tx)
}

fn clip_event(state: AnimState, name: &str, duration: f32) -> AssetEvent {
    AssetEvent::Clip {
        state,
        clip: AnimClip {
            name: name.to_string(),
            duration,
        },
    }
}

#[test]
fn no_frame_until_mesh_arrives() {
    let (mut s, tx) = session();
    assert!(s.advance(0.016).is_none());
    assert!(s.advance(0.016).is_none());
    assert!(tx.try_send(AssetEvent::MeshReady));
    assert!(s.advance(0.016).is_some());
    assert!(s.mesh_ready());
}

#[test]
fn mouse_delta_applies_once_and_only_in_look_lock() {
    let (mut s, tx) = session();
    assert!(tx.try_send(AssetEvent::MeshReady));
    let az0 = s.camera().orbit().azimuth;

    // Delta accumulated without look-lock is drained but not applied
    s.input_mut().push_mouse_delta(500.0, 0.0);
    let _ = s.advance(0.016);
    assert!((s.camera().orbit().azimuth - az0).abs() < 1e-6);

    // With look-lock held the next delta steers the orbit
    s.input_mut().mouse_look = true;
    s.input_mut().push_mouse_delta(100.0, 0.0);
    let _ = s.advance(0.016);
    let az1 = s.camera().orbit().azimuth;
    assert!((az1 - az0).abs() > 1e-4);

    // Nothing new pushed: a second tick must not re-apply the old delta
    let _ = s.advance(0.016);
    assert!((s.camera().orbit().azimuth - az1).abs() < 1e-6);
}

#[test]
fn wheel_zoom_clamps_to_band() {
    let (mut s, tx) = session();
    assert!(tx.try_send(AssetEvent::MeshReady));
    s.input_mut().push_wheel(100.0);
    let _ = s.advance(0.016);
    assert!((s.camera().boom_len() - 1.5).abs() < 1e-6);
}

#[test]
fn run_request_waits_for_clip_then_fades() {
    let (mut s, tx) = session();
    assert!(tx.try_send(AssetEvent::MeshReady));
    assert!(tx.try_send(clip_event(AnimState::Idle, "Idle", 2.0)));

    // One quiet tick: the character starts idle and the idle track engages
    let _ = s.advance(0.016);
    assert_eq!(s.blender().active(), Some(AnimState::Idle));

    // Forward held, but the run clip has not loaded: idle stays active
    s.input_mut().forward = true;
    let _ = s.advance(0.016);
    assert_eq!(s.blender().active(), Some(AnimState::Idle));

    // Clip arrives; the standing request starts the fade on the next tick
    assert!(tx.try_send(clip_event(AnimState::Run, "Run", 0.8)));
    let _ = s.advance(0.016);
    assert_eq!(s.blender().active(), Some(AnimState::Run));
}

#[test]
fn forward_scenario_end_to_end() {
    let (mut s, tx) = session();
    assert!(tx.try_send(AssetEvent::MeshReady));
    assert!(tx.try_send(clip_event(AnimState::Idle, "Idle", 2.0)));
    assert!(tx.try_send(clip_event(AnimState::Run, "Run", 0.8)));

    s.input_mut().forward = true;
    let mut last = None;
    for _ in 0..100 {
        last = s.advance(0.01);
    }
    let frame = last.expect("mesh loaded, frames flow");

    // Default orbit looks -Z, so 1s of forward lands near (0, 0, -2.5)
    assert!(frame.character_pos.distance(Vec3::new(0.0, 0.0, -2.5)) < 1e-3);
    let run = frame
        .tracks
        .iter()
        .find(|t| t.state == AnimState::Run)
        .expect("run track present");
    assert!((run.weight - 1.0).abs() < 1e-6, "fade completed");
    // Chase camera trails on the +Z side and frames the character
    assert!(frame.camera.eye.z > frame.character_pos.z);
    assert!(
        frame
            .camera
            .target
            .distance(frame.character_pos + Vec3::Y * 1.0)
            < 1e-5
    );
}

#[test]
fn idle_settles_when_keys_cancel() {
    let (mut s, tx) = session();
    assert!(tx.try_send(AssetEvent::MeshReady));
    assert!(tx.try_send(clip_event(AnimState::Idle, "Idle", 2.0)));
    assert!(tx.try_send(clip_event(AnimState::Run, "Run", 0.8)));

    s.input_mut().forward = true;
    s.input_mut().backward = true;
    let mut last = None;
    for _ in 0..100 {
        last = s.advance(0.01);
    }
    let frame = last.expect("frames flow");
    assert_eq!(frame.character_pos, Vec3::ZERO);
    assert_eq!(s.blender().active(), Some(AnimState::Idle));
    let idle = frame
        .tracks
        .iter()
        .find(|t| t.state == AnimState::Idle)
        .expect("idle track present");
    assert!((idle.weight - 1.0).abs() < 1e-6);
}
