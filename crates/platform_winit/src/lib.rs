//! platform_winit: window + input + frame loop host (winit 0.30).
//!
//! Adapts winit events onto `controller_core`'s input snapshot, drives the
//! session once per redraw, and hands each frame to a presenter. A stub
//! loader thread stands in for the asset pipeline, delivering the mesh and
//! the configured clips through the session's completion channel.

use anyhow::{Context, Result};
use controller_core::anim::{AnimClip, AnimState, AnimationBlender};
use controller_core::assets::{self, AssetEvent, AssetTx};
use controller_core::camera::{CameraRigCfg, ChaseCamera, OrbitConfig, Smoothing};
use controller_core::controller::{CharacterController, MoveTuning};
use controller_core::frame::Session;
use controller_core::present::{FrameOutput, FramePresenter, Projection};
use data_runtime::configs::input_camera::InputCameraCfg;
use data_runtime::configs::pc_animations::PcAnimCfg;
use data_runtime::configs::tuning::TuningCfg;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes},
};

/// Presenter that logs frame summaries; stands in for a real renderer.
#[derive(Default)]
pub struct LogPresenter {
    frames: u64,
}

impl FramePresenter for LogPresenter {
    fn resize(&mut self, width: u32, height: u32) {
        log::info!("viewport: {width}x{height}");
    }

    fn present(&mut self, frame: &FrameOutput) {
        self.frames += 1;
        if self.frames % 120 == 0 {
            let p = frame.character_pos;
            let e = frame.camera.eye;
            log::debug!(
                "frame {}: pc=({:.2},{:.2},{:.2}) eye=({:.2},{:.2},{:.2}) tracks={}",
                self.frames,
                p.x,
                p.y,
                p.z,
                e.x,
                e.y,
                e.z,
                frame.tracks.len()
            );
        }
    }
}

struct App<P: FramePresenter> {
    window: Option<Window>,
    session: Session,
    presenter: P,
    last_time: Option<std::time::Instant>,
}

impl<P: FramePresenter> ApplicationHandler for App<P> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(WindowAttributes::default().with_title("Strider").with_maximized(true))
                .expect("create window");
            self.window = Some(window);
            self.last_time = Some(std::time::Instant::now());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.presenter.resize(size.width, size.height),
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state.is_pressed();
                let input = self.session.input_mut();
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyW) => input.forward = pressed,
                    PhysicalKey::Code(KeyCode::KeyS) => input.backward = pressed,
                    PhysicalKey::Code(KeyCode::KeyA) => input.left = pressed,
                    PhysicalKey::Code(KeyCode::KeyD) => input.right = pressed,
                    _ => {}
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Right,
                ..
            } => {
                // Hold RMB to look: capture the pointer so the device feed
                // delivers raw deltas, release to restore the cursor.
                let pressed = state.is_pressed();
                let grab = if pressed {
                    CursorGrabMode::Locked
                } else {
                    CursorGrabMode::None
                };
                match window.set_cursor_grab(grab) {
                    Ok(()) => {
                        window.set_cursor_visible(!pressed);
                        self.session.input_mut().mouse_look = pressed;
                    }
                    Err(e) => {
                        log::debug!("pointer lock request failed: {e:?}");
                        window.set_cursor_visible(true);
                        self.session.input_mut().mouse_look = false;
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 40.0) as f32,
                };
                self.session.input_mut().push_wheel(steps);
            }
            WindowEvent::RedrawRequested => {
                let now = std::time::Instant::now();
                let dt = self
                    .last_time
                    .map_or(1.0 / 60.0, |t0| (now - t0).as_secs_f32());
                self.last_time = Some(now);
                if let Some(frame) = self.session.advance(dt) {
                    self.presenter.present(&frame);
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            // Forward relative motion unconditionally; the session applies it
            // to the orbit only while look-lock is held, and drains it either
            // way so stale deltas never double-apply.
            self.session
                .input_mut()
                .push_mouse_delta(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(win) = &self.window {
            win.request_redraw();
        }
    }
}

fn orbit_config(cfg: &InputCameraCfg) -> OrbitConfig {
    let d = OrbitConfig::default();
    OrbitConfig {
        sensitivity_deg_per_count: cfg
            .sensitivity_deg_per_count
            .unwrap_or(d.sensitivity_deg_per_count),
        invert_y: cfg.invert_y.unwrap_or(d.invert_y),
        min_polar: cfg.min_polar_deg.map_or(d.min_polar, f32::to_radians),
        max_polar: cfg.max_polar_deg.map_or(d.max_polar, f32::to_radians),
    }
}

fn move_tuning(cfg: &TuningCfg) -> MoveTuning {
    let d = MoveTuning::default();
    let m = cfg.movement.as_ref();
    MoveTuning {
        speed: m.and_then(|m| m.speed).unwrap_or(d.speed),
        turn_gain_per_s: m.and_then(|m| m.turn_gain_per_s).unwrap_or(d.turn_gain_per_s),
    }
}

fn camera_rig(cfg: &TuningCfg) -> CameraRigCfg {
    let d = CameraRigCfg::default();
    let c = cfg.camera.as_ref();
    let smoothing = match c.and_then(|c| c.smoothing.as_deref()) {
        Some("per_frame") => {
            Smoothing::PerFrame(c.and_then(|c| c.per_frame_factor).unwrap_or(0.05))
        }
        _ => Smoothing::Exponential,
    };
    CameraRigCfg {
        boom_len: c.and_then(|c| c.boom_len).unwrap_or(d.boom_len),
        min_boom: c.and_then(|c| c.min_boom).unwrap_or(d.min_boom),
        max_boom: c.and_then(|c| c.max_boom).unwrap_or(d.max_boom),
        zoom_step: c.and_then(|c| c.zoom_step).unwrap_or(d.zoom_step),
        look_height: c.and_then(|c| c.look_height).unwrap_or(d.look_height),
        smoothing,
    }
}

fn fade_duration(cfg: &TuningCfg) -> f32 {
    cfg.animation
        .as_ref()
        .and_then(|a| a.fade_duration_s)
        .unwrap_or(0.25)
}

/// Stand-in for the asset pipeline: deliver the mesh, then each configured
/// clip, from a separate thread so arrival stays decoupled from frame
/// timing.
fn spawn_loader(tx: AssetTx, anims: PcAnimCfg) {
    std::thread::spawn(move || {
        let _ = tx.try_send(AssetEvent::MeshReady);
        let entries = [(AnimState::Idle, anims.idle), (AnimState::Run, anims.run)];
        for (state, entry) in entries {
            let Some(e) = entry else {
                log::debug!("assets: no clip configured for {}", state.name());
                continue;
            };
            let delivered = tx.try_send(AssetEvent::Clip {
                state,
                clip: AnimClip {
                    name: e.name,
                    duration: e.duration_s,
                },
            });
            if !delivered {
                return;
            }
        }
    });
}

/// Build a session from the data-driven configs and wire the stub loader.
pub fn build_session() -> Result<Session> {
    let input_cam =
        data_runtime::configs::input_camera::load_default().context("load input_camera config")?;
    let tuning = data_runtime::configs::tuning::load_default().context("load tuning config")?;
    let anims = data_runtime::configs::pc_animations::load_default()
        .context("load pc_animations config")?;

    let (tx, rx) = assets::channel();
    spawn_loader(tx, anims);

    let controller = CharacterController::new(Vec3::ZERO, move_tuning(&tuning));
    let blender = AnimationBlender::new(fade_duration(&tuning));
    let camera = ChaseCamera::new(camera_rig(&tuning));
    Ok(Session::new(
        controller,
        blender,
        camera,
        orbit_config(&input_cam),
        Projection::default(),
        rx,
    ))
}

fn is_headless() -> bool {
    if std::env::var("STRIDER_HEADLESS")
        .map(|v| v == "1")
        .unwrap_or(false)
    {
        return true;
    }
    if std::env::var("CI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
    {
        return true;
    }
    #[cfg(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
    ))]
    {
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return true;
        }
    }
    false
}

pub fn run() -> Result<()> {
    if is_headless() {
        log::info!("headless environment detected; skipping window setup");
        return Ok(());
    }
    let session = build_session()?;
    let event_loop = EventLoop::new()?;
    let mut app = App {
        window: None,
        session,
        presenter: LogPresenter::default(),
        last_time: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
