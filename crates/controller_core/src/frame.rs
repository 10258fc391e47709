//! Frame-loop session: the fixed per-tick sequence over the owned parts.
//!
//! Order per tick: drain asset completions, drain input deltas, then
//! controller → blender → camera. No other branching; anomalies degrade to
//! "no frame output".

use crate::anim::AnimationBlender;
use crate::assets::{AssetEvent, AssetRx};
use crate::camera::{ChaseCamera, OrbitConfig, apply_mouse_delta};
use crate::controller::CharacterController;
use crate::input::InputState;
use crate::present::{FrameOutput, Projection};

pub struct Session {
    input: InputState,
    controller: CharacterController,
    blender: AnimationBlender,
    camera: ChaseCamera,
    orbit_cfg: OrbitConfig,
    projection: Projection,
    assets: AssetRx,
    mesh_ready: bool,
}

impl Session {
    #[must_use]
    pub fn new(
        controller: CharacterController,
        blender: AnimationBlender,
        camera: ChaseCamera,
        orbit_cfg: OrbitConfig,
        projection: Projection,
        assets: AssetRx,
    ) -> Self {
        Self {
            input: InputState::default(),
            controller,
            blender,
            camera,
            orbit_cfg,
            projection,
            assets,
            mesh_ready: false,
        }
    }

    /// Host-side handle for event callbacks.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    #[must_use]
    pub fn mesh_ready(&self) -> bool {
        self.mesh_ready
    }

    #[must_use]
    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    #[must_use]
    pub fn blender(&self) -> &AnimationBlender {
        &self.blender
    }

    /// One tick. Returns `None` until the character mesh has arrived — a
    /// normal startup state, not a failure. Input deltas are drained even
    /// on skipped frames so a stale accumulation cannot double-apply later.
    pub fn advance(&mut self, dt: f32) -> Option<FrameOutput> {
        let dt = dt.clamp(0.0, 0.1);

        for ev in self.assets.drain() {
            match ev {
                AssetEvent::MeshReady => {
                    log::info!("assets: character mesh ready");
                    self.mesh_ready = true;
                }
                AssetEvent::Clip { state, clip } => self.blender.register_clip(state, clip),
            }
        }

        let (dx, dy) = self.input.take_mouse_delta();
        let wheel = self.input.take_wheel();
        if self.input.mouse_look {
            apply_mouse_delta(&self.orbit_cfg, self.camera.orbit_mut(), dx, dy);
        }
        if wheel.abs() > f32::EPSILON {
            self.camera.zoom(wheel);
        }

        if !self.mesh_ready {
            return None;
        }

        let cam_forward = self.camera.forward();
        let state = *self.controller.advance(dt, &self.input, cam_forward);
        self.blender.set_active(state.anim);
        self.blender.advance(dt);
        let camera = self.camera.advance(dt, state.pos);

        Some(FrameOutput {
            character_pos: state.pos,
            character_rot: state.rot,
            tracks: self.blender.sample(),
            camera,
            projection: self.projection,
        })
    }
}
