//! Controller core: input snapshot and a third-person character controller.
//!
//! Animation blending, chase-camera framing, the per-frame session, and the
//! host-facing seams live in the `anim`, `camera`, `frame`, `assets`, and
//! `present` modules.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod input {
    /// Input snapshot for one frame of local avatar intent.
    ///
    /// Key booleans are level state written by the host's event callbacks at
    /// any time; mouse and wheel deltas accumulate between frames and must be
    /// drained exactly once per session tick, or camera rotation would
    /// double-apply.
    #[derive(Default, Debug, Clone, Copy)]
    pub struct InputState {
        pub forward: bool,
        pub backward: bool,
        pub left: bool,
        pub right: bool,
        /// True while the pointer is captured and deltas steer the orbit.
        pub mouse_look: bool,
        mouse_dx: f32,
        mouse_dy: f32,
        wheel: f32,
    }

    impl InputState {
        /// Accumulate a relative pointer motion (host callback).
        pub fn push_mouse_delta(&mut self, dx: f32, dy: f32) {
            self.mouse_dx += dx;
            self.mouse_dy += dy;
        }

        /// Accumulate a scroll step (host callback).
        pub fn push_wheel(&mut self, steps: f32) {
            self.wheel += steps;
        }

        /// Drain the accumulated pointer delta, resetting it to zero.
        #[must_use]
        pub fn take_mouse_delta(&mut self) -> (f32, f32) {
            let d = (self.mouse_dx, self.mouse_dy);
            self.mouse_dx = 0.0;
            self.mouse_dy = 0.0;
            d
        }

        /// Drain the accumulated wheel delta, resetting it to zero.
        #[must_use]
        pub fn take_wheel(&mut self) -> f32 {
            std::mem::take(&mut self.wheel)
        }

        pub fn clear(&mut self) {
            *self = Self::default();
        }
    }
}

pub mod controller {
    use crate::anim::AnimState;
    use crate::input::InputState;
    use glam::{Quat, Vec3};

    /// Ground-movement tuning.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct MoveTuning {
        /// Ground speed in units/sec.
        pub speed: f32,
        /// Fraction of the remaining turn closed per second, in (0, 1).
        pub turn_gain_per_s: f32,
    }

    impl Default for MoveTuning {
        fn default() -> Self {
            Self {
                speed: 2.5,
                turn_gain_per_s: 0.999,
            }
        }
    }

    /// Avatar transform plus the animation state it wants this frame.
    ///
    /// Owned by [`CharacterController`]; camera and presenter read it only.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CharacterState {
        pub pos: Vec3,
        pub rot: Quat,
        /// Horizontal speed this frame (zero while idle).
        pub speed: f32,
        pub anim: AnimState,
    }

    #[derive(Debug, Clone, Copy)]
    pub struct CharacterController {
        state: CharacterState,
        tuning: MoveTuning,
    }

    impl CharacterController {
        #[must_use]
        pub fn new(initial_pos: Vec3, tuning: MoveTuning) -> Self {
            Self {
                state: CharacterState {
                    pos: initial_pos,
                    rot: Quat::IDENTITY,
                    speed: 0.0,
                    anim: AnimState::Idle,
                },
                tuning,
            }
        }

        #[must_use]
        pub fn state(&self) -> &CharacterState {
            &self.state
        }

        /// Advance one frame of camera-relative movement.
        ///
        /// The camera forward is flattened onto XZ and combined with its
        /// right axis per held key. Opposite keys cancel through vector
        /// addition and route to the idle branch, so a zero-length vector
        /// never reaches `normalize`. A non-zero direction turns the avatar
        /// by slerping toward the yaw-only target at a frame-rate
        /// independent fraction and displaces it by `speed * dt`.
        pub fn advance(&mut self, dt: f32, input: &InputState, cam_forward: Vec3) -> &CharacterState {
            let fwd = Vec3::new(cam_forward.x, 0.0, cam_forward.z).normalize_or_zero();
            let right = fwd.cross(Vec3::Y).normalize_or_zero();

            let mut dir = Vec3::ZERO;
            if input.forward {
                dir += fwd;
            }
            if input.backward {
                dir -= fwd;
            }
            if input.right {
                dir += right;
            }
            if input.left {
                dir -= right;
            }

            // Cancelled keys and a degenerate (vertical) camera both land here.
            if dir.length_squared() <= 1e-8 {
                self.state.speed = 0.0;
                self.state.anim = AnimState::Idle;
                return &self.state;
            }

            let dir = dir.normalize();
            let target = Quat::from_rotation_y(dir.x.atan2(dir.z));
            let t = 1.0 - (1.0 - self.tuning.turn_gain_per_s).powf(dt.max(0.0));
            self.state.rot = self.state.rot.slerp(target, t);
            self.state.pos += dir * self.tuning.speed * dt;
            self.state.speed = self.tuning.speed;
            self.state.anim = AnimState::Run;
            &self.state
        }
    }
}

pub mod anim;
pub mod assets;
pub mod camera;
pub mod frame;
pub mod present;
