//! Presenter-side frame data and the trait hosts implement.
//!
//! Kept in the logic crate to avoid coupling the core to renderer
//! internals. The presenter consumes one frame at a time and never feeds
//! back into the core.

use crate::anim::TrackSample;
use crate::camera::CameraPose;
use glam::{Mat4, Quat, Vec3};

/// Fixed projection parameters; the presenter applies its own aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: 75f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// Everything the external renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub character_pos: Vec3,
    pub character_rot: Quat,
    /// Weight/cursor snapshot for compositing the skeletal pose.
    pub tracks: Vec<TrackSample>,
    pub camera: CameraPose,
    pub projection: Projection,
}

impl FrameOutput {
    #[must_use]
    pub fn character_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.character_rot, self.character_pos)
    }

    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera.eye, self.camera.target, self.camera.up)
    }
}

/// Abstraction over whatever draws the frame.
pub trait FramePresenter {
    /// Viewport resize notification (new size in pixels).
    fn resize(&mut self, width: u32, height: u32);
    /// Consume one frame.
    fn present(&mut self, frame: &FrameOutput);
}
