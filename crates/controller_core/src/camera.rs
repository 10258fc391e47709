//! Chase camera: orbit input, boom zoom, smoothed follow, look-at framing.

use glam::Vec3;

/// Orbit input tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    /// Polar clamp band measured from +Y, radians.
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_polar: 45f32.to_radians(),
            max_polar: 100f32.to_radians(),
        }
    }
}

/// User-steered orbit: azimuth wraps freely, polar stays in the clamp band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAngles {
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for OrbitAngles {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: 75f32.to_radians(),
        }
    }
}

/// Apply a drained pointer delta to the orbit. Out-of-band polar requests
/// are clamped, never rejected.
pub fn apply_mouse_delta(cfg: &OrbitConfig, orbit: &mut OrbitAngles, dx: f32, dy: f32) {
    let to_rad = cfg.sensitivity_deg_per_count.to_radians();
    orbit.azimuth = wrap_angle(orbit.azimuth + dx * to_rad);
    let dy = if cfg.invert_y { -dy } else { dy };
    orbit.polar = (orbit.polar + dy * to_rad).clamp(cfg.min_polar, cfg.max_polar);
}

/// Eye-position smoothing flavor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Frame-rate independent fraction `1 - 0.01^dt`.
    Exponential,
    /// Fixed fraction applied per frame (legacy damping behavior).
    PerFrame(f32),
}

/// Rig shape and follow behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRigCfg {
    pub boom_len: f32,
    pub min_boom: f32,
    pub max_boom: f32,
    /// Boom change per scroll count.
    pub zoom_step: f32,
    /// Vertical offset of the look-at point above the character.
    pub look_height: f32,
    pub smoothing: Smoothing,
}

impl Default for CameraRigCfg {
    fn default() -> Self {
        Self {
            boom_len: 4.0,
            min_boom: 1.5,
            max_boom: 10.0,
            zoom_step: 0.5,
            look_height: 1.0,
            smoothing: Smoothing::Exponential,
        }
    }
}

/// Pose handed to the presenter. Orientation is derived from `target` every
/// frame, never interpolated, so only the eye position lags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct ChaseCamera {
    cfg: CameraRigCfg,
    orbit: OrbitAngles,
    boom_len: f32,
    eye: Vec3,
    initialized: bool,
}

impl ChaseCamera {
    #[must_use]
    pub fn new(cfg: CameraRigCfg) -> Self {
        Self {
            cfg,
            orbit: OrbitAngles::default(),
            boom_len: cfg.boom_len.clamp(cfg.min_boom, cfg.max_boom),
            eye: Vec3::ZERO,
            initialized: false,
        }
    }

    #[must_use]
    pub fn orbit(&self) -> OrbitAngles {
        self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitAngles {
        &mut self.orbit
    }

    #[must_use]
    pub fn boom_len(&self) -> f32 {
        self.boom_len
    }

    /// Wheel zoom: positive steps move the camera closer.
    pub fn zoom(&mut self, steps: f32) {
        self.boom_len =
            (self.boom_len - steps * self.cfg.zoom_step).clamp(self.cfg.min_boom, self.cfg.max_boom);
    }

    /// Horizontal camera forward used for movement mapping.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (s, c) = self.orbit.azimuth.sin_cos();
        -Vec3::new(s, 0.0, c)
    }

    /// World-space boom offset for the current orbit.
    fn offset(&self) -> Vec3 {
        let (sa, ca) = self.orbit.azimuth.sin_cos();
        let (sp, cp) = self.orbit.polar.sin_cos();
        Vec3::new(sp * sa, cp, sp * ca) * self.boom_len
    }

    /// Advance the follow smoothing toward the ideal pose for this frame.
    ///
    /// The first call snaps to the ideal eye so a session does not swoop in
    /// from the origin.
    pub fn advance(&mut self, dt: f32, character_pos: Vec3) -> CameraPose {
        let ideal = character_pos + self.offset();
        if self.initialized {
            let t = match self.cfg.smoothing {
                Smoothing::Exponential => 1.0 - 0.01f32.powf(dt.max(0.0)),
                Smoothing::PerFrame(f) => f.clamp(0.0, 1.0),
            };
            self.eye = self.eye.lerp(ideal, t);
        } else {
            self.eye = ideal;
            self.initialized = true;
        }
        CameraPose {
            eye: self.eye,
            target: character_pos + Vec3::Y * self.cfg.look_height,
            up: Vec3::Y,
        }
    }
}

pub(crate) fn wrap_angle(a: f32) -> f32 {
    let mut x = a;
    while x > std::f32::consts::PI {
        x -= std::f32::consts::TAU;
    }
    while x < -std::f32::consts::PI {
        x += std::f32::consts::TAU;
    }
    x
}
