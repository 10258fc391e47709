//! Movement/camera/animation tuning loaded from data/config/tuning.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TuningCfg {
    pub movement: Option<MovementCfg>,
    pub camera: Option<CameraCfg>,
    pub animation: Option<AnimationCfg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovementCfg {
    /// Ground speed, units/sec.
    pub speed: Option<f32>,
    /// Fraction of the remaining turn closed per second, in (0, 1).
    pub turn_gain_per_s: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraCfg {
    pub boom_len: Option<f32>,
    pub min_boom: Option<f32>,
    pub max_boom: Option<f32>,
    pub zoom_step: Option<f32>,
    pub look_height: Option<f32>,
    /// "exponential" (frame-rate independent, default) or "per_frame".
    pub smoothing: Option<String>,
    /// Lerp fraction used when `smoothing = "per_frame"`.
    pub per_frame_factor: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationCfg {
    /// Cross-fade duration in seconds.
    pub fade_duration_s: Option<f32>,
}

pub fn load_default() -> Result<TuningCfg> {
    let path = crate::data_root().join("config/tuning.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<TuningCfg>(&txt).context("parse tuning TOML")?
    } else {
        TuningCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(v) = std::env::var("MOVE_SPEED") {
        let m = cfg.movement.get_or_insert(MovementCfg {
            speed: None,
            turn_gain_per_s: None,
        });
        m.speed = v.parse().ok();
    }
    if let Ok(v) = std::env::var("CAM_SMOOTHING") {
        let c = cfg.camera.get_or_insert(CameraCfg {
            boom_len: None,
            min_boom: None,
            max_boom: None,
            zoom_step: None,
            look_height: None,
            smoothing: None,
            per_frame_factor: None,
        });
        c.smoothing = Some(v);
    }
    if let Ok(v) = std::env::var("ANIM_FADE_S") {
        let a = cfg
            .animation
            .get_or_insert(AnimationCfg { fade_duration_s: None });
        a.fade_duration_s = v.parse().ok();
    }
    Ok(cfg)
}
