//! Input/orbit controller configuration loaded from data/config/input_camera.toml.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InputCameraCfg {
    pub sensitivity_deg_per_count: Option<f32>,
    pub invert_y: Option<bool>,
    /// Polar clamp band, degrees from the vertical axis.
    pub min_polar_deg: Option<f32>,
    pub max_polar_deg: Option<f32>,
}

impl Default for InputCameraCfg {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: Some(0.15),
            invert_y: Some(false),
            min_polar_deg: Some(45.0),
            max_polar_deg: Some(100.0),
        }
    }
}

pub fn load_default() -> Result<InputCameraCfg> {
    let path = crate::data_root().join("config/input_camera.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<InputCameraCfg>(&txt).context("parse input_camera TOML")?
    } else {
        InputCameraCfg::default()
    };
    // Env overrides for quick tuning (optional)
    if let Ok(s) = std::env::var("MOUSE_SENS_DEG") {
        cfg.sensitivity_deg_per_count = s.parse().ok();
    }
    if let Ok(v) = std::env::var("INVERT_Y") {
        cfg.invert_y = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MIN_POLAR_DEG") {
        cfg.min_polar_deg = v.parse().ok();
    }
    if let Ok(v) = std::env::var("MAX_POLAR_DEG") {
        cfg.max_polar_deg = v.parse().ok();
    }
    Ok(cfg)
}
