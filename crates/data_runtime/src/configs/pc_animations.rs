//! PC animation clip entries: exact names plus loop lengths, loaded from
//! data/config/pc_animations.toml with optional env overrides for the names.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClipEntry {
    pub name: String,
    pub duration_s: f32,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PcAnimCfg {
    pub idle: Option<ClipEntry>,
    pub run: Option<ClipEntry>,
}

pub fn load_default() -> Result<PcAnimCfg> {
    let path = crate::data_root().join("config/pc_animations.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<PcAnimCfg>(&txt).context("parse pc_animations TOML")?
    } else {
        PcAnimCfg::default()
    };
    // Env overrides (names only; durations come from the data files)
    if let Ok(v) = std::env::var("PC_ANIM_IDLE") {
        if let Some(e) = cfg.idle.as_mut() {
            e.name = v;
        }
    }
    if let Ok(v) = std::env::var("PC_ANIM_RUN") {
        if let Some(e) = cfg.run.as_mut() {
            e.name = v;
        }
    }
    Ok(cfg)
}
