//! data_runtime: config schemas and loaders for the controller workspace.
//!
//! TOML files live under `data/config/`; absent files fall back to compiled
//! defaults, and individual fields accept env-var overrides for quick
//! tuning.

pub mod configs {
    pub mod input_camera;
    pub mod pc_animations;
    pub mod tuning;
}

use std::path::PathBuf;

pub(crate) fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
