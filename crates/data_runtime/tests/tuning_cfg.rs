use data_runtime::configs::tuning::TuningCfg;

#[test]
fn data_file_or_defaults_load() {
    let cfg = data_runtime::configs::tuning::load_default().expect("load");
    // Whether the workspace data file or compiled defaults were used, the
    // sections that exist must carry sane values.
    if let Some(m) = &cfg.movement {
        assert!(m.speed.unwrap_or(2.5) > 0.0);
    }
    if let Some(c) = &cfg.camera {
        let min = c.min_boom.unwrap_or(1.5);
        let max = c.max_boom.unwrap_or(10.0);
        assert!(min <= max);
    }
}

#[test]
fn tuning_toml_parses_nested_tables() {
    let txt = r#"
        [movement]
        speed = 3.5
        turn_gain_per_s = 0.99

        [camera]
        boom_len = 6.0
        smoothing = "per_frame"
        per_frame_factor = 0.05

        [animation]
        fade_duration_s = 0.3
    "#;
    let cfg: TuningCfg = toml::from_str(txt).expect("parse");
    assert_eq!(cfg.movement.as_ref().and_then(|m| m.speed), Some(3.5));
    assert_eq!(
        cfg.camera.as_ref().and_then(|c| c.smoothing.as_deref()),
        Some("per_frame")
    );
    assert_eq!(
        cfg.animation.as_ref().and_then(|a| a.fade_duration_s),
        Some(0.3)
    );
}
