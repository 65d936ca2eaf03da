use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn defaults_are_valid() {
    let cfg = EditorConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas_size, 1024);
    assert_eq!(cfg.gif_opts().unwrap().frame_count(), 60);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = EditorConfig::from_json(r##"{"canvas_size": 512, "export_background": "#000000"}"##)
        .unwrap();
    assert_eq!(cfg.canvas_size, 512);
    assert_eq!(cfg.export_background, Color::BLACK);
    assert_eq!(cfg.export_fps, 30);
}

#[test]
fn env_overrides_file_values() {
    let mut cfg = EditorConfig::from_json(r#"{"export_fps": 12}"#).unwrap();
    cfg.apply_env(env(&[
        ("HALOFRAME_EXPORT_FPS", "24"),
        ("HALOFRAME_EXPORT_SECS", "1.5"),
        ("HALOFRAME_ASSET_ROOT", "/srv/textures"),
    ]))
    .unwrap();
    assert_eq!(cfg.export_fps, 24);
    assert_eq!(cfg.export_duration_secs, 1.5);
    assert_eq!(cfg.asset_root, PathBuf::from("/srv/textures"));
    assert_eq!(cfg.gif_opts().unwrap().frame_count(), 36);
}

#[test]
fn unparsable_env_value_is_an_error() {
    let mut cfg = EditorConfig::default();
    assert!(cfg.apply_env(env(&[("HALOFRAME_CANVAS_SIZE", "big")])).is_err());
}

#[test]
fn validation_rejects_bad_values() {
    for bad in [
        EditorConfig {
            canvas_size: 0,
            ..EditorConfig::default()
        },
        EditorConfig {
            export_fps: 0,
            ..EditorConfig::default()
        },
        EditorConfig {
            gif_speed: 31,
            ..EditorConfig::default()
        },
        EditorConfig {
            export_duration_secs: f64::NAN,
            ..EditorConfig::default()
        },
    ] {
        assert!(bad.validate().is_err(), "{bad:?}");
    }
}
