use super::*;
use serde_json::json;

fn solid() -> FrameConfig {
    FrameConfig::new("classic", ShapeType::Solid, "Classic", Color::WHITE, None, 12.0)
}

#[test]
fn shape_type_uses_screaming_case_on_the_wire() {
    assert_eq!(
        serde_json::to_value(ShapeType::CustomImage).unwrap(),
        json!("CUSTOM_IMAGE")
    );
    let s: ShapeType = serde_json::from_value(json!("NEON")).unwrap();
    assert_eq!(s, ShapeType::Neon);
}

#[test]
fn width_is_clamped_on_construction_and_patch() {
    let f = FrameConfig::new("x", ShapeType::Solid, "x", Color::WHITE, None, 500.0);
    assert_eq!(f.width, MAX_FRAME_WIDTH);

    let p = f.apply(&FramePatch {
        width: Some(-3.0),
        ..FramePatch::default()
    });
    assert_eq!(p.width, MIN_FRAME_WIDTH);

    let nan = f.apply(&FramePatch {
        width: Some(f64::NAN),
        ..FramePatch::default()
    });
    assert_eq!(nan.width, MIN_FRAME_WIDTH);
}

#[test]
fn switching_into_two_color_style_supplies_color2() {
    let next = solid().apply(&FramePatch {
        shape_type: Some(ShapeType::Neon),
        ..FramePatch::default()
    });
    assert_eq!(next.shape_type, ShapeType::Neon);
    assert_eq!(next.color2, ShapeType::Neon.default_color2());
    assert_eq!(next.id, "custom");
}

#[test]
fn explicit_color2_is_kept_when_switching() {
    let next = solid().apply(&FramePatch {
        shape_type: Some(ShapeType::Gradient),
        color2: Some(Color::rgb(1, 2, 3)),
        ..FramePatch::default()
    });
    assert_eq!(next.color2, Some(Color::rgb(1, 2, 3)));
}

#[test]
fn apply_does_not_mutate_the_source() {
    let base = solid();
    let _ = base.apply(&FramePatch {
        color1: Some(Color::BLACK),
        ..FramePatch::default()
    });
    assert_eq!(base, solid());
}

#[test]
fn config_round_trips_with_camel_case_fields() {
    let f = FrameConfig::new(
        "tex",
        ShapeType::CustomImage,
        "Texture",
        Color::rgb(1, 2, 3),
        Some(Color::rgb(4, 5, 6)),
        20.0,
    )
    .with_image_url("textures/wood.png");
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["shapeType"], json!("CUSTOM_IMAGE"));
    assert_eq!(v["imageUrl"], json!("textures/wood.png"));
    let back: FrameConfig = serde_json::from_value(v).unwrap();
    assert_eq!(back, f);
}

#[test]
fn only_star_heart_hexagon_have_custom_paths() {
    let custom: Vec<_> = ShapeType::ALL
        .iter()
        .filter(|s| !s.is_circular())
        .copied()
        .collect();
    assert_eq!(custom, vec![ShapeType::Star, ShapeType::Heart, ShapeType::Hexagon]);
}
