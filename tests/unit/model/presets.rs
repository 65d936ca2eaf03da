use super::*;
use std::collections::HashSet;

#[test]
fn ids_are_unique() {
    let ids: HashSet<&str> = presets().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), presets().len());
}

#[test]
fn every_shape_type_has_a_preset() {
    for shape in ShapeType::ALL {
        assert!(
            presets().iter().any(|p| p.shape_type == shape),
            "missing preset for {shape:?}"
        );
    }
}

#[test]
fn two_color_presets_carry_color2() {
    for p in presets() {
        if p.shape_type.uses_color2() {
            assert!(p.color2.is_some(), "{} lacks color2", p.id);
        }
        assert_eq!(p.width, p.clamped_width());
    }
}

#[test]
fn lookup_and_default() {
    assert_eq!(default_preset().id, "classic");
    assert_eq!(preset("cyber-neon").map(|p| p.shape_type), Some(ShapeType::Neon));
    assert!(preset("nope").is_none());
    assert!(preset("textured").and_then(|p| p.image_url.as_deref()).is_some());
}
