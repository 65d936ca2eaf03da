use serde_json::json;

use super::*;
use crate::foundation::color::Color;
use crate::model::frame::ShapeType;
use crate::model::layers::MIN_FONT_SIZE;

#[test]
fn serializes_stickers_inside_frame_config() {
    let mut doc = DesignDocument::default();
    doc.stickers.push(StickerConfig::new("s1", "heart"));
    doc.text_layers.push(TextConfig::new("t1", "hi"));
    let v: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(v["frameConfig"]["shapeType"], json!("SOLID"));
    assert_eq!(v["frameConfig"]["stickers"][0]["icon"], json!("heart"));
    assert_eq!(v["textLayers"][0]["fontSize"], json!(48.0));
    assert_eq!(DesignDocument::from_json(&doc.to_json().unwrap()).unwrap(), doc);
}

#[test]
fn lenient_load_defaults_missing_fields() {
    let (doc, repaired) = DesignDocument::from_json_lenient(r#"{"textLayers": []}"#);
    assert_eq!(doc.frame, default_preset());
    assert!(doc.stickers.is_empty());
    assert!(repaired.is_empty());
}

#[test]
fn lenient_load_repairs_bad_fields_and_drops_bad_layers() {
    let json = json!({
        "frameConfig": {
            "id": "mine",
            "shapeType": "NEON",
            "color1": "not-a-color",
            "width": 400,
            "stickers": [
                {"id": "ok", "icon": "star", "x": 10, "scale": 0.01},
                {"icon": 7}
            ]
        },
        "textLayers": "nope"
    })
    .to_string();
    let (doc, repaired) = DesignDocument::from_json_lenient(&json);

    assert_eq!(doc.frame.id, "mine");
    assert_eq!(doc.frame.shape_type, ShapeType::Neon);
    assert_eq!(doc.frame.color1, default_preset().color1);
    assert_eq!(doc.frame.color2, ShapeType::Neon.default_color2());
    assert_eq!(doc.frame.width, 50.0);
    assert_eq!(doc.stickers.len(), 1);
    assert_eq!(doc.stickers[0].scale, 0.2);
    assert!(doc.text_layers.is_empty());
    assert!(repaired.contains(&"frameConfig.color1".to_owned()));
    assert!(repaired.contains(&"frameConfig.stickers[1]".to_owned()));
    assert!(repaired.contains(&"textLayers".to_owned()));
}

#[test]
fn lenient_load_floors_font_size() {
    let json = json!({
        "textLayers": [
            {"id": "zero", "text": "a", "fontSize": 0},
            {"id": "neg", "text": "b", "fontSize": -12.5},
            {"id": "ok", "text": "c", "fontSize": 30}
        ]
    })
    .to_string();
    let (doc, repaired) = DesignDocument::from_json_lenient(&json);
    let sizes: Vec<f64> = doc.text_layers.iter().map(|t| t.font_size).collect();
    assert_eq!(sizes, vec![MIN_FONT_SIZE, MIN_FONT_SIZE, 30.0]);
    assert!(repaired.is_empty());
}

#[test]
fn lenient_load_accepts_top_level_stickers() {
    let json = json!({
        "frameConfig": {"shapeType": "STAR", "color1": "#ff0000"},
        "stickers": [{"id": "a", "icon": "moon"}]
    })
    .to_string();
    let (doc, _) = DesignDocument::from_json_lenient(&json);
    assert_eq!(doc.frame.shape_type, ShapeType::Star);
    assert_eq!(doc.frame.color1, Color::rgb(255, 0, 0));
    assert_eq!(doc.stickers[0].icon, "moon");
}

#[test]
fn garbage_yields_the_default_document() {
    for junk in ["", "[1,2]", "{not json", "42"] {
        let (doc, repaired) = DesignDocument::from_json_lenient(junk);
        assert_eq!(doc, DesignDocument::default());
        assert_eq!(repaired, vec!["$".to_owned()]);
    }
}

#[test]
fn strict_parse_rejects_bad_shape() {
    assert!(DesignDocument::from_json(r#"{"frameConfig": {"shapeType": "BLOB"}}"#).is_err());
}

#[test]
fn apply_to_replaces_layers_and_records_history() {
    let mut editor = Editor::default();
    editor.add_sticker("sun");
    let mut doc = DesignDocument::default();
    doc.stickers.push(StickerConfig::new("sticker-9", "moon"));
    doc.apply_to(&mut editor);
    assert_eq!(editor.stickers().len(), 1);
    assert!(editor.can_undo());
    let next = editor.add_sticker("star");
    assert_eq!(next, "sticker-10");
}
