use super::*;
use crate::model::frame::ShapeType;
use crate::model::layers::MIN_FONT_SIZE;

fn solid_photo(w: u32, h: u32, px: [u8; 4]) -> PreparedImage {
    let bytes = px.repeat((w * h) as usize);
    PreparedImage::from_premul(w, h, bytes).unwrap()
}

#[test]
fn fresh_editor_starts_from_default_preset() {
    let e = Editor::default();
    assert_eq!(e.frame(), &default_preset());
    assert!(!e.can_undo() && !e.can_redo());
    assert_eq!(e.selection(), &Selection::None);
    assert_eq!(e.export_status(), &ExportStatus::Idle);
}

#[test]
fn added_layers_get_unique_ids_and_are_selected() {
    let mut e = Editor::default();
    let a = e.add_sticker("star");
    let b = e.add_sticker("heart");
    let t = e.add_text("hello");
    assert_ne!(a, b);
    assert_eq!(e.selection(), &Selection::Text(t.clone()));
    assert_eq!(e.stickers().len(), 2);
    assert_eq!(e.texts()[0].text, "hello");
}

#[test]
fn remove_selected_clears_selection() {
    let mut e = Editor::default();
    let a = e.add_sticker("star");
    e.add_sticker("heart");
    e.select(Selection::Sticker(a.clone()));
    assert!(e.remove_selected());
    assert_eq!(e.stickers().len(), 1);
    assert!(e.stickers().iter().all(|s| s.id != a));
    assert_eq!(e.selection(), &Selection::None);
    assert!(!e.remove_selected());
}

#[test]
fn z_order_moves_are_bounded() {
    let mut e = Editor::default();
    let a = e.add_sticker("star");
    let b = e.add_sticker("heart");

    e.select(Selection::Sticker(a.clone()));
    assert!(!e.send_backward());
    assert!(e.bring_forward());
    assert_eq!(e.stickers()[1].id, a);
    assert!(!e.bring_forward());
    assert_eq!(e.stickers()[0].id, b);
}

#[test]
fn selecting_an_unknown_layer_clears_selection() {
    let mut e = Editor::default();
    e.add_sticker("star");
    e.select(Selection::Sticker("nope".to_owned()));
    assert_eq!(e.selection(), &Selection::None);
}

#[test]
fn unknown_preset_is_rejected_without_history_entry() {
    let mut e = Editor::default();
    assert!(e.select_preset("does-not-exist").is_err());
    assert!(!e.can_undo());
    e.select_preset("cyber-neon").unwrap();
    assert_eq!(e.frame().shape_type, ShapeType::Neon);
    assert!(e.can_undo());
}

#[test]
fn customization_is_undoable_and_redoable() {
    let mut e = Editor::default();
    let before = e.frame().clone();
    e.customize(&FramePatch {
        width: Some(30.0),
        ..FramePatch::default()
    });
    assert_eq!(e.frame().id, "custom");
    assert_eq!(e.frame().width, 30.0);

    assert!(e.undo());
    assert_eq!(e.frame(), &before);
    assert!(e.redo());
    assert_eq!(e.frame().width, 30.0);
    assert!(!e.redo());
}

#[test]
fn palette_without_photo_queues_a_notice() {
    let mut e = Editor::default();
    assert!(e.extract_palette().is_none());
    assert!(matches!(e.notices(), [Notice::PaletteFailed(_)]));
    assert_eq!(e.take_notices().len(), 1);
    assert!(e.notices().is_empty());
}

#[test]
fn palette_of_a_flat_photo_is_that_color() {
    let mut e = Editor::default();
    e.set_photo(solid_photo(8, 8, [200, 40, 40, 255]));
    let colors = e.extract_palette().unwrap();
    assert_eq!(colors, vec![Color::rgb(200, 40, 40)]);
}

#[test]
fn palette_colors_apply_to_either_slot() {
    let mut e = Editor::default();
    e.apply_palette_color(1, "#ff0000").unwrap();
    e.apply_palette_color(2, "#00ff00").unwrap();
    assert_eq!(e.frame().color1, Color::rgb(255, 0, 0));
    assert_eq!(e.frame().color2, Some(Color::rgb(0, 255, 0)));
    assert!(e.apply_palette_color(3, "#00ff00").is_err());
    assert!(e.apply_palette_color(1, "zzz").is_err());
}

#[test]
fn undecodable_photo_clears_photo_and_notifies() {
    let mut e = Editor::default();
    e.set_photo(solid_photo(4, 4, [0, 0, 0, 255]));
    assert!(e.load_photo(b"not an image").is_err());
    assert!(e.photo().is_none());
    assert!(matches!(e.notices(), [Notice::PhotoDecodeFailed(_)]));
}

#[test]
fn auto_fit_needs_a_photo() {
    let mut e = Editor::default();
    assert!(!e.auto_fit());
    e.set_photo(solid_photo(200, 100, [0, 0, 0, 255]));
    assert!(e.auto_fit());
    // Contain over cover for a 2:1 photo is 0.5.
    assert!((e.transform().scale - 0.5).abs() < 1e-9);
}

#[test]
fn text_font_size_is_floored() {
    let mut e = Editor::default();
    let id = e.add_text("hi");
    assert!(e.update_text(
        &id,
        &TextPatch {
            font_size: Some(-3.0),
            curved: Some(true),
            ..TextPatch::default()
        }
    ));
    let t = &e.texts()[0];
    assert_eq!(t.font_size, MIN_FONT_SIZE);
    assert!(t.curved);
    assert!(!e.update_text("missing", &TextPatch::default()));
}

#[test]
fn replaced_layers_do_not_collide_with_new_ids() {
    let mut e = Editor::default();
    e.replace_layers(vec![StickerConfig::new("sticker-7", "star")], Vec::new());
    let id = e.add_sticker("heart");
    assert_eq!(id, "sticker-8");
}

#[test]
fn scene_hides_selection_while_recording() {
    let mut e = Editor::default();
    e.add_sticker("star");
    assert!(e.scene().show_selection);
    e.set_recording(true);
    assert!(!e.scene().show_selection);
}

#[test]
fn reset_returns_to_a_fresh_editor() {
    let mut e = Editor::new(Canvas::new(256).unwrap());
    e.add_sticker("star");
    e.select_preset("heart").unwrap();
    e.reset();
    assert!(e.stickers().is_empty());
    assert!(!e.can_undo());
    assert_eq!(e.canvas().size, 256);
}

#[test]
fn notices_render_readable_messages() {
    let n = Notice::DocumentRepaired(vec!["frameConfig.width".to_owned()]);
    assert_eq!(n.to_string(), "some design fields were reset: frameConfig.width");
}
