use super::*;
use crate::assets::decode::PreparedImage;
use crate::assets::fonts::ApproxMetrics;

fn setup() -> (Editor, InteractionController) {
    let canvas = Canvas::default();
    (Editor::new(canvas), InteractionController::new(canvas))
}

#[test]
fn dragging_a_sticker_preserves_the_grab_point() {
    let (mut e, mut c) = setup();
    let id = e.add_sticker("star");
    e.deselect();

    let hit = c.pointer_down(&mut e, Point::new(512.0, 512.0), &mut ApproxMetrics);
    assert_eq!(hit, Some(HitTarget::Sticker(id.clone())));
    assert_eq!(e.mode(), InteractionMode::Drag);
    assert!(c.pointer_move(&mut e, Point::new(612.0, 512.0)));
    c.pointer_up(&mut e);

    let s = &e.stickers()[0];
    assert_eq!((s.x, s.y), (100.0, 0.0));
    assert_eq!(e.selection(), &Selection::Sticker(id));
    assert_eq!(e.mode(), InteractionMode::None);
}

#[test]
fn off_center_grab_keeps_its_offset() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    c.pointer_down(&mut e, Point::new(530.0, 520.0), &mut ApproxMetrics);
    c.pointer_move(&mut e, Point::new(630.0, 420.0));
    let s = &e.stickers()[0];
    assert!((s.x - 100.0).abs() < 1e-9 && (s.y + 100.0).abs() < 1e-9);
}

#[test]
fn display_scaling_maps_pointer_into_canvas_space() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    c.set_display(Rect::new(0.0, 0.0, 512.0, 512.0));
    c.pointer_down(&mut e, Point::new(256.0, 256.0), &mut ApproxMetrics);
    c.pointer_move(&mut e, Point::new(306.0, 256.0));
    assert_eq!(e.stickers()[0].x, 100.0);
}

#[test]
fn corner_handle_scales_by_distance_over_half_diagonal() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    let half = c.metrics().sticker_half(1.0);
    let down = c.pointer_down(&mut e, Point::new(512.0 + half, 512.0 + half), &mut ApproxMetrics);
    assert!(matches!(down, Some(HitTarget::Handle { .. })));
    assert_eq!(e.mode(), InteractionMode::Scale);

    c.pointer_move(&mut e, Point::new(512.0 + 2.0 * half, 512.0 + 2.0 * half));
    assert!((e.stickers()[0].scale - 2.0).abs() < 1e-9);

    c.pointer_move(&mut e, Point::new(513.0, 512.0));
    assert_eq!(e.stickers()[0].scale, crate::model::layers::MIN_LAYER_SCALE);
}

#[test]
fn rotate_handle_tracks_the_pointer() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    let m = *c.metrics();
    let knob = Point::new(512.0, 512.0 - m.sticker_half(1.0) - m.rotate_offset);
    c.pointer_down(&mut e, knob, &mut ApproxMetrics);
    assert_eq!(e.mode(), InteractionMode::Rotate);

    c.pointer_move(&mut e, Point::new(700.0, 512.0));
    assert!((e.stickers()[0].rotation - 90.0).abs() < 1e-9);
    c.pointer_move(&mut e, Point::new(512.0, 700.0));
    assert!((e.stickers()[0].rotation - 180.0).abs() < 1e-9);
}

#[test]
fn empty_press_pans_photo_when_loaded() {
    let (mut e, mut c) = setup();
    e.set_photo(PreparedImage::from_premul(2, 2, vec![255; 16]).unwrap());
    let hit = c.pointer_down(&mut e, Point::new(100.0, 100.0), &mut ApproxMetrics);
    assert_eq!(hit, Some(HitTarget::Photo));
    assert_eq!(e.mode(), InteractionMode::Pan);
    c.pointer_move(&mut e, Point::new(-900.0, 100.0));
    assert_eq!(e.transform().position, Vec2::new(-1000.0, 0.0));
}

#[test]
fn empty_press_without_photo_deselects() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    let hit = c.pointer_down(&mut e, Point::new(100.0, 100.0), &mut ApproxMetrics);
    assert_eq!(hit, Some(HitTarget::Nothing));
    assert_eq!(e.selection(), &Selection::None);
    assert!(!c.pointer_move(&mut e, Point::new(200.0, 200.0)));
}

#[test]
fn second_press_during_a_gesture_is_ignored() {
    let (mut e, mut c) = setup();
    e.add_sticker("star");
    c.pointer_down(&mut e, Point::new(512.0, 512.0), &mut ApproxMetrics);
    assert_eq!(
        c.pointer_down(&mut e, Point::new(100.0, 100.0), &mut ApproxMetrics),
        None
    );
    assert_eq!(e.mode(), InteractionMode::Drag);
}

#[test]
fn dragging_curved_text_slides_it_along_the_circle() {
    let (mut e, mut c) = setup();
    let id = e.add_text("HELLO");
    e.update_text(
        &id,
        &crate::editor::state::TextPatch {
            curved: Some(true),
            ..Default::default()
        },
    );
    let (sw, _) = crate::render::frames::stroke_metrics(e.frame().clamped_width(), 512.0);
    let r = crate::render::text::curved_text_radius(512.0, sw, 48.0);
    let hit = c.pointer_down(&mut e, Point::new(512.0, 512.0 - r), &mut ApproxMetrics);
    assert_eq!(hit, Some(HitTarget::Text(id)));
    c.pointer_move(&mut e, Point::new(512.0 + r, 512.0));
    assert!((e.texts()[0].rotation - 90.0).abs() < 1e-9);
}
