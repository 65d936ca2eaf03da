use super::*;
use crate::assets::fonts::ApproxMetrics;

const C: Point = Point::new(512.0, 512.0);

fn curved(text: &str, align: TextAlign, rotation: f64) -> TextConfig {
    let mut cfg = TextConfig::new("t", text);
    cfg.curved = true;
    cfg.align = align;
    cfg.rotation = rotation;
    cfg.font_size = 40.0;
    cfg
}

#[test]
fn centered_pair_is_symmetric_about_twelve_oclock() {
    let glyphs = curved_layout(&curved("HI", TextAlign::Center, 0.0), C, 400.0, &mut ApproxMetrics);
    assert_eq!(glyphs.len(), 2);
    let (h, i) = (&glyphs[0], &glyphs[1]);
    assert!((h.angle + 90.0 + (i.angle + 90.0)).abs() < 1e-9, "{} {}", h.angle, i.angle);
    assert!(h.position.x < C.x && i.position.x > C.x);
    assert!(((C.x - h.position.x) - (i.position.x - C.x)).abs() < 1e-9);
    assert!((h.position.y - i.position.y).abs() < 1e-9);
    assert!(h.position.y < C.y);
}

#[test]
fn glyphs_stand_tangent_to_the_circle() {
    let glyphs = curved_layout(&curved("ABC", TextAlign::Left, 30.0), C, 300.0, &mut ApproxMetrics);
    for g in &glyphs {
        assert!((g.rotation - (g.angle + 90.0)).abs() < 1e-9);
        assert!((g.position.distance(C) - 300.0).abs() < 1e-9);
    }
}

#[test]
fn alignment_shifts_the_start_angle() {
    let arc = 20.0;
    assert_eq!(curved_span(TextAlign::Left, 0.0, arc), -90.0);
    assert_eq!(curved_span(TextAlign::Center, 0.0, arc), -100.0);
    assert_eq!(curved_span(TextAlign::Right, 10.0, arc), -100.0);
}

#[test]
fn right_aligned_text_ends_at_the_anchor() {
    let r = 250.0;
    let glyphs = curved_layout(&curved("AB", TextAlign::Right, 0.0), C, r, &mut ApproxMetrics);
    let last = glyphs.last().unwrap();
    let end = last.angle + rad_to_deg(last.width / r) / 2.0;
    assert!((end + 90.0).abs() < 1e-9);
}

#[test]
fn radius_sits_inside_the_border() {
    assert_eq!(curved_text_radius(512.0, 40.0, 40.0), 442.0);
    assert_eq!(curved_text_radius(10.0, 40.0, 40.0), 0.0);
    assert!(curved_layout(&curved("X", TextAlign::Center, 0.0), C, 0.0, &mut ApproxMetrics).is_empty());
}

#[test]
fn straight_box_follows_alignment() {
    assert_eq!(straight_box(TextAlign::Center, 100.0, 50.0), Rect::new(-50.0, -30.0, 50.0, 30.0));
    assert_eq!(straight_box(TextAlign::Left, 100.0, 50.0).x0, 0.0);
    assert_eq!(straight_box(TextAlign::Right, 100.0, 50.0).x1, 0.0);
}
