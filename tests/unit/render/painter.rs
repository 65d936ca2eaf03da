use super::*;
use crate::render::plan::LayerKind;

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    use kurbo::Shape;
    kurbo::Rect::new(x0, y0, x1, y1).to_path(0.1)
}

#[test]
fn solid_fill_covers_its_pixels() {
    let mut plan = DrawPlan::new(16);
    plan.push(
        LayerKind::Background,
        DrawOp::fill(rect_path(0.0, 0.0, 8.0, 16.0), Paint::Solid(Color::rgb(255, 0, 0))),
    );
    let mut surface = Surface::new(16);
    Painter::new().paint(&plan, &mut surface).unwrap();
    assert_eq!(surface.pixel(2, 8), [255, 0, 0, 255]);
    assert_eq!(surface.pixel(12, 8)[3], 0);
}

#[test]
fn clip_limits_later_fills() {
    let mut plan = DrawPlan::new(16);
    plan.push(LayerKind::Photo, DrawOp::PushClip {
        path: rect_path(0.0, 0.0, 16.0, 4.0),
    });
    plan.push(
        LayerKind::Photo,
        DrawOp::fill(rect_path(0.0, 0.0, 16.0, 16.0), Paint::Solid(Color::rgb(0, 0, 255))),
    );
    plan.push(LayerKind::Photo, DrawOp::PopClip);
    let mut surface = Surface::new(16);
    Painter::new().paint(&plan, &mut surface).unwrap();
    assert_eq!(surface.pixel(8, 1), [0, 0, 255, 255]);
    assert_eq!(surface.pixel(8, 10)[3], 0);
}

#[test]
fn unbalanced_pop_is_an_error() {
    let mut plan = DrawPlan::new(4);
    plan.push(LayerKind::Frame, DrawOp::PopClip);
    assert!(Painter::new().paint(&plan, &mut Surface::new(4)).is_err());
}

#[test]
fn blurred_group_spreads_beyond_its_geometry() {
    let mut plan = DrawPlan::new(32);
    plan.push(LayerKind::Frame, DrawOp::Blurred {
        radius: 4,
        sigma: 2.0,
        ops: vec![DrawOp::fill(
            rect_path(12.0, 12.0, 20.0, 20.0),
            Paint::Solid(Color::WHITE),
        )],
    });
    let mut surface = Surface::new(32);
    Painter::new().paint(&plan, &mut surface).unwrap();
    let halo = surface.pixel(10, 16)[3];
    assert!(halo > 0 && halo < 255, "halo alpha {halo}");
}

#[test]
fn repainting_is_deterministic() {
    let mut plan = DrawPlan::new(24);
    plan.push(
        LayerKind::Frame,
        DrawOp::stroke(
            rect_path(4.0, 4.0, 20.0, 20.0),
            StrokeStyle::new(3.0),
            Paint::Linear {
                start: Point::new(0.0, 0.0),
                end: Point::new(24.0, 24.0),
                from: Color::rgb(255, 0, 0),
                to: Color::rgb(0, 0, 255),
            },
        ),
    );
    let mut painter = Painter::new();
    let mut a = Surface::new(24);
    let mut b = Surface::new(24);
    painter.paint(&plan, &mut a).unwrap();
    painter.paint(&plan, &mut b).unwrap();
    assert_eq!(a, b);
    assert!(a.data().iter().any(|&v| v != 0));
}
