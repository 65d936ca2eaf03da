use super::*;
use kurbo::{ParamCurve, PathEl};

const C: Point = Point::new(512.0, 512.0);

fn is_closed(path: &BezPath) -> bool {
    matches!(path.elements().last(), Some(PathEl::ClosePath))
}

#[test]
fn circle_boundary_sits_at_radius() {
    let path = circle_path(C, 300.0);
    assert!(is_closed(&path));
    for seg in path.segments() {
        for k in 0..=8 {
            let p = seg.eval(f64::from(k) / 8.0);
            assert!((p.distance(C) - 300.0).abs() < 0.5, "{p:?}");
        }
    }
}

#[test]
fn star_points_alternate_outer_and_inner_radius() {
    let v = star_vertices(C, 400.0);
    assert_eq!(v.len(), 10);
    for (i, p) in v.iter().enumerate() {
        let want = if i % 2 == 0 { 400.0 } else { 200.0 };
        assert!((p.distance(C) - want).abs() < 1e-9);
    }
    assert!((v[0].x - C.x).abs() < 1e-9 && v[0].y < C.y);
    assert!(is_closed(&star_path(C, 400.0)));
}

#[test]
fn hexagon_vertices_on_circumcircle_with_pointy_top() {
    let v = hexagon_vertices(C, 250.0);
    assert_eq!(v.len(), 6);
    for p in &v {
        assert!((p.distance(C) - 250.0).abs() < 1e-9);
    }
    assert!((v[0] - Point::new(512.0, 262.0)).hypot() < 1e-9);
    assert!(is_closed(&hexagon_path(C, 250.0)));
}

#[test]
fn heart_matches_its_parametric_definition() {
    let path = heart_path(C, 340.0);
    assert!(is_closed(&path));
    let pts: Vec<Point> = path
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pts.len(), HEART_SAMPLES);
    // t = pi/2: x = 16, y = -(0 + 5 - 0 - 1) = -4.
    let quarter = pts[HEART_SAMPLES / 4];
    let s = 340.0 / 17.0;
    assert!((quarter.x - (512.0 + 16.0 * s)).abs() < 1e-6);
    assert!((quarter.y - (512.0 - 4.0 * s)).abs() < 1e-6);
    // Bottom tip at t = pi: y = 17 * s, exactly the radius.
    let tip = pts[HEART_SAMPLES / 2];
    assert!((tip.distance(C) - 340.0).abs() < 1e-6);
}
