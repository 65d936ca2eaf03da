//! Closed outlines shared by clipping and stroking.

use kurbo::Shape;

use crate::foundation::core::{BezPath, Point};

/// Sample count for the parametric heart.
pub(crate) const HEART_SAMPLES: usize = 128;

/// Circle of radius `r`.
pub fn circle_path(center: Point, r: f64) -> BezPath {
    kurbo::Circle::new(center, r.max(0.0)).to_path(0.01)
}

/// Five-pointed star with outer radius `r`, inner radius `r / 2`, first point straight up.
pub fn star_path(center: Point, r: f64) -> BezPath {
    polygon(star_vertices(center, r))
}

/// Regular hexagon with circumradius `r`, pointy top.
pub fn hexagon_path(center: Point, r: f64) -> BezPath {
    polygon(hexagon_vertices(center, r))
}

/// Classic parametric heart `x = 16 sin^3 t`, `y = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)`,
/// scaled by `r / 17` so its widest extent fits the circle of radius `r`.
pub fn heart_path(center: Point, r: f64) -> BezPath {
    polygon(
        (0..HEART_SAMPLES)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / HEART_SAMPLES as f64;
                heart_point(center, r, t)
            })
            .collect(),
    )
}

pub(crate) fn heart_point(center: Point, r: f64, t: f64) -> Point {
    let s = r / 17.0;
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Point::new(center.x + x * s, center.y + y * s)
}

pub(crate) fn star_vertices(center: Point, r: f64) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { r } else { r * 0.5 };
            polar(center, radius, -90.0 + 36.0 * f64::from(i))
        })
        .collect()
}

pub(crate) fn hexagon_vertices(center: Point, r: f64) -> Vec<Point> {
    (0..6)
        .map(|i| polar(center, r, -90.0 + 60.0 * f64::from(i)))
        .collect()
}

/// Point at `deg` degrees clockwise from 3 o'clock (canvas y grows downward).
pub(crate) fn polar(center: Point, r: f64, deg: f64) -> Point {
    let a = deg.to_radians();
    Point::new(center.x + r * a.cos(), center.y + r * a.sin())
}

fn polygon(points: Vec<Point>) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.into_iter();
    if let Some(first) = it.next() {
        path.move_to(first);
        for p in it {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../../tests/unit/render/frames/paths.rs"]
mod tests;
