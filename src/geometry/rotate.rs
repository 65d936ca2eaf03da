use crate::foundation::core::Point;

/// Degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Radians to degrees.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Rotate `p` about `pivot` by `deg` degrees (clockwise on screen, since y points down).
pub fn rotate_point(p: Point, pivot: Point, deg: f64) -> Point {
    let (sin, cos) = deg_to_rad(deg).sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub(crate) fn normalize_deg(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d <= -180.0 {
        d += 360.0;
    } else if d > 180.0 {
        d -= 360.0;
    }
    d
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotate.rs"]
mod tests;
