use crate::assets::fonts::TextMetrics;
use crate::foundation::core::{Point, Rect};
use crate::geometry::rotate::{deg_to_rad, rad_to_deg};
use crate::model::layers::{TextAlign, TextConfig};

/// Fraction of the font size that a glyph's box extends above and below its baseline center.
pub(crate) const LINE_HEIGHT_EM: f64 = 1.2;

/// One character placed on the circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvedGlyph {
    /// The character.
    pub ch: char,
    /// Advance width.
    pub width: f64,
    /// Mid-angle in degrees, clockwise from 3 o'clock.
    pub angle: f64,
    /// Glyph center on the circle.
    pub position: Point,
    /// Glyph rotation in degrees so it stands upright, tangent to the circle.
    pub rotation: f64,
}

/// Radius of the circle curved text runs along: just inside the border.
pub fn curved_text_radius(radius: f64, stroke_width: f64, font_size: f64) -> f64 {
    (radius - stroke_width - 0.75 * font_size).max(0.0)
}

/// Start angle (degrees, clockwise from 3 o'clock) and total arc (degrees) of a curved layer.
///
/// Rotation 0 anchors the text at 12 o'clock. Center alignment centers the arc on the anchor,
/// right alignment ends it there, left alignment starts it there.
pub(crate) fn curved_span(align: TextAlign, rotation: f64, arc_deg: f64) -> f64 {
    let anchor = rotation - 90.0;
    match align {
        TextAlign::Left => anchor,
        TextAlign::Center => anchor - arc_deg / 2.0,
        TextAlign::Right => anchor - arc_deg,
    }
}

/// Lay `cfg.text` out along the circle of `text_radius` around `center`.
pub fn curved_layout(
    cfg: &TextConfig,
    center: Point,
    text_radius: f64,
    metrics: &mut dyn TextMetrics,
) -> Vec<CurvedGlyph> {
    if text_radius <= 0.0 {
        return Vec::new();
    }
    let widths: Vec<(char, f64)> = cfg
        .text
        .chars()
        .map(|ch| {
            let mut buf = [0u8; 4];
            let w = metrics.measure(ch.encode_utf8(&mut buf), &cfg.font_family, cfg.font_size);
            (ch, w)
        })
        .collect();
    let arc: f64 = widths.iter().map(|(_, w)| w / text_radius).sum();
    let mut running = deg_to_rad(curved_span(cfg.align, cfg.rotation, rad_to_deg(arc)));

    widths
        .into_iter()
        .map(|(ch, width)| {
            let step = width / text_radius;
            let mid = running + step / 2.0;
            running += step;
            CurvedGlyph {
                ch,
                width,
                angle: rad_to_deg(mid),
                position: Point::new(
                    center.x + text_radius * mid.cos(),
                    center.y + text_radius * mid.sin(),
                ),
                rotation: rad_to_deg(mid) + 90.0,
            }
        })
        .collect()
}

/// Unrotated box of a straight text layer relative to its anchor.
pub(crate) fn straight_box(align: TextAlign, width: f64, font_size: f64) -> Rect {
    let h = font_size * LINE_HEIGHT_EM / 2.0;
    let (x0, x1) = match align {
        TextAlign::Left => (0.0, width),
        TextAlign::Center => (-width / 2.0, width / 2.0),
        TextAlign::Right => (-width, 0.0),
    };
    Rect::new(x0, -h, x1, h)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
