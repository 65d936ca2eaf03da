use crate::assets::fonts::TextMetrics;
use crate::foundation::core::{Canvas, Point, Rect, Vec2};
use crate::geometry::rotate::{normalize_deg, rad_to_deg, rotate_point};
use crate::model::layers::{StickerConfig, TextConfig};
use crate::render::compositor::Scene;
use crate::render::frames::stroke_metrics;
use crate::render::text::{curved_layout, curved_text_radius, straight_box};

/// Corner of a sticker's box, used as a scale handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-right.
    BottomRight,
    /// Bottom-left.
    BottomLeft,
}

impl Corner {
    /// All corners, clockwise from top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Unit offset of the corner from the box center (y down).
    pub fn sign(self) -> Vec2 {
        match self {
            Self::TopLeft => Vec2::new(-1.0, -1.0),
            Self::TopRight => Vec2::new(1.0, -1.0),
            Self::BottomRight => Vec2::new(1.0, 1.0),
            Self::BottomLeft => Vec2::new(-1.0, 1.0),
        }
    }
}

/// Manipulation handle on the selected sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Rotation knob above the top edge.
    Rotate,
    /// Scale corner.
    Scale(Corner),
}

/// What a pointer-down landed on, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A handle of the selected sticker.
    Handle {
        /// Sticker id.
        sticker: String,
        /// Which handle.
        handle: Handle,
    },
    /// A text layer.
    Text(String),
    /// A sticker body.
    Sticker(String),
    /// Empty area with a photo loaded.
    Photo,
    /// Empty area, no photo.
    Nothing,
}

/// Layer geometry at a given canvas size, shared by the renderer and hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerMetrics {
    /// Edge of a sticker's box at scale 1.
    pub sticker_size: f64,
    /// Pick radius around handle centers.
    pub handle_radius: f64,
    /// Distance of the rotate handle above the box's top edge.
    pub rotate_offset: f64,
    /// Drawn edge of a corner handle.
    pub handle_size: f64,
    /// Extra slack around text boxes.
    pub text_pad: f64,
}

impl LayerMetrics {
    /// Metrics tuned for the 1024 reference canvas, scaled to `canvas`.
    pub fn for_canvas(canvas: Canvas) -> Self {
        let u = canvas.unit();
        Self {
            sticker_size: 100.0 * u,
            handle_radius: 16.0 * u,
            rotate_offset: 30.0 * u,
            handle_size: 12.0 * u,
            text_pad: 8.0 * u,
        }
    }

    /// Half edge of a sticker's box at `scale`.
    pub fn sticker_half(&self, scale: f64) -> f64 {
        self.sticker_size * scale / 2.0
    }

    /// Half diagonal of the nominal (scale 1) sticker box; the scale gesture divides by this.
    pub fn sticker_base_radius(&self) -> f64 {
        self.sticker_size / 2.0 * std::f64::consts::SQRT_2
    }

    /// Local (unrotated, center-relative) position of a handle on a sticker at `scale`.
    pub fn handle_local(&self, handle: Handle, scale: f64) -> Vec2 {
        let half = self.sticker_half(scale);
        match handle {
            Handle::Rotate => Vec2::new(0.0, -half - self.rotate_offset),
            Handle::Scale(c) => c.sign() * half,
        }
    }
}

/// Center of a layer stored as an offset from the canvas center.
pub(crate) fn layer_center(canvas: Canvas, offset: Vec2) -> Point {
    canvas.center() + offset
}

/// Pointer in the sticker's own unrotated frame, relative to its center.
pub(crate) fn to_local(p: Point, center: Point, rotation: f64) -> Vec2 {
    rotate_point(p, center, -rotation) - center
}

pub(crate) fn sticker_contains(
    p: Point,
    s: &StickerConfig,
    canvas: Canvas,
    metrics: &LayerMetrics,
) -> bool {
    let local = to_local(p, layer_center(canvas, s.offset()), s.rotation);
    let half = metrics.sticker_half(s.scale);
    local.x.abs() <= half && local.y.abs() <= half
}

pub(crate) fn sticker_handle_at(
    p: Point,
    s: &StickerConfig,
    canvas: Canvas,
    metrics: &LayerMetrics,
) -> Option<Handle> {
    let local = to_local(p, layer_center(canvas, s.offset()), s.rotation);
    std::iter::once(Handle::Rotate)
        .chain(Corner::ALL.into_iter().map(Handle::Scale))
        .find(|&h| (local - metrics.handle_local(h, s.scale)).hypot() <= metrics.handle_radius)
}

/// Unrotated, anchor-relative box of a straight text layer.
pub(crate) fn text_box(t: &TextConfig, text: &mut dyn TextMetrics, pad: f64) -> Rect {
    let width = text.measure(&t.text, &t.font_family, t.font_size);
    straight_box(t.align, width, t.font_size).inflate(pad, pad)
}

pub(crate) fn text_contains(
    p: Point,
    t: &TextConfig,
    scene: &Scene<'_>,
    metrics: &LayerMetrics,
    text: &mut dyn TextMetrics,
) -> bool {
    if t.curved {
        return curved_text_contains(p, t, scene, metrics, text);
    }
    let local = to_local(p, layer_center(scene.canvas, t.offset()), t.rotation);
    text_box(t, text, metrics.text_pad).contains(local.to_point())
}

/// Polar test against the band and arc that curved text occupies.
fn curved_text_contains(
    p: Point,
    t: &TextConfig,
    scene: &Scene<'_>,
    metrics: &LayerMetrics,
    text: &mut dyn TextMetrics,
) -> bool {
    let center = scene.canvas.center();
    let (sw, _) = stroke_metrics(scene.frame.clamped_width(), scene.canvas.radius());
    let r = curved_text_radius(scene.canvas.radius(), sw, t.font_size);
    let glyphs = curved_layout(t, center, r, text);
    let (Some(first), Some(last)) = (glyphs.first(), glyphs.last()) else {
        return false;
    };

    let band = t.font_size * 0.6 + metrics.text_pad;
    let d = p.distance(center);
    if (d - r).abs() > band {
        return false;
    }

    let half_step = |w: f64| rad_to_deg(w / r) / 2.0;
    let start = first.angle - half_step(first.width);
    let end = last.angle + half_step(last.width);
    let mid = (start + end) / 2.0;
    let pad = rad_to_deg(metrics.text_pad / r.max(1.0));
    let v = p - center;
    let angle = rad_to_deg(v.y.atan2(v.x));
    normalize_deg(angle - mid).abs() <= (end - start) / 2.0 + pad
}

/// Classify a pointer-down at canvas point `p`.
///
/// Priority: handles of the selected sticker, then text layers topmost first, then stickers
/// topmost first, then the photo.
pub fn hit_test(
    p: Point,
    scene: &Scene<'_>,
    metrics: &LayerMetrics,
    text: &mut dyn TextMetrics,
) -> HitTarget {
    if let Some(id) = scene.selection.sticker()
        && let Some(s) = scene.stickers.iter().find(|s| s.id == id)
        && let Some(handle) = sticker_handle_at(p, s, scene.canvas, metrics)
    {
        return HitTarget::Handle {
            sticker: s.id.clone(),
            handle,
        };
    }

    if let Some(t) = scene
        .texts
        .iter()
        .rev()
        .find(|t| text_contains(p, t, scene, metrics, text))
    {
        return HitTarget::Text(t.id.clone());
    }

    if let Some(s) = scene
        .stickers
        .iter()
        .rev()
        .find(|s| sticker_contains(p, s, scene.canvas, metrics))
    {
        return HitTarget::Sticker(s.id.clone());
    }

    if scene.photo.is_some() {
        HitTarget::Photo
    } else {
        HitTarget::Nothing
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/hit.rs"]
mod tests;
