//! Frame renderer strategies.
//!
//! Every [`ShapeType`] has one [`FrameRenderer`]. A renderer contributes two things: the closed
//! outline used both to clip the photo and to stroke the border, and the list of draw ops that
//! paint the border itself. Renderers are stateless; textures arrive through [`FrameContext`].

use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Canvas, Point};
use crate::model::frame::{FrameConfig, ShapeType};
use crate::render::plan::{DrawOp, Paint, StrokeStyle};

pub(crate) mod paths;
pub(crate) mod registry;
pub(crate) mod shapes;
pub(crate) mod styles;
pub(crate) mod texture;

/// Half edge of the reference canvas that frame widths are expressed against.
pub(crate) const REFERENCE_HALF: f64 = 512.0;

/// Everything a strategy needs to draw one border.
#[derive(Clone, Debug)]
pub struct FrameContext<'a> {
    /// Canvas center.
    pub center: Point,
    /// Outer radius of the frame disk.
    pub radius: f64,
    /// Active frame style.
    pub frame: &'a FrameConfig,
    /// Texture for [`ShapeType::CustomImage`], when one is loaded.
    pub texture: Option<Arc<PreparedImage>>,
}

impl<'a> FrameContext<'a> {
    /// Context for the full-canvas disk.
    pub fn new(canvas: Canvas, frame: &'a FrameConfig) -> Self {
        Self {
            center: canvas.center(),
            radius: canvas.radius(),
            frame,
            texture: None,
        }
    }

    /// Attach a texture.
    pub fn with_texture(mut self, texture: Option<Arc<PreparedImage>>) -> Self {
        self.texture = texture;
        self
    }

    /// Stroke width and the radius of the path it is centered on.
    pub fn stroke(&self) -> (f64, f64) {
        stroke_metrics(self.frame.clamped_width(), self.radius)
    }
}

/// `(stroke_width, path_radius)` for a frame `width` on a disk of `radius`.
///
/// The stroke is `width * 2 * (radius / 512)` thick, so it keeps its proportion at any render
/// resolution, and it is centered on `radius - stroke_width / 2` so that it lies entirely inside
/// the disk.
pub fn stroke_metrics(width: f64, radius: f64) -> (f64, f64) {
    let sw = width * 2.0 * (radius / REFERENCE_HALF);
    (sw, radius - sw / 2.0)
}

/// Strategy for one frame shape or style.
pub trait FrameRenderer: Send + Sync + std::fmt::Debug {
    /// Shape this renderer draws.
    fn shape(&self) -> ShapeType;

    /// Closed outline of radius `radius`, used both as clip region and as stroke path.
    fn create_path(&self, center: Point, radius: f64) -> BezPath {
        paths::circle_path(center, radius)
    }

    /// Border ops. Empty for [`ShapeType::None`].
    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp>;

    /// Clip region for the photo and the background.
    fn clip_path(&self, ctx: &FrameContext<'_>) -> BezPath {
        self.create_path(ctx.center, ctx.radius)
    }
}

/// A single stroke of `color` along the renderer's own outline.
pub(crate) fn outline_stroke(
    renderer: &dyn FrameRenderer,
    ctx: &FrameContext<'_>,
    paint: Paint,
) -> DrawOp {
    let (sw, path_r) = ctx.stroke();
    DrawOp::stroke(
        renderer.create_path(ctx.center, path_r),
        StrokeStyle::new(sw),
        paint,
    )
}

/// Two-color styles degrade to a plain `color1` ring when `color2` is missing.
pub(crate) fn color2_or_fallback(
    renderer: &dyn FrameRenderer,
    ctx: &FrameContext<'_>,
) -> Result<Color, Vec<DrawOp>> {
    match ctx.frame.color2 {
        Some(c) => Ok(c),
        None => {
            tracing::debug!(shape = ?renderer.shape(), "color2 missing; solid fallback");
            Err(vec![outline_stroke(
                renderer,
                ctx,
                Paint::Solid(ctx.frame.color1),
            )])
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/frames/mod.rs"]
mod tests;
