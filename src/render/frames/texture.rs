use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Vec2};
use crate::model::frame::ShapeType;
use crate::render::frames::styles::dashed;
use crate::render::frames::{FrameContext, FrameRenderer, outline_stroke};
use crate::render::plan::{DrawOp, Paint, StrokeStyle};

/// Stroke color while a texture is loading or unavailable.
pub(crate) const PLACEHOLDER_GRAY: Color = Color::rgb(0x9c, 0xa3, 0xaf);

/// Strongest alpha a `color2` tint reaches over the texture.
pub(crate) const MAX_TINT_ALPHA: u8 = 96;

/// Ring painted with a repeating texture scaled to cover the disk, optionally tinted by a
/// translucent `color2` wash. Without a texture it draws a dashed gray placeholder.
#[derive(Debug, Default)]
pub(crate) struct TextureFrame;

impl TextureFrame {
    /// Image-to-canvas transform: cover the `2r` box and align the image with its top-left corner.
    pub(crate) fn pattern_transform(ctx: &FrameContext<'_>, w: f64, h: f64) -> Affine {
        let r = ctx.radius;
        let s = (2.0 * r / w).max(2.0 * r / h);
        Affine::translate(ctx.center.to_vec2() - Vec2::new(r, r)) * Affine::scale(s)
    }
}

impl FrameRenderer for TextureFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::CustomImage
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let Some(image) = ctx.texture.clone() else {
            let (sw, path_r) = ctx.stroke();
            return vec![DrawOp::stroke(
                dashed(
                    &self.create_path(ctx.center, path_r),
                    &[sw * 0.8, sw * 0.6],
                ),
                StrokeStyle::new(sw),
                Paint::Solid(PLACEHOLDER_GRAY),
            )];
        };

        let (w, h) = image.size_f64();
        let transform = Self::pattern_transform(ctx, w, h);
        let mut ops = vec![outline_stroke(self, ctx, Paint::Pattern { image, transform })];
        if let Some(tint) = ctx.frame.color2.filter(|c| c.a > 0) {
            let tint = tint.with_alpha(tint.a.min(MAX_TINT_ALPHA));
            ops.push(outline_stroke(self, ctx, Paint::Solid(tint)));
        }
        ops
    }
}
