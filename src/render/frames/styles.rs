//! Ring styles that reuse the circular outline and only vary how the border is painted.

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::model::frame::ShapeType;
use crate::render::frames::paths::{circle_path, polar};
use crate::render::frames::{FrameContext, FrameRenderer, color2_or_fallback, outline_stroke};
use crate::render::plan::{DrawOp, Paint, StrokeStyle};

/// Dots placed around a geometric ring.
pub(crate) const GEOMETRIC_DOTS: usize = 24;

/// Upper bound for the neon glow kernel, in pixels.
const MAX_GLOW_RADIUS: u32 = 48;

/// Photo clipped to the disk, no border.
#[derive(Debug, Default)]
pub(crate) struct NoFrame;

impl FrameRenderer for NoFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::None
    }

    fn draw_frame(&self, _ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        Vec::new()
    }
}

#[derive(Debug, Default)]
pub(crate) struct SolidFrame;

impl FrameRenderer for SolidFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Solid
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        vec![outline_stroke(self, ctx, Paint::Solid(ctx.frame.color1))]
    }
}

/// Dash length and gap are proportional to the stroke width.
#[derive(Debug, Default)]
pub(crate) struct DashedFrame;

impl DashedFrame {
    pub(crate) fn pattern(sw: f64) -> [f64; 2] {
        [sw * 2.0, sw * 1.2]
    }
}

impl FrameRenderer for DashedFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Dashed
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let (sw, path_r) = ctx.stroke();
        vec![DrawOp::stroke(
            dashed(&self.create_path(ctx.center, path_r), &Self::pattern(sw)),
            StrokeStyle::new(sw),
            Paint::Solid(ctx.frame.color1),
        )]
    }
}

/// Diagonal `color1 -> color2` gradient across the disk's bounding box.
#[derive(Debug, Default)]
pub(crate) struct GradientFrame;

impl FrameRenderer for GradientFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Gradient
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let to = match color2_or_fallback(self, ctx) {
            Ok(c) => c,
            Err(fallback) => return fallback,
        };
        let r = ctx.radius;
        let paint = Paint::Linear {
            start: ctx.center - Vec2::new(r, r),
            end: ctx.center + Vec2::new(r, r),
            from: ctx.frame.color1,
            to,
        };
        vec![outline_stroke(self, ctx, paint)]
    }
}

/// Blurred `color1` glow, a `color2` tube, and a thin white core.
#[derive(Debug, Default)]
pub(crate) struct NeonFrame;

impl FrameRenderer for NeonFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Neon
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let tube = match color2_or_fallback(self, ctx) {
            Ok(c) => c,
            Err(fallback) => return fallback,
        };
        let (sw, path_r) = ctx.stroke();
        let path = self.create_path(ctx.center, path_r);
        let radius = (sw.ceil() as u32).clamp(1, MAX_GLOW_RADIUS);

        vec![
            DrawOp::Blurred {
                radius,
                sigma: (radius as f32 / 2.0).max(0.5),
                ops: vec![DrawOp::stroke(
                    path.clone(),
                    StrokeStyle::new(sw),
                    Paint::Solid(ctx.frame.color1),
                )],
            },
            DrawOp::stroke(path.clone(), StrokeStyle::new(sw * 0.6), Paint::Solid(tube)),
            DrawOp::stroke(path, StrokeStyle::new(sw * 0.2), Paint::Solid(Color::WHITE)),
        ]
    }
}

/// Outer `color1` ring on the edge and a thinner inner `color2` ring, together spanning one
/// stroke width.
#[derive(Debug, Default)]
pub(crate) struct DoubleFrame;

impl DoubleFrame {
    /// `(width, path_radius)` of the outer and inner rings.
    pub(crate) fn rings(sw: f64, radius: f64) -> [(f64, f64); 2] {
        [
            (sw * 0.5, radius - sw * 0.25),
            (sw * 0.3, radius - sw * 0.85),
        ]
    }
}

impl FrameRenderer for DoubleFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Double
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let inner = match color2_or_fallback(self, ctx) {
            Ok(c) => c,
            Err(fallback) => return fallback,
        };
        let (sw, _) = ctx.stroke();
        let [(w_out, r_out), (w_in, r_in)] = Self::rings(sw, ctx.radius);
        vec![
            DrawOp::stroke(
                self.create_path(ctx.center, r_out),
                StrokeStyle::new(w_out),
                Paint::Solid(ctx.frame.color1),
            ),
            DrawOp::stroke(
                self.create_path(ctx.center, r_in),
                StrokeStyle::new(w_in),
                Paint::Solid(inner),
            ),
        ]
    }
}

/// `color2` ring shifted down-right, then the `color1` ring on top.
#[derive(Debug, Default)]
pub(crate) struct MemphisFrame;

impl MemphisFrame {
    pub(crate) fn shadow_offset(sw: f64) -> Vec2 {
        Vec2::new(sw * 0.4, sw * 0.4)
    }
}

impl FrameRenderer for MemphisFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Memphis
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let shadow = match color2_or_fallback(self, ctx) {
            Ok(c) => c,
            Err(fallback) => return fallback,
        };
        let (sw, path_r) = ctx.stroke();
        let path = self.create_path(ctx.center, path_r);
        vec![
            DrawOp::Stroke {
                path: path.clone(),
                style: StrokeStyle::new(sw),
                paint: Paint::Solid(shadow),
                transform: Affine::translate(Self::shadow_offset(sw)),
            },
            DrawOp::stroke(path, StrokeStyle::new(sw), Paint::Solid(ctx.frame.color1)),
        ]
    }
}

/// Thin ring with evenly spaced filled dots one stroke width across.
#[derive(Debug, Default)]
pub(crate) struct GeometricFrame;

impl GeometricFrame {
    pub(crate) fn dot_centers(center: Point, path_r: f64) -> Vec<Point> {
        (0..GEOMETRIC_DOTS)
            .map(|i| polar(center, path_r, -90.0 + 360.0 * i as f64 / GEOMETRIC_DOTS as f64))
            .collect()
    }
}

impl FrameRenderer for GeometricFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Geometric
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let (sw, path_r) = ctx.stroke();
        let dot = ctx.frame.color2.unwrap_or(ctx.frame.color1);
        let mut ops = vec![DrawOp::stroke(
            self.create_path(ctx.center, path_r),
            StrokeStyle::new(sw * 0.25),
            Paint::Solid(ctx.frame.color1),
        )];
        ops.extend(
            Self::dot_centers(ctx.center, path_r)
                .into_iter()
                .map(|c| DrawOp::fill(circle_path(c, sw * 0.5), Paint::Solid(dot))),
        );
        ops
    }
}

/// Apply a dash pattern to `path`.
pub(crate) fn dashed(path: &BezPath, pattern: &[f64]) -> BezPath {
    kurbo::dash(path.iter(), 0.0, pattern).collect()
}
