//! Non-circular outlines.

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::model::frame::ShapeType;
use crate::render::frames::paths::{heart_path, hexagon_path, star_path};
use crate::render::frames::{FrameContext, FrameRenderer, color2_or_fallback, outline_stroke};
use crate::render::plan::{DrawOp, Paint};

#[derive(Debug, Default)]
pub(crate) struct StarFrame;

impl FrameRenderer for StarFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Star
    }

    fn create_path(&self, center: Point, radius: f64) -> BezPath {
        star_path(center, radius)
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        vec![outline_stroke(self, ctx, Paint::Solid(ctx.frame.color1))]
    }
}

#[derive(Debug, Default)]
pub(crate) struct HexagonFrame;

impl FrameRenderer for HexagonFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Hexagon
    }

    fn create_path(&self, center: Point, radius: f64) -> BezPath {
        hexagon_path(center, radius)
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        vec![outline_stroke(self, ctx, Paint::Solid(ctx.frame.color1))]
    }
}

/// Heart outline with a top-to-bottom `color1 -> color2` gradient.
#[derive(Debug, Default)]
pub(crate) struct HeartFrame;

impl FrameRenderer for HeartFrame {
    fn shape(&self) -> ShapeType {
        ShapeType::Heart
    }

    fn create_path(&self, center: Point, radius: f64) -> BezPath {
        heart_path(center, radius)
    }

    fn draw_frame(&self, ctx: &FrameContext<'_>) -> Vec<DrawOp> {
        let to = match color2_or_fallback(self, ctx) {
            Ok(c) => c,
            Err(fallback) => return fallback,
        };
        let paint = Paint::Linear {
            start: ctx.center - Vec2::new(0.0, ctx.radius),
            end: ctx.center + Vec2::new(0.0, ctx.radius),
            from: ctx.frame.color1,
            to,
        };
        vec![outline_stroke(self, ctx, paint)]
    }
}
