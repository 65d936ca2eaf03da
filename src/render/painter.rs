use std::sync::Arc;

use crate::assets::decode::premul_bytes_to_pixmap;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::{HaloError, HaloResult};
use crate::render::blur::blur_rgba8_premul;
use crate::render::plan::{DrawOp, DrawPlan, Paint, StrokeStyle};
use crate::render::surface::Surface;

/// CPU rasterizer for [`DrawPlan`]s.
///
/// The `vello_cpu` context and pixmap are reused across frames of the same size.
#[derive(Default)]
pub(crate) struct Painter {
    target: Option<Target>,
}

struct Target {
    size: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Painter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("size", &self.target.as_ref().map(|t| t.size))
            .finish()
    }
}

impl Painter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Rasterize `plan` into `surface`, replacing its contents.
    pub(crate) fn paint(&mut self, plan: &DrawPlan, surface: &mut Surface) -> HaloResult<()> {
        let size: u16 = plan
            .size
            .try_into()
            .map_err(|_| HaloError::render("canvas size exceeds u16"))?;
        let target = self.target_for(size);

        target.ctx.reset();
        let mut clip_depth = 0usize;
        for planned in &plan.ops {
            draw_op(&mut target.ctx, &planned.op, size, &mut clip_depth)?;
        }
        while clip_depth > 0 {
            target.ctx.pop_layer();
            clip_depth -= 1;
        }
        target.ctx.flush();
        clear_pixmap(&mut target.pixmap);
        target.ctx.render_to_pixmap(&mut target.pixmap);

        surface.clear(plan.size);
        surface
            .data_mut()
            .copy_from_slice(target.pixmap.data_as_u8_slice());
        Ok(())
    }

    fn target_for(&mut self, size: u16) -> &mut Target {
        if self.target.as_ref().is_some_and(|t| t.size != size) {
            self.target = None;
        }
        self.target.get_or_insert_with(|| {
            tracing::debug!(size, "allocating raster target");
            Target {
                size,
                ctx: vello_cpu::RenderContext::new(size, size),
                pixmap: vello_cpu::Pixmap::new(size, size),
            }
        })
    }
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    size: u16,
    clip_depth: &mut usize,
) -> HaloResult<()> {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::PushClip { path } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.push_clip_layer(&bezpath_to_cpu(path));
            *clip_depth += 1;
        }
        DrawOp::PopClip => {
            if *clip_depth == 0 {
                return Err(HaloError::render("PopClip without matching PushClip"));
            }
            ctx.pop_layer();
            *clip_depth -= 1;
        }
        DrawOp::Fill {
            path,
            paint,
            transform,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            set_paint(ctx, paint);
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        DrawOp::Stroke {
            path,
            style,
            paint,
            transform,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_stroke(stroke_to_cpu(*style));
            set_paint(ctx, paint);
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
        DrawOp::Image { image, transform } => {
            let (w, h) = image.size_f64();
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(image.paint.clone());
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        }
        DrawOp::Glyphs { run, transform } => {
            if run.glyphs.is_empty() {
                return Ok(());
            }
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(run.color));
            ctx.glyph_run(&run.font)
                .font_size(run.size)
                .fill_glyphs(run.glyphs.iter().copied());
        }
        DrawOp::Blurred { radius, sigma, ops } => {
            let blurred = render_blurred(ops, size, *radius, *sigma)?;
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(blurred);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(size),
                f64::from(size),
            ));
        }
    }
    Ok(())
}

/// Render `ops` into an isolated pixmap and blur it, returning an image paint.
fn render_blurred(
    ops: &[DrawOp],
    size: u16,
    radius: u32,
    sigma: f32,
) -> HaloResult<vello_cpu::Image> {
    let mut ctx = vello_cpu::RenderContext::new(size, size);
    let mut depth = 0usize;
    for op in ops {
        draw_op(&mut ctx, op, size, &mut depth)?;
    }
    while depth > 0 {
        ctx.pop_layer();
        depth -= 1;
    }
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(size, size);
    ctx.render_to_pixmap(&mut pixmap);

    let (w, h) = (u32::from(size), u32::from(size));
    let blurred = blur_rgba8_premul(pixmap.data_as_u8_slice(), w, h, radius, sigma)?;
    let pixmap = premul_bytes_to_pixmap(&blurred, w, h)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    match paint {
        Paint::Solid(c) => ctx.set_paint(color_to_cpu(*c)),
        Paint::Linear {
            start,
            end,
            from,
            to,
        } => {
            let gradient = vello_cpu::peniko::Gradient::new_linear(
                point_to_cpu(*start),
                point_to_cpu(*end),
            )
            .with_stops([color_to_cpu(*from), color_to_cpu(*to)]);
            ctx.set_paint(gradient);
        }
        Paint::Pattern { image, transform } => {
            let sampler = vello_cpu::peniko::ImageSampler::default()
                .with_extend(vello_cpu::peniko::Extend::Repeat);
            ctx.set_paint(vello_cpu::Image {
                image: image.paint.image.clone(),
                sampler,
            });
            ctx.set_paint_transform(affine_to_cpu(*transform));
        }
    }
}

fn stroke_to_cpu(style: StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let stroke = vello_cpu::kurbo::Stroke::new(style.width);
    if style.round {
        stroke
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round)
    } else {
        stroke.with_join(vello_cpu::kurbo::Join::Round)
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
