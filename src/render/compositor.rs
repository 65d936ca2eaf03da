//! Layered draw pipeline.
//!
//! [`Compositor::plan`] turns a [`Scene`] at time `t` into a [`DrawPlan`] in fixed layer order;
//! [`Compositor::draw`] rasterizes that plan into a [`Surface`]. Both are pure functions of the
//! scene and `t` apart from the texture and sprite caches.

use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::assets::fonts::{ShapedText, TextEngine, TextMetrics};
use crate::assets::texture::{TextureCache, TextureLoader};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2};
use crate::foundation::error::HaloResult;
use crate::geometry::rotate::deg_to_rad;
use crate::interact::hit::{Corner, Handle, LayerMetrics, text_box};
use crate::model::frame::{FrameConfig, ShapeType};
use crate::model::layers::{MotionEffect, PhotoTransform, StickerConfig, TextConfig};
use crate::model::selection::Selection;
use crate::render::frames::paths::circle_path;
use crate::render::frames::registry::RendererRegistry;
use crate::render::frames::styles::dashed;
use crate::render::frames::{FrameContext, stroke_metrics};
use crate::render::motion::{motion_delta, rain_streaks};
use crate::render::painter::Painter;
use crate::render::plan::{DrawOp, DrawPlan, GlyphRun, LayerKind, Paint, StrokeStyle};
use crate::render::sprites::SpriteCache;
use crate::render::surface::Surface;
use crate::render::text::{curved_layout, curved_text_radius, straight_box};

/// Neutral fill under the photo.
pub(crate) const BACKGROUND: Color = Color::rgb(0xf3, 0xf4, 0xf6);
/// Selection boxes and handles.
pub(crate) const SELECTION: Color = Color::rgb(0x3b, 0x82, 0xf6);
/// Fill for stickers whose icon cannot be drawn.
pub(crate) const STICKER_PLACEHOLDER: Color = Color::rgb(0xd1, 0xd5, 0xdb);
/// Rain streak color.
pub(crate) const RAIN: Color = Color::rgba(255, 255, 255, 150);
/// Drop shadow under text.
pub(crate) const TEXT_SHADOW: Color = Color::rgba(0, 0, 0, 128);

/// Read-only view of everything one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Logical canvas.
    pub canvas: Canvas,
    /// Base photo, if loaded.
    pub photo: Option<&'a Arc<PreparedImage>>,
    /// User transform of the photo.
    pub transform: PhotoTransform,
    /// Active frame.
    pub frame: &'a FrameConfig,
    /// Sticker layers, bottom first.
    pub stickers: &'a [StickerConfig],
    /// Text layers, bottom first.
    pub texts: &'a [TextConfig],
    /// Motion effect.
    pub motion: MotionEffect,
    /// Current selection.
    pub selection: &'a Selection,
    /// Draw selection decorations. Off while playing or recording.
    pub show_selection: bool,
}

/// Owns the caches and the rasterizer behind `draw(t)`.
#[derive(Debug)]
pub struct Compositor {
    registry: RendererRegistry,
    textures: TextureCache,
    sprites: SpriteCache,
    text: TextEngine,
    painter: Painter,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(TextEngine::default())
    }
}

impl Compositor {
    /// Compositor shaping text with `text`.
    pub fn new(text: TextEngine) -> Self {
        Self {
            registry: RendererRegistry::new(),
            textures: TextureCache::new(),
            sprites: SpriteCache::new(),
            text,
            painter: Painter::new(),
        }
    }

    /// Texture cache shared by frame renders.
    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    /// Perform queued texture loads. Returns how many succeeded.
    pub fn pump_textures(&mut self, loader: &dyn TextureLoader) -> usize {
        self.textures.pump(loader)
    }

    /// The measurer text layout uses, for hit-testing against the same geometry.
    pub fn text_metrics(&mut self) -> &mut dyn TextMetrics {
        &mut self.text
    }

    /// Renderer registry.
    pub fn registry_mut(&mut self) -> &mut RendererRegistry {
        &mut self.registry
    }

    /// Render `scene` at `time_ms` into `surface`.
    #[tracing::instrument(level = "debug", skip(self, scene, surface), fields(size = scene.canvas.size))]
    pub fn draw(&mut self, scene: &Scene<'_>, time_ms: f64, surface: &mut Surface) -> HaloResult<()> {
        let plan = self.plan(scene, time_ms);
        self.painter.paint(&plan, surface)
    }

    /// Build the draw plan for `scene` at `time_ms`.
    pub fn plan(&mut self, scene: &Scene<'_>, time_ms: f64) -> DrawPlan {
        let mut plan = DrawPlan::new(scene.canvas.size);
        let metrics = LayerMetrics::for_canvas(scene.canvas);

        let renderer = self.registry.get(scene.frame.shape_type);
        let texture = self.frame_texture(scene.frame);
        let ctx = FrameContext::new(scene.canvas, scene.frame).with_texture(texture);
        let clip = renderer.clip_path(&ctx);

        plan.push(
            LayerKind::Background,
            DrawOp::fill(clip.clone(), Paint::Solid(BACKGROUND)),
        );

        if let Some(photo) = scene.photo {
            plan.push(LayerKind::Photo, DrawOp::PushClip { path: clip });
            plan.push(
                LayerKind::Photo,
                DrawOp::Image {
                    image: photo.clone(),
                    transform: photo_transform(scene.canvas, photo, scene.transform),
                },
            );
            plan.push(LayerKind::Photo, DrawOp::PopClip);
        }

        if scene.frame.shape_type != ShapeType::None {
            plan.extend(LayerKind::Frame, renderer.draw_frame(&ctx));
        }

        for (i, sticker) in scene.stickers.iter().enumerate() {
            let ops = self.sticker_ops(scene, &metrics, sticker, i, time_ms);
            plan.extend(LayerKind::Stickers, ops);
        }

        for text in scene.texts {
            let ops = self.text_ops(scene, &metrics, text);
            plan.extend(LayerKind::Text, ops);
        }

        if scene.motion == MotionEffect::Rain {
            plan.push(LayerKind::Overlay, rain_op(scene.canvas, time_ms));
        }

        plan
    }

    fn frame_texture(&mut self, frame: &FrameConfig) -> Option<Arc<PreparedImage>> {
        if frame.shape_type != ShapeType::CustomImage {
            return None;
        }
        let url = frame.image_url.as_deref()?;
        self.textures.request(url);
        self.textures.resolve(url)
    }

    fn sticker_ops(
        &mut self,
        scene: &Scene<'_>,
        metrics: &LayerMetrics,
        sticker: &StickerConfig,
        index: usize,
        time_ms: f64,
    ) -> Vec<DrawOp> {
        let delta = motion_delta(scene.motion, time_ms, index, scene.canvas);
        let scale = sticker.scale * delta.scale;
        let center = scene.canvas.center() + sticker.offset() + delta.offset;
        let place = Affine::translate(center.to_vec2())
            * Affine::rotate(deg_to_rad(sticker.rotation + delta.rotation));
        let edge = metrics.sticker_size * scale;

        let mut ops = Vec::new();
        match self.sprites.sprite(&sticker.icon, edge) {
            Some(sprite) => {
                let (w, h) = sprite.size_f64();
                ops.push(DrawOp::Image {
                    transform: place
                        * Affine::scale_non_uniform(edge / w, edge / h)
                        * Affine::translate((-w / 2.0, -h / 2.0)),
                    image: sprite,
                });
            }
            None => ops.push(DrawOp::Fill {
                path: circle_path(Point::ORIGIN, edge * 0.4),
                paint: Paint::Solid(STICKER_PLACEHOLDER),
                transform: place,
            }),
        }

        if scene.show_selection && scene.selection.sticker() == Some(sticker.id.as_str()) {
            ops.extend(sticker_selection_ops(scene.canvas, metrics, sticker.scale, place));
        }
        ops
    }

    fn text_ops(
        &mut self,
        scene: &Scene<'_>,
        metrics: &LayerMetrics,
        cfg: &TextConfig,
    ) -> Vec<DrawOp> {
        if cfg.text.is_empty() {
            return Vec::new();
        }
        let shadow = Vec2::new(2.0, 2.0) * scene.canvas.unit();

        if cfg.curved {
            let (sw, _) = stroke_metrics(scene.frame.clamped_width(), scene.canvas.radius());
            let radius = curved_text_radius(scene.canvas.radius(), sw, cfg.font_size);
            let glyphs = curved_layout(cfg, scene.canvas.center(), radius, &mut self.text);
            let mut ops = Vec::new();
            for g in glyphs {
                let mut buf = [0u8; 4];
                let Some(shaped) = self.text.shape(
                    g.ch.encode_utf8(&mut buf),
                    &cfg.font_family,
                    cfg.font_size,
                    cfg.color,
                ) else {
                    continue;
                };
                let transform = Affine::translate(g.position.to_vec2())
                    * Affine::rotate(deg_to_rad(g.rotation))
                    * Affine::translate((-shaped.width / 2.0, -shaped.height / 2.0));
                ops.extend(glyph_ops(shaped, transform, shadow));
            }
            return ops;
        }

        let anchor = scene.canvas.center() + cfg.offset();
        let place =
            Affine::translate(anchor.to_vec2()) * Affine::rotate(deg_to_rad(cfg.rotation));
        let mut ops = Vec::new();
        if let Some(shaped) =
            self.text
                .shape(&cfg.text, &cfg.font_family, cfg.font_size, cfg.color)
        {
            let bx = straight_box(cfg.align, shaped.width, cfg.font_size);
            let transform = place * Affine::translate((bx.x0, -shaped.height / 2.0));
            ops.extend(glyph_ops(shaped, transform, shadow));
        }

        if scene.show_selection && scene.selection.text() == Some(cfg.id.as_str()) {
            let bx = text_box(cfg, &mut self.text, metrics.text_pad);
            ops.push(selection_box(bx, scene.canvas, place));
        }
        ops
    }
}

/// Image-to-canvas transform for the base photo: cover fit, user scale and rotation about the
/// photo center, then the pan offset.
pub(crate) fn photo_transform(
    canvas: Canvas,
    photo: &PreparedImage,
    t: PhotoTransform,
) -> Affine {
    let (w, h) = photo.size_f64();
    let cover = crate::analysis::autofit::cover_ratio(w, h, canvas.radius());
    Affine::translate((canvas.center() + t.position).to_vec2())
        * Affine::rotate(deg_to_rad(t.rotation))
        * Affine::scale(cover * t.scale)
        * Affine::translate((-w / 2.0, -h / 2.0))
}

fn glyph_ops(shaped: ShapedText, transform: Affine, shadow: Vec2) -> Vec<DrawOp> {
    let shadow_run = Arc::new(GlyphRun {
        font: shaped.font.clone(),
        size: shaped.size,
        color: TEXT_SHADOW,
        glyphs: shaped.glyphs.clone(),
    });
    let run = Arc::new(GlyphRun {
        font: shaped.font,
        size: shaped.size,
        color: shaped.color,
        glyphs: shaped.glyphs,
    });
    vec![
        DrawOp::Glyphs {
            run: shadow_run,
            transform: Affine::translate(shadow) * transform,
        },
        DrawOp::Glyphs { run, transform },
    ]
}

fn selection_box(rect: Rect, canvas: Canvas, place: Affine) -> DrawOp {
    let u = canvas.unit();
    let mut outline = BezPath::new();
    outline.move_to((rect.x0, rect.y0));
    outline.line_to((rect.x1, rect.y0));
    outline.line_to((rect.x1, rect.y1));
    outline.line_to((rect.x0, rect.y1));
    outline.close_path();
    DrawOp::Stroke {
        path: dashed(&outline, &[6.0 * u, 4.0 * u]),
        style: StrokeStyle::new(2.0 * u),
        paint: Paint::Solid(SELECTION),
        transform: place,
    }
}

fn sticker_selection_ops(
    canvas: Canvas,
    metrics: &LayerMetrics,
    scale: f64,
    place: Affine,
) -> Vec<DrawOp> {
    let half = metrics.sticker_half(scale);
    let u = canvas.unit();
    let mut ops = vec![selection_box(
        Rect::new(-half, -half, half, half),
        canvas,
        place,
    )];

    let knob = metrics.handle_local(Handle::Rotate, scale).to_point();
    let mut stem = BezPath::new();
    stem.move_to((0.0, -half));
    stem.line_to(knob);
    ops.push(DrawOp::Stroke {
        path: stem,
        style: StrokeStyle::new(2.0 * u),
        paint: Paint::Solid(SELECTION),
        transform: place,
    });
    ops.push(DrawOp::Fill {
        path: circle_path(knob, metrics.handle_size / 2.0),
        paint: Paint::Solid(SELECTION),
        transform: place,
    });

    let hs = metrics.handle_size / 2.0;
    for corner in Corner::ALL {
        let c = metrics.handle_local(Handle::Scale(corner), scale).to_point();
        let square = Rect::new(c.x - hs, c.y - hs, c.x + hs, c.y + hs);
        ops.push(DrawOp::Fill {
            path: kurbo::Shape::to_path(&square, 0.1),
            paint: Paint::Solid(Color::WHITE),
            transform: place,
        });
        ops.push(DrawOp::Stroke {
            path: kurbo::Shape::to_path(&square, 0.1),
            style: StrokeStyle::new(1.5 * u),
            paint: Paint::Solid(SELECTION),
            transform: place,
        });
    }
    ops
}

fn rain_op(canvas: Canvas, time_ms: f64) -> DrawOp {
    let mut path = BezPath::new();
    for (a, b) in rain_streaks(canvas, time_ms) {
        path.move_to(a);
        path.line_to(b);
    }
    DrawOp::stroke(path, StrokeStyle::round(2.0 * canvas.unit()), Paint::Solid(RAIN))
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
