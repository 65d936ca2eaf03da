use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point};

/// Fixed compositing layers, in paint order.
///
/// Later layers occlude earlier ones and hit-testing assumes the same order, so a plan's ops are
/// always sorted by layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
    /// Neutral fill of the clip region.
    Background,
    /// Base photo, clipped to the frame path.
    Photo,
    /// Frame border.
    Frame,
    /// Sticker icons and their selection boxes.
    Stickers,
    /// Text layers and their selection boxes.
    Text,
    /// Motion overlay (rain).
    Overlay,
}

/// Stroke geometry. Dash patterns are applied to the path before planning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Width in logical pixels.
    pub width: f64,
    /// Round caps and joins instead of butt caps and miter joins.
    pub round: bool,
}

impl StrokeStyle {
    /// Butt-capped stroke.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            round: false,
        }
    }

    /// Round-capped stroke.
    pub fn round(width: f64) -> Self {
        Self { width, round: true }
    }
}

/// Paint source for fills and strokes.
#[derive(Clone, Debug)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Two-stop linear gradient between points in user space.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Color at `start`.
        from: Color,
        /// Color at `end`.
        to: Color,
    },
    /// Repeating image; `transform` maps image pixels into user space.
    Pattern {
        /// Texture.
        image: Arc<PreparedImage>,
        /// Image-to-user transform.
        transform: Affine,
    },
}

impl Paint {
    /// The flat color, if this is a solid paint.
    pub fn solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
            _ => None,
        }
    }
}

/// Shaped glyphs in one font, positioned relative to the run origin.
#[derive(Clone)]
pub struct GlyphRun {
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) size: f32,
    pub(crate) color: Color,
    pub(crate) glyphs: Vec<vello_cpu::Glyph>,
}

impl std::fmt::Debug for GlyphRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphRun")
            .field("size", &self.size)
            .field("color", &self.color)
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}

impl GlyphRun {
    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the run has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// One rasterizer command.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Intersect the clip with `path` until the matching [`DrawOp::PopClip`].
    PushClip {
        /// Clip region in canvas space.
        path: BezPath,
    },
    /// Restore the clip pushed last.
    PopClip,
    /// Fill a path.
    Fill {
        /// Geometry in user space.
        path: BezPath,
        /// Paint.
        paint: Paint,
        /// User-to-canvas transform.
        transform: Affine,
    },
    /// Stroke a path.
    Stroke {
        /// Geometry in user space.
        path: BezPath,
        /// Width and caps.
        style: StrokeStyle,
        /// Paint.
        paint: Paint,
        /// User-to-canvas transform.
        transform: Affine,
    },
    /// Draw an image covering `(0, 0)..(width, height)` in user space.
    Image {
        /// Pixels.
        image: Arc<PreparedImage>,
        /// User-to-canvas transform.
        transform: Affine,
    },
    /// Fill a glyph run.
    Glyphs {
        /// Shaped glyphs.
        run: Arc<GlyphRun>,
        /// Run-to-canvas transform.
        transform: Affine,
    },
    /// Render `ops` in isolation, Gaussian-blur the result, then composite it.
    Blurred {
        /// Kernel radius in pixels.
        radius: u32,
        /// Kernel sigma in pixels.
        sigma: f32,
        /// Ops to blur.
        ops: Vec<DrawOp>,
    },
}

impl DrawOp {
    /// Stroke with the identity transform.
    pub fn stroke(path: BezPath, style: StrokeStyle, paint: Paint) -> Self {
        Self::Stroke {
            path,
            style,
            paint,
            transform: Affine::IDENTITY,
        }
    }

    /// Fill with the identity transform.
    pub fn fill(path: BezPath, paint: Paint) -> Self {
        Self::Fill {
            path,
            paint,
            transform: Affine::IDENTITY,
        }
    }
}

/// A draw op tagged with the layer that emitted it.
#[derive(Clone, Debug)]
pub struct PlannedOp {
    /// Emitting layer.
    pub layer: LayerKind,
    /// Command.
    pub op: DrawOp,
}

/// Complete command list for one frame.
#[derive(Clone, Debug)]
pub struct DrawPlan {
    /// Canvas edge length in pixels.
    pub size: u32,
    /// Commands in paint order.
    pub ops: Vec<PlannedOp>,
}

impl DrawPlan {
    /// Empty plan for a `size` x `size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Append one op.
    pub fn push(&mut self, layer: LayerKind, op: DrawOp) {
        self.ops.push(PlannedOp { layer, op });
    }

    /// Append several ops for the same layer.
    pub fn extend(&mut self, layer: LayerKind, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops
            .extend(ops.into_iter().map(|op| PlannedOp { layer, op }));
    }

    /// Ops emitted by `layer`.
    pub fn ops_in(&self, layer: LayerKind) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops
            .iter()
            .filter(move |p| p.layer == layer)
            .map(|p| &p.op)
    }

    /// Distinct layers in emission order.
    pub fn layers(&self) -> Vec<LayerKind> {
        let mut out: Vec<LayerKind> = Vec::new();
        for p in &self.ops {
            if out.last() != Some(&p.layer) {
                out.push(p.layer);
            }
        }
        out
    }
}
