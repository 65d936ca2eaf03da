//! Haloframe is the composition and interaction engine behind an avatar frame editor.
//!
//! A user uploads a photo, picks a decorative frame style, layers stickers and text on top,
//! optionally animates the result with a motion effect, and exports a PNG or an animated GIF.
//! This crate owns everything between "state" and "pixels":
//!
//! 1. **State**: [`Editor`] holds the photo, its transform, the sticker and text layers, the frame
//!    history and the current selection.
//! 2. **Interaction**: [`InteractionController`] hit-tests pointer input against the same geometry
//!    the renderer uses and turns drags into transform updates.
//! 3. **Plan**: [`Compositor`] turns a [`Scene`] at a given time into a [`DrawPlan`] in fixed layer
//!    order (background, photo, frame, stickers, text, motion overlay). Frame borders come from
//!    one [`FrameRenderer`] strategy per [`ShapeType`], resolved through [`RendererRegistry`].
//! 4. **Raster**: the plan executes on the CPU (`vello_cpu`) into a premultiplied [`Surface`].
//! 5. **Drive**: [`Playback`] runs the live preview loop, [`EditorSession::export_gif`] steps time
//!    manually for deterministic GIF output, and [`PreviewDebouncer`] samples quiet frames into
//!    thumbnails.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: `draw(t)` is a pure function of state and `t`; `draw(0)` is the rest frame.
//! - **Never fatal**: decode failures, missing fonts and missing textures degrade to placeholders.
//! - **Logical canvas**: all geometry lives in a square logical space independent of display size.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analysis;
mod assets;
mod config;
mod drive;
mod editor;
mod encode;
mod foundation;
mod geometry;
mod interact;
mod io;
mod model;
mod render;

pub use crate::analysis::autofit::{auto_fit, cover_ratio};
pub use crate::analysis::palette::{DEFAULT_PALETTE_SIZE, extract_palette};
pub use crate::assets::decode::{PreparedImage, decode_image, parse_svg};
pub use crate::assets::fonts::{ApproxMetrics, FontBook, TextEngine, TextMetrics};
pub use crate::assets::icons::{STICKER_ICONS, icon_svg};
pub use crate::assets::texture::{DirTextureLoader, TextureCache, TextureLoader, TextureState};
pub use crate::config::EditorConfig;
pub use crate::drive::export::{ExportProgress, ExportStatus, GifExport, GifExportOpts};
pub use crate::drive::playback::{FrameRequest, FrameScheduler, ManualScheduler, Playback};
pub use crate::drive::preview::{PreviewDebouncer, Thumbnail, make_thumbnail};
pub use crate::editor::session::EditorSession;
pub use crate::editor::state::{Editor, Notice, Photo, TextPatch};
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Vec2,
};
pub use crate::foundation::error::{HaloError, HaloResult};
pub use crate::geometry::display::DisplayMapping;
pub use crate::geometry::rotate::{deg_to_rad, rad_to_deg, rotate_point};
pub use crate::interact::controller::{Gesture, InteractionController};
pub use crate::interact::hit::{Corner, Handle, HitTarget, LayerMetrics, hit_test};
pub use crate::io::document::DesignDocument;
pub use crate::io::store::{AvatarSink, DesignStore, DirDesignStore, PublishRequest, PublishedMeta};
pub use crate::model::frame::{FrameConfig, FramePatch, ShapeType};
pub use crate::model::history::FrameHistory;
pub use crate::model::layers::{
    MIN_FONT_SIZE, MIN_LAYER_SCALE, MIN_PHOTO_SCALE, MotionEffect, PhotoTransform, StickerConfig,
    TextAlign, TextConfig,
};
pub use crate::model::presets::{default_preset, preset, presets};
pub use crate::model::selection::{InteractionMode, Selection};
pub use crate::render::compositor::{Compositor, Scene};
pub use crate::render::frames::registry::RendererRegistry;
pub use crate::render::frames::{FrameContext, FrameRenderer, stroke_metrics};
pub use crate::render::frames::paths::{circle_path, heart_path, hexagon_path, star_path};
pub use crate::render::motion::{MotionDelta, motion_delta, rain_streaks};
pub use crate::render::plan::{DrawOp, DrawPlan, LayerKind, Paint, PlannedOp, StrokeStyle};
pub use crate::render::surface::Surface;
pub use crate::render::text::{CurvedGlyph, curved_layout, curved_text_radius};
