use std::sync::Arc;

use crate::analysis::autofit::auto_fit;
use crate::analysis::palette::{DEFAULT_PALETTE_SIZE, extract_palette};
use crate::assets::decode::{PreparedImage, decode_image};
use crate::drive::export::ExportStatus;
use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{HaloError, HaloResult};
use crate::model::frame::{FrameConfig, FramePatch};
use crate::model::history::FrameHistory;
use crate::model::layers::{MotionEffect, PhotoTransform, StickerConfig, TextAlign, TextConfig};
use crate::model::presets::{default_preset, preset};
use crate::model::selection::{InteractionMode, Selection};
use crate::render::compositor::Scene;

/// The uploaded base photo.
#[derive(Clone, Debug)]
pub struct Photo {
    /// Decoded pixels.
    pub image: Arc<PreparedImage>,
}

impl Photo {
    /// Natural size in pixels.
    pub fn size(&self) -> (f64, f64) {
        self.image.size_f64()
    }
}

/// A dismissable, non-fatal message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The uploaded photo could not be decoded.
    PhotoDecodeFailed(String),
    /// Dominant colors could not be extracted.
    PaletteFailed(String),
    /// A GIF export failed.
    ExportFailed(String),
    /// A design document was loaded with some fields replaced by defaults.
    DocumentRepaired(Vec<String>),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PhotoDecodeFailed(e) => write!(f, "could not load photo: {e}"),
            Self::PaletteFailed(e) => write!(f, "could not extract colors: {e}"),
            Self::ExportFailed(e) => write!(f, "export failed: {e}"),
            Self::DocumentRepaired(fields) => {
                write!(f, "some design fields were reset: {}", fields.join(", "))
            }
        }
    }
}

/// Partial update for a text layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    /// New content.
    pub text: Option<String>,
    /// New font size.
    pub font_size: Option<f64>,
    /// New font family.
    pub font_family: Option<String>,
    /// New fill color.
    pub color: Option<Color>,
    /// New rotation in degrees.
    pub rotation: Option<f64>,
    /// New alignment.
    pub align: Option<TextAlign>,
    /// Switch between curved and straight layout.
    pub curved: Option<bool>,
}

/// All transient editor state.
///
/// Mutations clamp out-of-range input rather than rejecting it, so the editor is always in a
/// renderable state.
#[derive(Clone, Debug)]
pub struct Editor {
    canvas: Canvas,
    photo: Option<Photo>,
    transform: PhotoTransform,
    stickers: Vec<StickerConfig>,
    texts: Vec<TextConfig>,
    history: FrameHistory,
    motion: MotionEffect,
    selection: Selection,
    mode: InteractionMode,
    playing: bool,
    recording: bool,
    export_status: ExportStatus,
    notices: Vec<Notice>,
    next_id: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

impl Editor {
    /// Fresh editor on `canvas`, starting from the default preset.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            photo: None,
            transform: PhotoTransform::default(),
            stickers: Vec::new(),
            texts: Vec::new(),
            history: FrameHistory::new(default_preset()),
            motion: MotionEffect::None,
            selection: Selection::None,
            mode: InteractionMode::None,
            playing: false,
            recording: false,
            export_status: ExportStatus::Idle,
            notices: Vec::new(),
            next_id: 1,
        }
    }

    /// Logical canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Read-only view for the compositor and hit-testing.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            canvas: self.canvas,
            photo: self.photo.as_ref().map(|p| &p.image),
            transform: self.transform,
            frame: self.history.current(),
            stickers: &self.stickers,
            texts: &self.texts,
            motion: self.motion,
            selection: &self.selection,
            show_selection: !self.playing && !self.recording,
        }
    }

    // Photo

    /// Decode and install an uploaded photo, resetting its transform.
    ///
    /// On failure the photo is cleared (the clip shows the neutral fill), a notice is queued, and
    /// the error is returned.
    pub fn load_photo(&mut self, bytes: &[u8]) -> HaloResult<()> {
        match decode_image(bytes) {
            Ok(img) => {
                self.set_photo(img);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "photo decode failed");
                self.photo = None;
                self.notices.push(Notice::PhotoDecodeFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Install an already decoded photo.
    pub fn set_photo(&mut self, image: PreparedImage) {
        tracing::debug!(w = image.width, h = image.height, "photo loaded");
        self.photo = Some(Photo {
            image: Arc::new(image),
        });
        self.transform = PhotoTransform::default();
    }

    /// Remove the photo.
    pub fn clear_photo(&mut self) {
        self.photo = None;
        self.transform = PhotoTransform::default();
    }

    /// Current photo.
    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// Photo transform.
    pub fn transform(&self) -> PhotoTransform {
        self.transform
    }

    /// Replace the photo transform; the scale is floored.
    pub fn set_transform(&mut self, t: PhotoTransform) {
        self.transform = t;
        self.transform.set_scale(t.scale);
    }

    pub(crate) fn transform_mut(&mut self) -> &mut PhotoTransform {
        &mut self.transform
    }

    /// Show the whole photo inside the frame. Returns `false` without a photo.
    pub fn auto_fit(&mut self) -> bool {
        let Some(photo) = &self.photo else {
            return false;
        };
        let (w, h) = photo.size();
        self.transform = auto_fit(w, h, self.canvas.radius());
        true
    }

    /// Dominant photo colors as one-click candidates for `color1`/`color2`.
    ///
    /// Failures queue a notice and leave the frame untouched.
    pub fn extract_palette(&mut self) -> Option<Vec<Color>> {
        let result = match &self.photo {
            Some(p) => extract_palette(&p.image, DEFAULT_PALETTE_SIZE),
            None => Err(HaloError::validation("no photo loaded")),
        };
        match result {
            Ok(colors) => Some(colors),
            Err(e) => {
                tracing::warn!(error = %e, "palette extraction failed");
                self.notices.push(Notice::PaletteFailed(e.to_string()));
                None
            }
        }
    }

    /// Use `hex` as `color1` (slot 1) or `color2` (slot 2), recorded in the history.
    pub fn apply_palette_color(&mut self, slot: u8, hex: &str) -> HaloResult<()> {
        let color = Color::parse_hex(hex)?;
        let patch = match slot {
            1 => FramePatch {
                color1: Some(color),
                ..FramePatch::default()
            },
            2 => FramePatch {
                color2: Some(color),
                ..FramePatch::default()
            },
            _ => {
                return Err(HaloError::validation(format!(
                    "palette slot must be 1 or 2, got {slot}"
                )));
            }
        };
        self.customize(&patch);
        Ok(())
    }

    // Layers

    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a centered sticker on top and select it. Returns its id.
    pub fn add_sticker(&mut self, icon: &str) -> String {
        let id = self.fresh_id("sticker");
        self.stickers.push(StickerConfig::new(id.clone(), icon));
        self.selection = Selection::Sticker(id.clone());
        id
    }

    /// Append a centered straight text layer on top and select it. Returns its id.
    pub fn add_text(&mut self, text: &str) -> String {
        let id = self.fresh_id("text");
        self.texts.push(TextConfig::new(id.clone(), text));
        self.selection = Selection::Text(id.clone());
        id
    }

    /// Sticker layers, bottom first.
    pub fn stickers(&self) -> &[StickerConfig] {
        &self.stickers
    }

    /// Text layers, bottom first.
    pub fn texts(&self) -> &[TextConfig] {
        &self.texts
    }

    pub(crate) fn sticker_mut(&mut self, id: &str) -> Option<&mut StickerConfig> {
        self.stickers.iter_mut().find(|s| s.id == id)
    }

    pub(crate) fn text_mut(&mut self, id: &str) -> Option<&mut TextConfig> {
        self.texts.iter_mut().find(|t| t.id == id)
    }

    /// Move a sticker. Returns `false` for an unknown id.
    pub fn move_sticker(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(s) = self.sticker_mut(id) else {
            return false;
        };
        s.x = x;
        s.y = y;
        true
    }

    /// Apply `patch` to a text layer. Returns `false` for an unknown id.
    pub fn update_text(&mut self, id: &str, patch: &TextPatch) -> bool {
        let Some(t) = self.text_mut(id) else {
            return false;
        };
        if let Some(text) = &patch.text {
            t.text = text.clone();
        }
        if let Some(fs) = patch.font_size {
            t.set_font_size(fs);
        }
        if let Some(family) = &patch.font_family {
            t.font_family = family.clone();
        }
        if let Some(c) = patch.color {
            t.color = c;
        }
        if let Some(r) = patch.rotation {
            t.rotation = r;
        }
        if let Some(a) = patch.align {
            t.align = a;
        }
        if let Some(c) = patch.curved {
            t.curved = c;
        }
        true
    }

    /// Delete the selected layer. Returns `false` when nothing was selected.
    pub fn remove_selected(&mut self) -> bool {
        let removed = match &self.selection {
            Selection::Sticker(id) => {
                let before = self.stickers.len();
                self.stickers.retain(|s| &s.id != id);
                before != self.stickers.len()
            }
            Selection::Text(id) => {
                let before = self.texts.len();
                self.texts.retain(|t| &t.id != id);
                before != self.texts.len()
            }
            Selection::None => false,
        };
        if removed {
            self.selection = Selection::None;
        }
        removed
    }

    /// Move the selected layer one step toward the top. Returns `false` if it cannot move.
    pub fn bring_forward(&mut self) -> bool {
        self.shift_selected(1)
    }

    /// Move the selected layer one step toward the bottom. Returns `false` if it cannot move.
    pub fn send_backward(&mut self) -> bool {
        self.shift_selected(-1)
    }

    fn shift_selected(&mut self, step: isize) -> bool {
        fn shift<T>(items: &mut [T], idx: Option<usize>, step: isize) -> bool {
            let Some(i) = idx else {
                return false;
            };
            let Some(j) = i.checked_add_signed(step).filter(|&j| j < items.len()) else {
                return false;
            };
            items.swap(i, j);
            true
        }
        match &self.selection {
            Selection::Sticker(id) => {
                let idx = self.stickers.iter().position(|s| &s.id == id);
                shift(&mut self.stickers, idx, step)
            }
            Selection::Text(id) => {
                let idx = self.texts.iter().position(|t| &t.id == id);
                shift(&mut self.texts, idx, step)
            }
            Selection::None => false,
        }
    }

    pub(crate) fn replace_layers(&mut self, stickers: Vec<StickerConfig>, texts: Vec<TextConfig>) {
        let ids = stickers.iter().map(|s| &s.id).chain(texts.iter().map(|t| &t.id));
        let max_suffix = ids
            .filter_map(|id| id.rsplit_once('-').and_then(|(_, n)| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_suffix + 1);
        self.stickers = stickers;
        self.texts = texts;
        self.selection = Selection::None;
    }

    // Selection

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a layer. Unknown ids clear the selection.
    pub fn select(&mut self, selection: Selection) {
        let known = match &selection {
            Selection::Sticker(id) => self.stickers.iter().any(|s| &s.id == id),
            Selection::Text(id) => self.texts.iter().any(|t| &t.id == id),
            Selection::None => true,
        };
        self.selection = if known { selection } else { Selection::None };
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection = Selection::None;
    }

    /// Active gesture kind.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "interaction mode");
        }
        self.mode = mode;
    }

    // Frame

    /// Active frame configuration.
    pub fn frame(&self) -> &FrameConfig {
        self.history.current()
    }

    /// Frame history.
    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// Switch to preset `id`, recorded in the history.
    pub fn select_preset(&mut self, id: &str) -> HaloResult<()> {
        let cfg = preset(id)
            .ok_or_else(|| HaloError::validation(format!("unknown preset \"{id}\"")))?;
        self.history.push(cfg.clone());
        Ok(())
    }

    /// Apply a customization, recorded in the history as a `"custom"` frame.
    pub fn customize(&mut self, patch: &FramePatch) {
        let next = self.history.current().apply(patch);
        self.history.push(next);
    }

    /// Install a whole frame configuration (document load), recorded in the history.
    pub fn set_frame(&mut self, frame: FrameConfig) {
        self.history.push(frame);
    }

    /// Step the frame history back.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Step the frame history forward.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Whether [`Self::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`Self::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // Motion and playback

    /// Motion effect.
    pub fn motion(&self) -> MotionEffect {
        self.motion
    }

    /// Set the motion effect.
    pub fn set_motion(&mut self, effect: MotionEffect) {
        self.motion = effect;
    }

    /// Whether the live preview loop is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Whether a GIF export owns the canvas.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub(crate) fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// Last export status.
    pub fn export_status(&self) -> &ExportStatus {
        &self.export_status
    }

    pub(crate) fn set_export_status(&mut self, status: ExportStatus) {
        self.export_status = status;
    }

    // Notices

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Dismiss the notice at `index`.
    pub fn dismiss_notice(&mut self, index: usize) -> Option<Notice> {
        (index < self.notices.len()).then(|| self.notices.remove(index))
    }

    /// Drain every notice.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Back to a fresh editor on the same canvas.
    pub fn reset(&mut self) {
        *self = Self::new(self.canvas);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
