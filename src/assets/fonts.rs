use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::error::{HaloError, HaloResult};

/// Horizontal text measurement, shared by layout and hit-testing.
pub trait TextMetrics {
    /// Advance width of `text` set in `family` at `size` logical pixels.
    fn measure(&mut self, text: &str, family: &str, size: f64) -> f64;
}

/// Font-independent measurer: every character advances `0.6 * size`.
///
/// Used when no font resolves and by tests that must not depend on installed fonts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMetrics;

impl ApproxMetrics {
    /// Advance per character as a fraction of the font size.
    pub const ADVANCE_EM: f64 = 0.6;
}

impl TextMetrics for ApproxMetrics {
    fn measure(&mut self, text: &str, _family: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * Self::ADVANCE_EM
    }
}

/// One font face resolved to raw bytes.
#[derive(Clone)]
pub(crate) struct FontFace {
    pub(crate) data: Arc<Vec<u8>>,
    pub(crate) index: u32,
}

/// Font database for text layers: explicitly configured files plus, optionally, system fonts.
pub struct FontBook {
    db: usvg::fontdb::Database,
    resolved: HashMap<String, Option<FontFace>>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .field("resolved", &self.resolved.len())
            .finish()
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::empty()
    }
}

impl FontBook {
    /// A book with no faces; every text layer falls back to approximate metrics and is skipped
    /// at raster time.
    pub fn empty() -> Self {
        Self {
            db: usvg::fontdb::Database::new(),
            resolved: HashMap::new(),
        }
    }

    /// Load `files` and, when `system` is set, the platform font directories.
    ///
    /// Unreadable files are logged and skipped.
    pub fn load(files: &[PathBuf], system: bool) -> Self {
        let mut db = usvg::fontdb::Database::new();
        if system {
            db.load_system_fonts();
        }
        for path in files {
            if let Err(e) = db.load_font_file(path) {
                tracing::warn!(path = %path.display(), error = %e, "font file not loaded");
            }
        }
        tracing::debug!(faces = db.len(), "font book loaded");
        Self {
            db,
            resolved: HashMap::new(),
        }
    }

    /// Add a face from memory.
    pub fn add_font_bytes(&mut self, bytes: Vec<u8>) {
        self.db.load_font_data(bytes);
        self.resolved.clear();
    }

    /// Number of loaded faces.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve a CSS-style family list (`"Inter, sans-serif"`), falling back to any face.
    pub(crate) fn resolve(&mut self, family: &str) -> Option<FontFace> {
        if let Some(hit) = self.resolved.get(family) {
            return hit.clone();
        }
        let face = self.query(family);
        if face.is_none() {
            tracing::warn!(family, "no font face resolved; text will not be rasterized");
        }
        self.resolved.insert(family.to_owned(), face.clone());
        face
    }

    fn query(&self, family: &str) -> Option<FontFace> {
        use usvg::fontdb::Family;

        let names: Vec<String> = family
            .split(',')
            .map(|s| s.trim().trim_matches(|c| c == '"' || c == '\'').to_owned())
            .filter(|s| !s.is_empty())
            .collect();
        let mut families: Vec<Family<'_>> = names
            .iter()
            .map(|n| match n.to_ascii_lowercase().as_str() {
                "serif" => Family::Serif,
                "sans-serif" => Family::SansSerif,
                "monospace" => Family::Monospace,
                "cursive" => Family::Cursive,
                "fantasy" => Family::Fantasy,
                _ => Family::Name(n.as_str()),
            })
            .collect();
        families.push(Family::SansSerif);

        let query = usvg::fontdb::Query {
            families: &families,
            ..Default::default()
        };
        let id = self
            .db
            .query(&query)
            .or_else(|| self.db.faces().next().map(|f| f.id))?;
        self.db
            .with_face_data(id, |data, index| FontFace {
                data: Arc::new(data.to_vec()),
                index,
            })
    }
}

/// Shaped single-line text ready for the rasterizer.
#[derive(Clone)]
pub(crate) struct ShapedText {
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) size: f32,
    pub(crate) color: Color,
    /// Glyph origins relative to the line's top-left corner.
    pub(crate) glyphs: Vec<vello_cpu::Glyph>,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Parley-backed shaper over a [`FontBook`].
pub struct TextEngine {
    book: FontBook,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Color>,
    registered: HashMap<(usize, u32), (String, vello_cpu::peniko::FontData)>,
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("book", &self.book)
            .field("registered", &self.registered.len())
            .finish()
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new(FontBook::empty())
    }
}

impl TextEngine {
    /// Shaper drawing faces from `book`.
    pub fn new(book: FontBook) -> Self {
        Self {
            book,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    /// Underlying font book.
    pub fn book_mut(&mut self) -> &mut FontBook {
        &mut self.book
    }

    /// Shape one line. `None` when no font is available.
    pub(crate) fn shape(
        &mut self,
        text: &str,
        family: &str,
        size: f64,
        color: Color,
    ) -> Option<ShapedText> {
        let face = self.book.resolve(family)?;
        match self.shape_with(&face, text, size as f32, color) {
            Ok(shaped) => Some(shaped),
            Err(e) => {
                tracing::warn!(family, error = %e, "text shaping failed");
                None
            }
        }
    }

    fn shape_with(
        &mut self,
        face: &FontFace,
        text: &str,
        size_px: f32,
        color: Color,
    ) -> HaloResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(HaloError::validation(
                "text size must be finite and > 0",
            ));
        }

        let key = (Arc::as_ptr(&face.data) as usize, face.index);
        let (family_name, font) = match self.registered.get(&key) {
            Some(hit) => hit.clone(),
            None => {
                let families = self.font_ctx.collection.register_fonts(
                    parley::fontique::Blob::from(face.data.as_ref().clone()),
                    None,
                );
                let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                    HaloError::validation("no font families registered from font bytes")
                })?;
                let name = self
                    .font_ctx
                    .collection
                    .family_name(family_id)
                    .ok_or_else(|| HaloError::validation("registered font family has no name"))?
                    .to_string();
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(face.data.as_ref().clone()),
                    face.index,
                );
                self.registered.insert(key, (name.clone(), font.clone()));
                (name, font)
            }
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color));

        let mut layout: parley::Layout<Color> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }

        Ok(ShapedText {
            font,
            size: size_px,
            color,
            glyphs,
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        })
    }
}

impl TextMetrics for TextEngine {
    fn measure(&mut self, text: &str, family: &str, size: f64) -> f64 {
        match self.shape(text, family, size, Color::BLACK) {
            Some(shaped) => shaped.width,
            None => ApproxMetrics.measure(text, family, size),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
