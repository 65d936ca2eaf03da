use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

/// Minimum proportional stroke thickness.
pub const MIN_FRAME_WIDTH: f64 = 5.0;
/// Maximum proportional stroke thickness.
pub const MAX_FRAME_WIDTH: f64 = 50.0;

/// Frame shape or style family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    /// No border; the photo is still clipped to the disk.
    None,
    /// Single solid ring.
    #[default]
    Solid,
    /// Dashed ring.
    Dashed,
    /// Linear two-color gradient ring.
    Gradient,
    /// Layered glow ring.
    Neon,
    /// Two concentric rings.
    Double,
    /// Ring with an offset drop-shadow ring.
    Memphis,
    /// Thin ring with evenly spaced dots.
    Geometric,
    /// Five-pointed star outline.
    Star,
    /// Heart outline with a gradient stroke.
    Heart,
    /// Hexagon outline.
    Hexagon,
    /// Ring filled with a repeating texture image.
    CustomImage,
}

impl ShapeType {
    /// Every shape type, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::None,
        Self::Solid,
        Self::Dashed,
        Self::Gradient,
        Self::Neon,
        Self::Double,
        Self::Memphis,
        Self::Geometric,
        Self::Star,
        Self::Heart,
        Self::Hexagon,
        Self::CustomImage,
    ];

    /// Whether the style blends `color1` with `color2`.
    pub fn uses_color2(self) -> bool {
        matches!(
            self,
            Self::Gradient | Self::Neon | Self::Double | Self::Memphis | Self::Heart | Self::CustomImage
        )
    }

    /// Default `color2` supplied when switching into a two-color style.
    pub fn default_color2(self) -> Option<Color> {
        match self {
            Self::Gradient => Some(Color::rgb(0x8b, 0x5c, 0xf6)),
            Self::Neon => Some(Color::rgb(0x22, 0xd3, 0xee)),
            Self::Double => Some(Color::rgb(0xff, 0xff, 0xff)),
            Self::Memphis => Some(Color::rgb(0x11, 0x18, 0x27)),
            Self::Heart => Some(Color::rgb(0xf4, 0x72, 0xb6)),
            Self::CustomImage => Some(Color::rgba(0xff, 0xff, 0xff, 0)),
            _ => None,
        }
    }

    /// Whether the clip/stroke path is the plain circle.
    pub fn is_circular(self) -> bool {
        !matches!(self, Self::Star | Self::Heart | Self::Hexagon)
    }
}

/// Identity and styling of a chosen frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameConfig {
    /// Preset id, or `"custom"` after customization.
    pub id: String,
    /// Shape or style family.
    pub shape_type: ShapeType,
    /// Display name.
    pub name: String,
    /// Primary color.
    pub color1: Color,
    /// Secondary color for two-color styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<Color>,
    /// Proportional stroke thickness in logical units at the 1024 reference, 5..=50.
    pub width: f64,
    /// Texture source for [`ShapeType::CustomImage`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FrameConfig {
    /// Build a config with the width clamped into range.
    pub fn new(
        id: impl Into<String>,
        shape_type: ShapeType,
        name: impl Into<String>,
        color1: Color,
        color2: Option<Color>,
        width: f64,
    ) -> Self {
        Self {
            id: id.into(),
            shape_type,
            name: name.into(),
            color1,
            color2,
            width: clamp_width(width),
            image_url: None,
        }
    }

    /// Builder-style texture source.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Width clamped into the supported range; tolerates configs built by hand or from JSON.
    pub fn clamped_width(&self) -> f64 {
        clamp_width(self.width)
    }

    /// Derive a new snapshot with `patch` applied.
    ///
    /// Switching into a two-color style without a `color2` fills in that style's default.
    pub fn apply(&self, patch: &FramePatch) -> Self {
        let mut next = self.clone();
        next.id = "custom".to_owned();
        if let Some(shape) = patch.shape_type {
            next.shape_type = shape;
        }
        if let Some(c) = patch.color1 {
            next.color1 = c;
        }
        if let Some(c) = patch.color2 {
            next.color2 = Some(c);
        }
        if let Some(w) = patch.width {
            next.width = clamp_width(w);
        }
        if let Some(url) = &patch.image_url {
            next.image_url = Some(url.clone());
        }
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if next.shape_type.uses_color2() && next.color2.is_none() {
            next.color2 = next.shape_type.default_color2();
        }
        next
    }
}

/// Partial update applied through the customization panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FramePatch {
    /// New shape type.
    pub shape_type: Option<ShapeType>,
    /// New primary color.
    pub color1: Option<Color>,
    /// New secondary color.
    pub color2: Option<Color>,
    /// New width (clamped).
    pub width: Option<f64>,
    /// New texture source.
    pub image_url: Option<String>,
    /// New display name.
    pub name: Option<String>,
}

fn clamp_width(w: f64) -> f64 {
    if !w.is_finite() {
        return MIN_FRAME_WIDTH;
    }
    w.clamp(MIN_FRAME_WIDTH, MAX_FRAME_WIDTH)
}

#[cfg(test)]
#[path = "../../tests/unit/model/frame.rs"]
mod tests;
