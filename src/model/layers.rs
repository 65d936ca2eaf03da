use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Vec2;

/// Floor for the base photo's user scale.
pub const MIN_PHOTO_SCALE: f64 = 0.1;
/// Floor for sticker scale; keeps layers visible and grabbable.
pub const MIN_LAYER_SCALE: f64 = 0.2;
/// Smallest font size a text layer accepts.
pub const MIN_FONT_SIZE: f64 = 4.0;

/// User transform of the base photo, relative to the "cover" fit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoTransform {
    /// Multiplier on top of the cover scale, floored at [`MIN_PHOTO_SCALE`].
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Offset from the canvas center. Unclamped: the frame clips whatever pans out.
    pub position: Vec2,
}

impl Default for PhotoTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            position: Vec2::ZERO,
        }
    }
}

impl PhotoTransform {
    /// Set the scale, flooring at [`MIN_PHOTO_SCALE`].
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = floor_finite(scale, MIN_PHOTO_SCALE);
    }
}

/// A decorative icon layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerConfig {
    /// Stable layer id.
    pub id: String,
    /// Key into the fixed icon set.
    pub icon: String,
    /// Horizontal offset from the canvas center.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset from the canvas center.
    #[serde(default)]
    pub y: f64,
    /// Scale, floored at [`MIN_LAYER_SCALE`].
    #[serde(default = "one")]
    pub scale: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl StickerConfig {
    /// A centered, unscaled sticker.
    pub fn new(id: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }

    /// Offset from the canvas center.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move to a new offset.
    pub fn set_offset(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Set the scale, flooring at [`MIN_LAYER_SCALE`].
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = floor_finite(scale, MIN_LAYER_SCALE);
    }
}

/// Horizontal anchor of a text layer (or of the arc for curved text).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Text starts at the anchor.
    Left,
    /// Text is centered on the anchor.
    #[default]
    Center,
    /// Text ends at the anchor.
    Right,
}

/// A text layer, straight or laid along the frame's inner circle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Stable layer id.
    pub id: String,
    /// Content.
    pub text: String,
    /// Horizontal offset from the canvas center.
    #[serde(default)]
    pub x: f64,
    /// Vertical offset from the canvas center.
    #[serde(default)]
    pub y: f64,
    /// Font size in logical pixels, floored at [`MIN_FONT_SIZE`].
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Requested font family.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Fill color.
    #[serde(default = "default_text_color")]
    pub color: Color,
    /// Rotation in degrees; for curved text this is the arc anchor angle (0 = 12 o'clock).
    #[serde(default)]
    pub rotation: f64,
    /// Alignment relative to the anchor.
    #[serde(default)]
    pub align: TextAlign,
    /// Lay the text along the frame's inner circle.
    #[serde(default)]
    pub curved: bool,
}

impl TextConfig {
    /// A centered straight text layer with default styling.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            x: 0.0,
            y: 0.0,
            font_size: default_font_size(),
            font_family: default_font_family(),
            color: default_text_color(),
            rotation: 0.0,
            align: TextAlign::Center,
            curved: false,
        }
    }

    /// Offset from the canvas center.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move to a new offset.
    pub fn set_offset(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Set the font size, flooring at [`MIN_FONT_SIZE`].
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = floor_finite(size, MIN_FONT_SIZE);
    }
}

/// Time-driven effect applied to stickers and the overlay at render time only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionEffect {
    /// Static.
    #[default]
    None,
    /// Sinusoidal sticker scale.
    Pulse,
    /// Continuous sticker rotation.
    Spin,
    /// Occasional positional jitter.
    Glitch,
    /// Falling streak overlay.
    Rain,
}

impl MotionEffect {
    /// Whether playback has anything to animate.
    pub fn is_animated(self) -> bool {
        self != Self::None
    }
}

fn floor_finite(scale: f64, min: f64) -> f64 {
    if scale.is_finite() { scale.max(min) } else { min }
}

fn one() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    48.0
}

fn default_font_family() -> String {
    "sans-serif".to_owned()
}

fn default_text_color() -> Color {
    Color::WHITE
}

#[cfg(test)]
#[path = "../../tests/unit/model/layers.rs"]
mod tests;
